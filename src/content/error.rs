//! Content errors

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while loading or validating portfolio content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{kind} #{index} has an empty title")]
    EmptyTitle { kind: &'static str, index: usize },

    #[error("{kind} \"{title}\" has an empty tag")]
    EmptyTag { kind: &'static str, title: String },

    #[error("{kind} \"{title}\" uses the reserved tag \"{tag}\"")]
    ReservedTag {
        kind: &'static str,
        title: String,
        tag: String,
    },
}
