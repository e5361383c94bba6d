//! Content loader - reads the portfolio from the source directory

use std::fs;
use std::path::PathBuf;

use super::{ContentError, Portfolio};
use crate::Folio;

/// Loads the portfolio for a site
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Path of the content file, whether or not it exists
    pub fn content_path(&self) -> PathBuf {
        self.folio
            .source_dir
            .join(&self.folio.config.content_file)
    }

    /// Load the portfolio, falling back to the built-in content
    pub fn load(&self) -> Result<Portfolio, ContentError> {
        let path = self.content_path();
        if !path.exists() {
            tracing::debug!("No content file at {:?}, using built-in content", path);
            return Portfolio::builtin();
        }

        let raw = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        let portfolio = Portfolio::from_yaml(&raw, path.clone())?;
        tracing::debug!(
            "Loaded {} projects and {} posts from {:?}",
            portfolio.projects.len(),
            portfolio.posts.len(),
            path
        );
        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_falls_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let portfolio = ContentLoader::new(&folio).load().unwrap();
        assert_eq!(portfolio.projects.len(), 4);
    }

    #[test]
    fn test_loads_content_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("source")).unwrap();
        fs::write(
            dir.path().join("source/portfolio.yml"),
            "projects:\n  - title: Only One\n    tags: [Rust]\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let portfolio = ContentLoader::new(&folio).load().unwrap();
        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(portfolio.projects[0].title, "Only One");
        assert!(portfolio.posts.is_empty());
    }

    #[test]
    fn test_invalid_content_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("source")).unwrap();
        fs::write(dir.path().join("source/portfolio.yml"), "posts: [").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let err = ContentLoader::new(&folio).load().unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }
}
