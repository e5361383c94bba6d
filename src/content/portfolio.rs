//! The portfolio: every block rendered on the page

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ContentError, ContentItem, Link, Post, Project};
use crate::filter::SENTINEL_TAG;

/// Content shipped with the binary, used when no content file exists
pub const BUILTIN_CONTENT: &str = include_str!("portfolio.yml");

/// Complete page content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub hero: Hero,
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
    pub now: Vec<NowBlock>,
    pub reads: Reads,
    pub uses: Vec<UseGroup>,
    pub travel: Vec<Place>,
    pub about: About,
    pub contact: Contact,
}

/// Header block with name, tagline and focus card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    pub badges: Vec<String>,
    pub focus_title: String,
    pub focus: Vec<String>,
    pub focus_note: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NowBlock {
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reads {
    pub current: Vec<Book>,
    pub recent: Vec<Book>,
    pub wishlist: Vec<Book>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UseGroup {
    pub group: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    pub place: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub facts: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    pub links: Vec<Link>,
}

impl Portfolio {
    /// The compiled-in portfolio
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_yaml(BUILTIN_CONTENT, PathBuf::from("<builtin>"))
    }

    /// Parse and validate portfolio YAML; `origin` only labels errors
    pub fn from_yaml(yaml: &str, origin: PathBuf) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_yaml::from_str(yaml).map_err(|source| {
            ContentError::Parse {
                path: origin,
                source,
            }
        })?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Check titles and tags of every filterable entry
    pub fn validate(&self) -> Result<(), ContentError> {
        validate_items("Project", &self.projects)?;
        validate_items("Post", &self.posts)?;
        Ok(())
    }
}

fn validate_items<T: ContentItem>(kind: &'static str, items: &[T]) -> Result<(), ContentError> {
    for (index, item) in items.iter().enumerate() {
        if item.title().trim().is_empty() {
            return Err(ContentError::EmptyTitle { kind, index });
        }
        for tag in item.tags() {
            if tag.trim().is_empty() {
                return Err(ContentError::EmptyTag {
                    kind,
                    title: item.title().to_string(),
                });
            }
            if tag == SENTINEL_TAG {
                return Err(ContentError::ReservedTag {
                    kind,
                    title: item.title().to_string(),
                    tag: tag.clone(),
                });
            }
        }
    }
    Ok(())
}
