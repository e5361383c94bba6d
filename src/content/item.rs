//! Filterable content entries: projects and writing

use serde::{Deserialize, Serialize};

/// Anything the content filter can search and tag-match.
///
/// An item exposes a title, a free-text body and its tags. Tags may repeat
/// in source; matching treats them as a set.
pub trait ContentItem {
    fn title(&self) -> &str;

    fn body(&self) -> &str;

    fn tags(&self) -> &[String];

    /// Whether `tag` is one of this item's tags (exact, case-sensitive)
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

/// A labelled hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// A project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    /// Free-form period, e.g. "2024 → present"
    #[serde(default)]
    pub period: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Short description shown on the card
    #[serde(default)]
    pub blurb: String,

    #[serde(default)]
    pub links: Vec<Link>,
}

impl ContentItem for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.blurb
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A writing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,

    /// Month and year as displayed, e.g. "Aug 2025"
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default = "default_href")]
    pub href: String,
}

fn default_href() -> String {
    "#".to_string()
}

impl Post {
    /// Parse the display date as the first day of that month.
    ///
    /// Accepts "Aug 2025" and "August 2025"; anything else yields `None`.
    pub fn published(&self) -> Option<chrono::NaiveDate> {
        let candidate = format!("1 {}", self.date.trim());
        chrono::NaiveDate::parse_from_str(&candidate, "%d %b %Y")
            .or_else(|_| chrono::NaiveDate::parse_from_str(&candidate, "%d %B %Y"))
            .ok()
    }
}

impl ContentItem for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.excerpt
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
