//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub tag_dir: String,

    // Content
    pub content_file: String,
    pub resume: String,
    pub feed: String,

    // Appearance
    pub theme: ThemeMode,
    pub menu: Vec<MenuLink>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "mohit.dev".to_string(),
            description: String::new(),
            author: "Mohit Garg".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            tag_dir: "tags".to_string(),

            content_file: "portfolio.yml".to_string(),
            resume: "/resume.pdf".to_string(),
            feed: "atom.xml".to_string(),

            theme: ThemeMode::Light,
            menu: default_menu(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Initial color scheme of the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Navigation entry in the page header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
}

impl MenuLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

fn default_menu() -> Vec<MenuLink> {
    [
        ("About", "#about"),
        ("Projects", "#projects"),
        ("Writing", "#writing"),
        ("Now", "#now"),
        ("Reads", "#reads"),
        ("Uses", "#uses"),
        ("Travel", "#travel"),
        ("Contact", "#contact"),
    ]
    .iter()
    .map(|(label, href)| MenuLink::new(label, href))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.menu.len(), 8);
        assert_eq!(config.menu[0], MenuLink::new("About", "#about"));
    }

    #[test]
    fn test_parse_config() {
        let yaml = r##"
title: jane.dev
author: Jane Doe
theme: dark
menu:
  - label: Projects
    href: "#projects"
custom_key: 42
"##;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "jane.dev");
        assert_eq!(config.author, "Jane Doe");
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.menu, vec![MenuLink::new("Projects", "#projects")]);
        assert_eq!(config.tag_dir, "tags");
        assert!(config.extra.contains_key("custom_key"));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
