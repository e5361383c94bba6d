//! Built-in portfolio templates using the Tera template engine
//!
//! All templates are embedded in the binary. Text is autoescaped; URLs we
//! build ourselves and pre-rendered markdown are marked `safe` in the
//! templates.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{MenuLink, SiteConfig};
use crate::content::MarkdownRenderer;
use crate::helpers::{full_url_for, tag_url, url_for};

/// Template renderer with the embedded portfolio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("folio/layout.html")),
            ("index.html", include_str!("folio/index.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("folio/partials/head.html"),
            ),
            (
                "partials/header.html",
                include_str!("folio/partials/header.html"),
            ),
            (
                "partials/hero.html",
                include_str!("folio/partials/hero.html"),
            ),
            (
                "partials/filters.html",
                include_str!("folio/partials/filters.html"),
            ),
            ("partials/now.html", include_str!("folio/partials/now.html")),
            (
                "partials/reads.html",
                include_str!("folio/partials/reads.html"),
            ),
            (
                "partials/uses.html",
                include_str!("folio/partials/uses.html"),
            ),
            (
                "partials/travel.html",
                include_str!("folio/partials/travel.html"),
            ),
            (
                "partials/about.html",
                include_str!("folio/partials/about.html"),
            ),
            (
                "partials/contact.html",
                include_str!("folio/partials/contact.html"),
            ),
            (
                "partials/footer.html",
                include_str!("folio/partials/footer.html"),
            ),
            (
                "partials/script.html",
                include_str!("folio/partials/script.html"),
            ),
        ])?;

        // Register custom filters
        tera.register_filter("markdown", markdown_filter);
        tera.register_filter("markdown_inline", markdown_inline_filter);

        let root = config.root.clone();
        let tag_dir = config.tag_dir.clone();
        tera.register_function(
            "tag_url",
            move |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
                match args.get("tag").and_then(|v| v.as_str()) {
                    Some(tag) => Ok(tera::Value::String(tag_url(&root, &tag_dir, tag))),
                    None => Err(tera::Error::msg("tag_url requires a `tag` string argument")),
                }
            },
        );

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: render a markdown block
fn markdown_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("markdown", "value", String, value);
    Ok(tera::Value::String(MarkdownRenderer::new().render(&s)))
}

/// Tera filter: render markdown without the paragraph wrapper
fn markdown_inline_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("markdown_inline", "value", String, value);
    Ok(tera::Value::String(
        MarkdownRenderer::new().render_inline(&s),
    ))
}

/// Site settings exposed to templates as `config`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub author: String,
    pub description: String,
    pub language: String,
    pub home_url: String,
    pub resume: String,
    pub feed_url: String,
    pub menu: Vec<MenuLink>,
}

impl ConfigData {
    pub fn from_config(config: &SiteConfig) -> Self {
        let resume = if config.resume.starts_with("http://") || config.resume.starts_with("https://")
        {
            config.resume.clone()
        } else {
            url_for(config, &config.resume)
        };

        Self {
            title: config.title.clone(),
            author: config.author.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
            home_url: url_for(config, ""),
            resume,
            feed_url: full_url_for(config, &config.feed),
            menu: config.menu.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        let renderer = TemplateRenderer::new(&SiteConfig::default()).unwrap();
        assert!(renderer.tera.get_template_names().any(|n| n == "index.html"));
    }

    #[test]
    fn test_markdown_filters() {
        let args = HashMap::new();
        let value = tera::Value::String("*hi*".to_string());
        let block = markdown_filter(&value, &args).unwrap();
        assert_eq!(block.as_str().unwrap().trim(), "<p><em>hi</em></p>");
        let inline = markdown_inline_filter(&value, &args).unwrap();
        assert_eq!(inline.as_str().unwrap(), "<em>hi</em>");
    }

    #[test]
    fn test_config_data_urls() {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/me/".to_string();
        let data = ConfigData::from_config(&config);
        assert_eq!(data.home_url, "/me/");
        assert_eq!(data.resume, "/me/resume.pdf");
        assert_eq!(data.feed_url, "https://example.com/me/atom.xml");

        config.resume = "https://cdn.example.com/cv.pdf".to_string();
        assert_eq!(
            ConfigData::from_config(&config).resume,
            "https://cdn.example.com/cv.pdf"
        );
    }
}
