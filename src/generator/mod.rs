//! Generator module - renders the portfolio page and its companions

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;
use std::fs;
use std::path::Path;

use tera::Context;
use walkdir::WalkDir;

use crate::content::{Portfolio, Post, Project};
use crate::filter::{searchable_text, SENTINEL_TAG};
use crate::helpers::{escape_xml, full_url_for, mailto, strip_invalid_xml_chars, tag_path, url_for};
use crate::templates::{ConfigData, TemplateRenderer};
use crate::view::{PortfolioView, ViewEvent, ViewSnapshot};
use crate::Folio;

/// Name of the client-side search index in the public directory
pub const SEARCH_INDEX: &str = "search.json";

/// One entry of `search.json`
#[derive(Debug, Clone, Serialize)]
pub struct SearchEntry<'a> {
    pub kind: &'static str,
    pub title: &'a str,
    pub tags: &'a [String],
    pub url: String,
    /// Lower-cased searchable text, matched with a plain substring test
    pub text: String,
}

/// Static site generator for the portfolio page
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new(&folio.config)?;

        Ok(Self {
            folio: folio.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, portfolio: &Portfolio) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)?;

        // Copy source assets (resume, images, etc.)
        self.copy_source_assets()?;

        let mut view = PortfolioView::new(portfolio, self.folio.config.theme);

        let html = self.render_page(portfolio, &view.snapshot())?;
        self.write(Path::new("index.html"), &html)?;

        let tags: Vec<String> = view.tags().real_tags().map(str::to_string).collect();
        for tag in &tags {
            let snapshot = view.dispatch(ViewEvent::SetTag(tag.clone()));
            let html = self.render_page(portfolio, &snapshot)?;
            let path = Path::new(&tag_path(&self.folio.config.tag_dir, tag)).join("index.html");
            self.write(&path, &html)?;
        }
        tracing::info!("Generated {} tag pages", tags.len());

        self.generate_search_index(portfolio)?;
        self.generate_atom_feed(&portfolio.posts)?;

        Ok(())
    }

    /// Render the page for one view state
    pub fn render_page(&self, portfolio: &Portfolio, snapshot: &ViewSnapshot<'_>) -> Result<String> {
        let context = self.page_context(portfolio, snapshot);
        self.renderer.render("index.html", &context)
    }

    fn page_context(&self, portfolio: &Portfolio, snapshot: &ViewSnapshot<'_>) -> Context {
        let config = &self.folio.config;
        let mut context = Context::new();
        context.insert("config", &ConfigData::from_config(config));
        context.insert("version", env!("CARGO_PKG_VERSION"));
        context.insert("current_year", &chrono::Local::now().year());
        context.insert("sentinel", SENTINEL_TAG);
        context.insert("search_url", &url_for(config, SEARCH_INDEX));

        context.insert("theme", snapshot.theme.as_str());
        context.insert("query", snapshot.query);
        context.insert("active_tag", snapshot.active_tag);
        context.insert("tags", snapshot.tags);
        context.insert("projects", &snapshot.projects);
        context.insert("posts", &snapshot.posts);

        context.insert("hero", &portfolio.hero);
        context.insert("now", &portfolio.now);
        context.insert("reads", &portfolio.reads);
        context.insert("uses", &portfolio.uses);
        context.insert("travel", &portfolio.travel);
        context.insert("about", &portfolio.about);
        context.insert("contact", &portfolio.contact);
        context.insert("mailto", &mailto(&portfolio.contact.email));
        context
    }

    /// Search index entries for every project and post
    pub fn search_entries<'a>(&self, portfolio: &'a Portfolio) -> Vec<SearchEntry<'a>> {
        let home = url_for(&self.folio.config, "");
        let projects = portfolio.projects.iter().map(|p: &'a Project| SearchEntry {
            kind: "project",
            title: &p.title,
            tags: &p.tags,
            url: format!("{}#projects", home),
            text: searchable_text(p).to_lowercase(),
        });
        let posts = portfolio.posts.iter().map(|p: &'a Post| SearchEntry {
            kind: "post",
            title: &p.title,
            tags: &p.tags,
            url: p.href.clone(),
            text: searchable_text(p).to_lowercase(),
        });
        projects.chain(posts).collect()
    }

    /// Generate search index (JSON)
    fn generate_search_index(&self, portfolio: &Portfolio) -> Result<()> {
        let entries = self.search_entries(portfolio);
        let json = serde_json::to_string_pretty(&entries)?;
        self.write(Path::new(SEARCH_INDEX), &json)?;
        tracing::info!("Generated {}", SEARCH_INDEX);
        Ok(())
    }

    /// Generate Atom feed of the writing entries
    fn generate_atom_feed(&self, posts: &[Post]) -> Result<()> {
        let config = &self.folio.config;
        let home = full_url_for(config, "");
        let updated = posts
            .iter()
            .filter_map(Post::published)
            .max()
            .map(rfc3339)
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

        let mut feed = String::new();
        feed.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        feed.push('\n');
        feed.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
        feed.push('\n');
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!(
            "  <link href=\"{}\" rel=\"self\"/>\n",
            escape_xml(&full_url_for(config, &config.feed))
        ));
        feed.push_str(&format!("  <link href=\"{}\"/>\n", escape_xml(&home)));
        feed.push_str(&format!("  <updated>{}</updated>\n", updated));
        feed.push_str(&format!("  <id>{}</id>\n", escape_xml(&home)));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&config.author)
        ));

        for post in posts {
            let link = if post.href.starts_with("http://") || post.href.starts_with("https://") {
                post.href.clone()
            } else if post.href.starts_with('#') {
                format!("{}{}", home, post.href)
            } else {
                full_url_for(config, &post.href)
            };
            let published = post.published().map(rfc3339).unwrap_or_else(|| updated.clone());

            feed.push_str("  <entry>\n");
            feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", escape_xml(&link)));
            feed.push_str(&format!(
                "    <id>{}#{}</id>\n",
                escape_xml(&home),
                slug::slugify(&post.title)
            ));
            feed.push_str(&format!("    <published>{}</published>\n", published));
            feed.push_str(&format!("    <updated>{}</updated>\n", published));
            for tag in &post.tags {
                feed.push_str(&format!("    <category term=\"{}\"/>\n", escape_xml(tag)));
            }
            feed.push_str(&format!(
                "    <summary>{}</summary>\n",
                escape_xml(&strip_invalid_xml_chars(&post.excerpt))
            ));
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        self.write(Path::new(&config.feed), &feed)?;
        tracing::info!("Generated {}", config.feed);

        Ok(())
    }

    /// Copy source assets (resume, images, etc.) to public directory
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.folio.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_file() {
                let ext = path.extension().and_then(|e| e.to_str());

                // Content files are rendered, not copied
                if matches!(ext, Some("yml") | Some("yaml")) {
                    continue;
                }

                let relative = path.strip_prefix(source_dir)?;
                let dest = self.folio.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }

                fs::copy(path, &dest)?;
                tracing::debug!("Copied: {:?}", relative);
            }
        }

        Ok(())
    }

    /// Write a file below the public directory
    fn write(&self, relative: &Path, contents: &str) -> Result<()> {
        let output_path = self.folio.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, contents)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}

/// Midnight UTC of a date, in the format `DateTime<Utc>::to_rfc3339` uses
fn rfc3339(date: chrono::NaiveDate) -> String {
    format!("{}T00:00:00+00:00", date.format("%Y-%m-%d"))
}
