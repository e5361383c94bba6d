//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::content::{ContentItem, Portfolio};
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let portfolio = folio.load_portfolio()?;
    print!("{}", render(&portfolio, content_type)?);
    Ok(())
}

/// Text listing for one content type
pub fn render(portfolio: &Portfolio, content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "project" | "projects" => {
            out.push_str(&format!("Projects ({}):\n", portfolio.projects.len()));
            for project in &portfolio.projects {
                out.push_str(&format!(
                    "  {} - {} [{}]\n",
                    project.period,
                    project.title,
                    project.tags.join(", ")
                ));
            }
        }
        "post" | "posts" => {
            out.push_str(&format!("Posts ({}):\n", portfolio.posts.len()));
            for post in &portfolio.posts {
                out.push_str(&format!(
                    "  {} - {} [{}]\n",
                    post.date,
                    post.title,
                    post.tags.join(", ")
                ));
            }
        }
        "tag" | "tags" => {
            let counts = tag_counts(portfolio);
            out.push_str(&format!("Tags ({}):\n", counts.len()));
            let mut counts: Vec<_> = counts.into_iter().collect();
            // Stable sort keeps first-appearance order among equal counts
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in counts {
                out.push_str(&format!("  {} ({})\n", tag, count));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: projects, posts, tags",
                content_type
            );
        }
    }

    Ok(out)
}

/// Number of entries carrying each tag, in first-appearance order.
/// An entry listing a tag twice counts once.
pub fn tag_counts(portfolio: &Portfolio) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    let items = portfolio
        .projects
        .iter()
        .map(|p| p as &dyn ContentItem)
        .chain(portfolio.posts.iter().map(|p| p as &dyn ContentItem));

    for item in items {
        let mut seen: Vec<&str> = Vec::new();
        for tag in item.tags() {
            if seen.contains(&tag.as_str()) {
                continue;
            }
            seen.push(tag.as_str());
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}
