//! Search projects and writing from the command line

use anyhow::Result;
use std::str::FromStr;

use crate::content::{ContentItem, Portfolio};
use crate::filter::{filter, TagUniverse};
use crate::Folio;

/// Which collections to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Projects,
    Posts,
    All,
}

impl FromStr for SearchKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "project" | "projects" => Ok(SearchKind::Projects),
            "post" | "posts" => Ok(SearchKind::Posts),
            "all" => Ok(SearchKind::All),
            _ => anyhow::bail!("Unknown kind: {}. Available: projects, posts, all", s),
        }
    }
}

/// Run the content filter and print the matches
pub fn run(folio: &Folio, query: &str, tag: &str, kind: SearchKind) -> Result<()> {
    let portfolio = folio.load_portfolio()?;
    let tags = TagUniverse::from_collections(&portfolio.projects, &portfolio.posts);
    if !tags.contains(tag) {
        tracing::warn!("No entry is tagged {:?}", tag);
    }
    print!("{}", render(&portfolio, query, tag, kind));
    Ok(())
}

/// Matches as text, one section per searched collection
pub fn render(portfolio: &Portfolio, query: &str, tag: &str, kind: SearchKind) -> String {
    let mut out = String::new();
    if kind != SearchKind::Posts {
        section(&mut out, "Projects", &filter(&portfolio.projects, query, tag));
    }
    if kind != SearchKind::Projects {
        section(&mut out, "Posts", &filter(&portfolio.posts, query, tag));
    }
    out
}

fn section<T: ContentItem>(out: &mut String, heading: &str, items: &[&T]) {
    out.push_str(&format!("{} ({}):\n", heading, items.len()));
    for item in items {
        out.push_str(&format!("  {} [{}]\n", item.title(), item.tags().join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SENTINEL_TAG;

    #[test]
    fn test_parse_kind() {
        assert_eq!("projects".parse::<SearchKind>().unwrap(), SearchKind::Projects);
        assert_eq!("post".parse::<SearchKind>().unwrap(), SearchKind::Posts);
        assert_eq!("all".parse::<SearchKind>().unwrap(), SearchKind::All);
        assert!("pages".parse::<SearchKind>().is_err());
    }

    #[test]
    fn test_render_all() {
        let portfolio = Portfolio::builtin().unwrap();
        let out = render(&portfolio, "offline", SENTINEL_TAG, SearchKind::All);
        assert_eq!(
            out,
            "Projects (1):\n  Local Research Assistant (Offline) [LLMs, Retrieval, On-device]\nPosts (0):\n"
        );
    }

    #[test]
    fn test_render_posts_by_tag() {
        let portfolio = Portfolio::builtin().unwrap();
        let out = render(&portfolio, "", "LLMs", SearchKind::Posts);
        assert!(out.starts_with("Posts (1):\n"));
        assert!(!out.contains("Projects"));
    }
}
