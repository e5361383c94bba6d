//! Content filter - text search and tag selection over content collections
//!
//! An item passes when the lower-cased query is a substring of its lower-cased
//! searchable text (title, body and tags joined by spaces) and the selected
//! tag is either the sentinel [`SENTINEL_TAG`] or one of the item's tags.
//! Filtering is stable: results keep the order of the input.

use indexmap::IndexSet;
use serde::Serialize;

use crate::content::ContentItem;

/// Tag value that disables tag filtering
pub const SENTINEL_TAG: &str = "All";

/// Text the query is matched against: title, body and tags joined by spaces
pub fn searchable_text<T: ContentItem + ?Sized>(item: &T) -> String {
    let mut text = String::with_capacity(item.title().len() + item.body().len() + 32);
    text.push_str(item.title());
    text.push(' ');
    text.push_str(item.body());
    text.push(' ');
    text.push_str(&item.tags().join(" "));
    text
}

/// Case-insensitive substring test; the empty query matches everything
pub fn matches_query<T: ContentItem + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    searchable_text(item)
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Exact tag test; the sentinel matches everything
pub fn matches_tag<T: ContentItem + ?Sized>(item: &T, tag: &str) -> bool {
    tag == SENTINEL_TAG || item.has_tag(tag)
}

/// Items matching both `query` and `tag`, in their original order
pub fn filter<'a, T: ContentItem>(items: &'a [T], query: &str, tag: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_tag(*item, tag))
        .filter(|item| searchable_text(*item).to_lowercase().contains(&needle))
        .collect()
}

/// Positions of the matching items, in order
pub fn filter_indices<T: ContentItem>(items: &[T], query: &str, tag: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_tag(*item, tag))
        .filter(|(_, item)| searchable_text(*item).to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Every selectable tag: the sentinel first, then distinct tags in order of
/// first appearance across the collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagUniverse {
    tags: IndexSet<String>,
}

impl Default for TagUniverse {
    fn default() -> Self {
        let mut tags = IndexSet::new();
        tags.insert(SENTINEL_TAG.to_string());
        Self { tags }
    }
}

impl TagUniverse {
    /// Build from the projects and posts collections
    pub fn from_collections<P: ContentItem, Q: ContentItem>(projects: &[P], posts: &[Q]) -> Self {
        let mut universe = Self::default();
        universe.extend(projects);
        universe.extend(posts);
        universe
    }

    /// Add the tags of more items
    pub fn extend<T: ContentItem>(&mut self, items: &[T]) {
        for item in items {
            for tag in item.tags() {
                if !self.tags.contains(tag) {
                    self.tags.insert(tag.clone());
                }
            }
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Tags other than the sentinel
    pub fn real_tags(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|t| *t != SENTINEL_TAG)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Portfolio, Post, Project};

    fn projects() -> Vec<Project> {
        Portfolio::builtin().unwrap().projects
    }

    fn posts() -> Vec<Post> {
        Portfolio::builtin().unwrap().posts
    }

    fn titles<T: ContentItem>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.title().to_string()).collect()
    }

    #[test]
    fn test_empty_query_and_sentinel_return_everything_in_order() {
        let projects = projects();
        let result = filter(&projects, "", SENTINEL_TAG);
        assert_eq!(result.len(), projects.len());
        for (got, want) in result.iter().zip(projects.iter()) {
            assert_eq!(*got, want);
        }
    }

    #[test]
    fn test_absent_query_matches_nothing() {
        assert!(filter(&projects(), "zzz-not-there", SENTINEL_TAG).is_empty());
        assert!(filter(&posts(), "zzz-not-there", SENTINEL_TAG).is_empty());
    }

    #[test]
    fn test_tag_returns_exactly_tagged_items() {
        let posts = posts();
        let result = filter(&posts, "", "LLMs");
        assert_eq!(
            titles(&result),
            vec!["Reasoning Effort Knobs in LLMs: What Actually Changes?"]
        );
        for tag in TagUniverse::from_collections(&projects(), &posts).real_tags() {
            let expected: Vec<&Post> = posts.iter().filter(|p| p.has_tag(tag)).collect();
            assert_eq!(filter(&posts, "", tag), expected);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let projects = projects();
        for (query, tag) in [("", "All"), ("model", "All"), ("", "ML"), ("a", "LLMs")] {
            let once: Vec<Project> = filter(&projects, query, tag).into_iter().cloned().collect();
            let twice: Vec<Project> = filter(&once, query, tag).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let projects = projects();
        let posts = posts();
        assert_eq!(
            filter(&projects, "LLMs", SENTINEL_TAG),
            filter(&projects, "llms", SENTINEL_TAG)
        );
        assert_eq!(
            filter(&posts, "LLMs", SENTINEL_TAG),
            filter(&posts, "llms", SENTINEL_TAG)
        );
        assert!(!filter(&posts, "SPECTRAL", SENTINEL_TAG).is_empty());
    }

    #[test]
    fn test_concrete_scenario() {
        let projects = projects();

        let offline = filter(&projects, "offline", "All");
        assert_eq!(titles(&offline), vec!["Local Research Assistant (Offline)"]);

        let ml = filter(&projects, "", "ML");
        assert_eq!(titles(&ml), vec!["CPU/SoC Power Model"]);

        assert!(filter(&projects, "power", "LLMs").is_empty());
    }

    #[test]
    fn test_tags_are_part_of_searchable_text() {
        let projects = projects();
        let result = filter(&projects, "apple music", SENTINEL_TAG);
        assert_eq!(titles(&result), vec!["Audio Quality Deep-Dive"]);
        assert_eq!(
            searchable_text(&projects[3]),
            format!("{} {} Audio Apple Music Codecs", projects[3].title, projects[3].blurb)
        );
    }

    #[test]
    fn test_tag_match_is_case_sensitive() {
        assert!(filter(&projects(), "", "llms").is_empty());
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Project> = Vec::new();
        assert!(filter(&empty, "", SENTINEL_TAG).is_empty());
        assert!(filter_indices(&empty, "x", "ML").is_empty());
    }

    #[test]
    fn test_filter_indices_agree_with_filter() {
        let projects = projects();
        assert_eq!(filter_indices(&projects, "", "ML"), vec![1]);
        assert_eq!(filter_indices(&projects, "", SENTINEL_TAG), vec![0, 1, 2, 3]);
        assert!(matches_query(&projects[0], "PRIVACY"));
        assert!(matches_tag(&projects[0], SENTINEL_TAG));
    }

    #[test]
    fn test_tag_universe_order_and_sentinel() {
        let universe = TagUniverse::from_collections(&projects(), &posts());
        let tags: Vec<&str> = universe.iter().collect();
        assert_eq!(tags[0], SENTINEL_TAG);
        assert_eq!(&tags[1..4], &["LLMs", "Retrieval", "On-device"]);
        // "LLMs" appears in a post too but is listed once
        assert_eq!(tags.iter().filter(|t| **t == "LLMs").count(), 1);
        assert!(universe.contains("California"));
        assert_eq!(universe.real_tags().count(), universe.len() - 1);
        assert_eq!(universe.len(), 1 + 12 + 6 - 1);
    }

    #[test]
    fn test_empty_universe_still_has_sentinel() {
        let empty: Vec<Project> = Vec::new();
        let universe = TagUniverse::from_collections(&empty, &empty);
        assert!(universe.contains(SENTINEL_TAG));
        assert_eq!(universe.len(), 1);
    }
}
