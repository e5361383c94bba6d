//! View controller - owns the page's filter and theme state
//!
//! Events replace one field of the state and, for filter events, recompute
//! both filtered collections before a snapshot is handed to the renderer.

use serde::Serialize;

use crate::config::ThemeMode;
use crate::content::{Portfolio, Post, Project};
use crate::filter::{filter_indices, TagUniverse, SENTINEL_TAG};

/// Current query and selected tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub query: String,
    pub tag: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            tag: SENTINEL_TAG.to_string(),
        }
    }
}

impl FilterState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Whether this is the initial (unfiltered) state
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.tag == SENTINEL_TAG
    }
}

/// User input the view reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SetQuery(String),
    SetTag(String),
    ToggleTheme,
}

/// What the renderer sees after an event
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot<'a> {
    pub query: &'a str,
    pub active_tag: &'a str,
    pub theme: ThemeMode,
    pub tags: &'a TagUniverse,
    pub projects: Vec<&'a Project>,
    pub posts: Vec<&'a Post>,
}

/// Page state for one session over an immutable portfolio
pub struct PortfolioView<'a> {
    portfolio: &'a Portfolio,
    tags: TagUniverse,
    state: FilterState,
    theme: ThemeMode,
    projects: Vec<usize>,
    posts: Vec<usize>,
}

impl<'a> PortfolioView<'a> {
    /// Fresh session: empty query, sentinel tag
    pub fn new(portfolio: &'a Portfolio, theme: ThemeMode) -> Self {
        let tags = TagUniverse::from_collections(&portfolio.projects, &portfolio.posts);
        let mut view = Self {
            portfolio,
            tags,
            state: FilterState::default(),
            theme,
            projects: Vec::new(),
            posts: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn tags(&self) -> &TagUniverse {
        &self.tags
    }

    /// Apply an event and return the resulting snapshot
    pub fn dispatch(&mut self, event: ViewEvent) -> ViewSnapshot<'_> {
        tracing::debug!("View event: {:?}", event);
        match event {
            ViewEvent::SetQuery(query) => {
                self.state.set_query(query);
                self.recompute();
            }
            ViewEvent::SetTag(tag) => {
                if !self.tags.contains(&tag) {
                    tracing::debug!("Tag {:?} is not used by any entry", tag);
                }
                self.state.set_tag(tag);
                self.recompute();
            }
            ViewEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
            }
        }
        self.snapshot()
    }

    /// Current state without changing it
    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        ViewSnapshot {
            query: &self.state.query,
            active_tag: &self.state.tag,
            theme: self.theme,
            tags: &self.tags,
            projects: self
                .projects
                .iter()
                .map(|&i| &self.portfolio.projects[i])
                .collect(),
            posts: self
                .posts
                .iter()
                .map(|&i| &self.portfolio.posts[i])
                .collect(),
        }
    }

    fn recompute(&mut self) {
        let FilterState { query, tag } = &self.state;
        self.projects = filter_indices(&self.portfolio.projects, query, tag);
        self.posts = filter_indices(&self.portfolio.posts, query, tag);
    }
}
