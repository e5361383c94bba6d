//! Content module - the portfolio data model, loading and markdown rendering

mod error;
mod item;
pub mod loader;
mod markdown;
pub mod portfolio;

pub use error::ContentError;
pub use item::{ContentItem, Link, Post, Project};
pub use markdown::MarkdownRenderer;
pub use portfolio::{About, Book, Contact, Hero, NowBlock, Place, Portfolio, Reads, UseGroup};
