//! Configuration module

mod site;

pub use site::{MenuLink, SiteConfig, ThemeMode};
