//! CLI commands

pub mod clean;
pub mod generate;
pub mod init;
pub mod list;
pub mod search;
