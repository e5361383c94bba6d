//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::portfolio::BUILTIN_CONTENT;

const CONFIG_TEMPLATE: &str = r##"# Site
title: mohit.dev
description: ''
author: Mohit Garg
language: en

# URL
url: http://example.com
root: /

# Directory
source_dir: source
public_dir: public
tag_dir: tags

# Content
content_file: portfolio.yml
resume: /resume.pdf
feed: atom.xml

# Appearance (light or dark)
theme: light
menu:
  - label: About
    href: "#about"
  - label: Projects
    href: "#projects"
  - label: Writing
    href: "#writing"
  - label: Now
    href: "#now"
  - label: Reads
    href: "#reads"
  - label: Uses
    href: "#uses"
  - label: Travel
    href: "#travel"
  - label: Contact
    href: "#contact"
"##;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("source"))?;
    fs::write(&config_path, CONFIG_TEMPLATE)?;

    let content_path = target_dir.join("source/portfolio.yml");
    if !content_path.exists() {
        fs::write(&content_path, BUILTIN_CONTENT)?;
    }

    Ok(())
}
