//! URL helper functions

use crate::config::SiteConfig;
use crate::filter::SENTINEL_TAG;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    join_root(&config.root, path)
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://example.com/blog/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// URL of the pre-filtered page for a tag; the sentinel maps to the home page
pub fn tag_url(root: &str, tag_dir: &str, tag: &str) -> String {
    if tag == SENTINEL_TAG {
        return join_root(root, "");
    }
    join_root(root, &tag_path(tag_dir, tag))
}

/// Output path (relative to the public dir) of a tag page, with trailing slash
pub fn tag_path(tag_dir: &str, tag: &str) -> String {
    format!("{}/{}/", tag_dir.trim_matches('/'), slug::slugify(tag))
}

fn join_root(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/blog/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for(&config, "about/"), "/blog/about/");
        assert_eq!(url_for(&config, ""), "/blog/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/atom.xml"),
            "https://example.com/blog/atom.xml"
        );
    }

    #[test]
    fn test_tag_url() {
        assert_eq!(tag_url("/", "tags", "Deep Learning"), "/tags/deep-learning/");
        assert_eq!(tag_url("/", "tags", "On-device"), "/tags/on-device/");
        assert_eq!(tag_url("/site/", "topics", "ML"), "/site/topics/ml/");
        assert_eq!(tag_url("/", "tags", SENTINEL_TAG), "/");
    }
}
