//! Generate static files

use anyhow::Result;
use notify::Watcher;
use notify_debouncer_mini::new_debouncer;
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::Folio;

/// Generate the static site
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let portfolio = folio.load_portfolio()?;
    tracing::info!(
        "Loaded {} projects and {} posts",
        portfolio.projects.len(),
        portfolio.posts.len()
    );

    let generator = Generator::new(folio)?;
    generator.generate(&portfolio)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch the content and config for changes and regenerate
pub async fn watch(folio: &Folio) -> Result<()> {
    let folio = folio.clone();
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");
    tokio::task::spawn_blocking(move || watch_blocking(&folio, || {})).await?
}

/// Block on changes under the source directory and `_config.yml`,
/// regenerating once per burst of events. `on_rebuilt` runs after every
/// successful regeneration.
pub fn watch_blocking<F: FnMut()>(folio: &Folio, mut on_rebuilt: F) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if folio.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&folio.source_dir, notify::RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", folio.source_dir);
    }

    let config_path = folio.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, notify::RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    for batch in rx {
        let events = match batch {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
                continue;
            }
        };

        let changed: Vec<_> = events
            .iter()
            .filter(|e| triggers_rebuild(&e.path))
            .collect();
        if changed.is_empty() {
            continue;
        }
        for event in &changed {
            tracing::info!("File changed: {}", event.path.display());
        }

        // Config changes need a fresh instance
        match Folio::new(&folio.base_dir).and_then(|f| run(&f)) {
            Ok(()) => on_rebuilt(),
            Err(e) => tracing::error!("Generation failed: {}", e),
        }
    }

    Ok(())
}

/// Editor swap files, VCS internals and OS metadata do not trigger a rebuild
fn triggers_rebuild(path: &Path) -> bool {
    let ignored = path.components().any(|c| {
        let name = c.as_os_str().to_string_lossy();
        name == ".git" || name == ".DS_Store"
    });
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    !ignored && !name.ends_with('~') && !name.ends_with(".swp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_uses_content_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("source")).unwrap();
        fs::write(
            dir.path().join("source/portfolio.yml"),
            "projects:\n  - title: Tiny Project\n    tags: [Rust]\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        run(&folio).unwrap();

        let html = fs::read_to_string(folio.public_dir.join("index.html")).unwrap();
        assert!(html.contains("Tiny Project"));
        assert!(html.contains("data-empty=\"post\">No writing matches."));
        assert!(folio.public_dir.join("tags/rust/index.html").exists());
    }

    #[test]
    fn test_run_reports_bad_content() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("source")).unwrap();
        fs::write(
            dir.path().join("source/portfolio.yml"),
            "posts:\n  - title: Post\n    tags: [All]\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let err = run(&folio).unwrap_err();
        assert!(err.to_string().contains("reserved tag"));
    }

    #[test]
    fn test_triggers_rebuild() {
        assert!(triggers_rebuild(Path::new("source/portfolio.yml")));
        assert!(triggers_rebuild(Path::new("_config.yml")));
        assert!(!triggers_rebuild(Path::new("source/.portfolio.yml.swp")));
        assert!(!triggers_rebuild(Path::new("source/.git/index")));
        assert!(!triggers_rebuild(Path::new("source/portfolio.yml~")));
        assert!(!triggers_rebuild(Path::new("source/img/.DS_Store")));
    }
}
