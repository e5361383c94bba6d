//! Development server for the generated portfolio
//!
//! The home page and the per-tag pages are served from `public/` with a
//! live-reload hook appended; every other path (search index, feed,
//! résumé, images) goes straight to `ServeDir`.

use anyhow::Result;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

use crate::commands::generate::watch_blocking;
use crate::Folio;

const RELOAD_PATH: &str = "/__livereload";

/// Appended before `</body>` on every page while watching
const RELOAD_HOOK: &str = r#"<script>
(function() {
  var socket = new WebSocket('ws://' + location.host + '/__livereload');
  socket.onmessage = function(event) {
    if (event.data === 'reload') location.reload();
  };
  socket.onclose = function() {
    setTimeout(function() { location.reload(); }, 1000);
  };
})();
</script>
"#;

struct SiteState {
    public_dir: PathBuf,
    rebuilt: broadcast::Sender<()>,
    live_reload: bool,
}

/// Serve `public/` on `ip:port`. With `watch`, regenerate on content or
/// config changes and tell open pages to reload.
pub async fn start(folio: &Folio, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let (rebuilt, _) = broadcast::channel::<()>(16);
    let state = Arc::new(SiteState {
        public_dir: folio.public_dir.clone(),
        rebuilt: rebuilt.clone(),
        live_reload: watch,
    });

    let tag_pages = format!("/{}/*rest", folio.config.tag_dir.trim_matches('/'));
    let app = Router::new()
        .route(RELOAD_PATH, get(reload_socket))
        .route("/", get(page))
        .route(&tag_pages, get(page))
        .fallback_service(ServeDir::new(&folio.public_dir))
        .with_state(state);

    let host = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let url = format!("http://{}:{}", ip, port);
    println!("Serving {} at {}", folio.config.title, url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let folio = folio.clone();
        tokio::task::spawn_blocking(move || {
            let result = watch_blocking(&folio, || {
                tracing::info!("Regenerated, reloading pages");
                // No open pages is not an error
                let _ = rebuilt.send(());
            });
            if let Err(e) = result {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Map a page URL to its generated `index.html`, or `None` if any
/// segment is not a plain file name.
fn resolve_page(public_dir: &Path, url_path: &str) -> Option<PathBuf> {
    let mut file = public_dir.to_path_buf();
    for segment in url_path.split('/').filter(|s| !s.is_empty()) {
        let mut parts = Path::new(segment).components();
        match (parts.next(), parts.next()) {
            (Some(Component::Normal(name)), None) if !segment.contains('\\') => file.push(name),
            _ => return None,
        }
    }
    file.push("index.html");
    Some(file)
}

async fn page(State(state): State<Arc<SiteState>>, uri: Uri) -> Response {
    let Some(file) = resolve_page(&state.public_dir, uri.path()) else {
        return (StatusCode::BAD_REQUEST, "Bad path").into_response();
    };

    match tokio::fs::read_to_string(&file).await {
        Ok(html) if state.live_reload => Html(with_reload_hook(&html)).into_response(),
        Ok(html) => Html(html).into_response(),
        Err(_) => {
            tracing::debug!("No page at {}", uri.path());
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

fn with_reload_hook(html: &str) -> String {
    match html.rfind("</body>") {
        Some(at) => format!("{}{}{}", &html[..at], RELOAD_HOOK, &html[at..]),
        None => format!("{}{}", html, RELOAD_HOOK),
    }
}

async fn reload_socket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<SiteState>>,
) -> impl IntoResponse {
    let rebuilt = state.rebuilt.subscribe();
    ws.on_upgrade(move |socket| push_reloads(socket, rebuilt))
}

/// Send "reload" after every regeneration until the page goes away
async fn push_reloads(mut socket: WebSocket, mut rebuilt: broadcast::Receiver<()>) {
    loop {
        tokio::select! {
            signal = rebuilt.recv() => match signal {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                    if socket.send(Message::Text("reload".to_string())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }
}

fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = std::process::Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/c", "start"]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = std::process::Command::new("xdg-open");

    command.arg(url).spawn()?;
    Ok(())
}
