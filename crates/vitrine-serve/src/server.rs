use crate::rewrite;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use vitrine_context::site::SiteRoot;
use vitrine_context::theme::ThemeDescriptor;

/// Delay between listener starts. Keeps the startup banner readable and the
/// bind attempts sequential; not a correctness requirement.
const STARTUP_STAGGER: Duration = Duration::from_millis(500);

/// Immutable per-listener configuration, captured once at construction.
#[derive(Clone)]
struct ListenerState {
    site: SiteRoot,
    stylesheet: Option<String>,
}

/// Build the router for one themed listener.
///
/// `/` and `/index.html` go through the rewriting handler; everything else
/// falls back to plain static serving from the site root (content type by
/// extension, 404 on missing files, traversal rejected).
fn themed_router(theme: &ThemeDescriptor, site: &SiteRoot) -> Router {
    let state = ListenerState {
        site: site.clone(),
        stylesheet: theme.stylesheet.clone(),
    };
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .fallback_service(ServeDir::new(&site.root))
        .with_state(state)
}

async fn index_handler(State(state): State<ListenerState>) -> Response {
    let html = match state.site.read_index() {
        Ok(html) => html,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to load base document: {e:#}"),
            )
                .into_response()
        }
    };
    match &state.stylesheet {
        Some(css) => Html(rewrite::apply_theme(&html, css)).into_response(),
        None => Html(html).into_response(),
    }
}

/// Bind one listener's port. Split from serving so that a bind failure stays
/// scoped to its own theme.
async fn bind(theme: &ThemeDescriptor) -> Result<TcpListener> {
    let addr = format!("0.0.0.0:{}", theme.port);
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr} for theme '{}'", theme.label))
}

/// Serve a single theme until the process exits. A bind failure is reported
/// and ends only this listener; siblings keep running.
async fn serve_theme(theme: ThemeDescriptor, site: SiteRoot) {
    let listener = match bind(&theme).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!(
                "  Could not start '{}' on port {}: {e:#}",
                theme.label, theme.port
            );
            return;
        }
    };

    eprintln!(
        "  {} running at http://localhost:{}",
        theme.label, theme.port
    );

    let app = themed_router(&theme, &site);
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("  '{}' on port {} stopped: {e}", theme.label, theme.port);
    }
}

/// Start one detached listener task per theme, in descriptor order with a
/// short stagger, then block until Ctrl+C. Listener tasks are not awaited on
/// exit; they die with the process.
pub async fn run_all(themes: Vec<ThemeDescriptor>, site: SiteRoot) -> Result<()> {
    for theme in themes {
        tokio::spawn(serve_theme(theme, site.clone()));
        tokio::time::sleep(STARTUP_STAGGER).await;
    }

    eprintln!();
    eprintln!("  Press Ctrl+C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for the shutdown signal")?;
    Ok(())
}
