use std::path::Path;

use axum::extract::{Request, State};
use axum::handler::Handler;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::SiteConfig;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Paths whose last segment has an extension name a file, not a client route.
fn names_a_file(path: &str) -> bool {
    Path::new(path).extension().is_some()
}

async fn app_shell(State(shell): State<ServeFile>, request: Request) -> Response {
    if names_a_file(request.uri().path()) {
        tracing::debug!("Missing asset {}", request.uri().path());
        return StatusCode::NOT_FOUND.into_response();
    }
    match shell.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Static site with client-side routing: unknown paths get `index.html` so the
/// router can resolve deep links such as `/billing/success`. Missing files such
/// as a stale `app-*.wasm` are a 404.
pub fn app(config: &SiteConfig) -> Router {
    let shell = ServeFile::new(config.site_dir.join("index.html"));
    let site = ServeDir::new(&config.site_dir).fallback(app_shell.with_state(shell));

    Router::new()
        .route("/health", get(health))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
