//! HTTP server exposing the blog API, sitemap and robots.txt
//!
//! Every request reads the content directory again; the only shared state is
//! the immutable configuration and renderer.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{ContentError, ContentStore, PostDetail, PostSummary};
use crate::generator::sitemap::{render_robots, sitemap_xml};
use crate::Folio;

/// Server state
struct ServerState {
    config: SiteConfig,
    store: ContentStore,
}

/// Errors surfaced to HTTP clients; internals stay in the logs
#[derive(Debug)]
enum ApiError {
    NotFound,
    Internal,
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound(_) => ApiError::NotFound,
            other => {
                tracing::error!("Error loading post: {}", other);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Post not found"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Error loading post"),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Build the application router
pub fn router(folio: &Folio) -> Router {
    let state = Arc::new(ServerState {
        config: folio.config.clone(),
        store: folio.store(),
    });

    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(get_post))
        .route("/api/slugs", get(list_slugs))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .fallback_service(ServeDir::new(&folio.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let app = router(folio);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");
    tracing::info!("Serving posts from {:?}", folio.content_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run file-system work off the async workers
async fn blocking<T, F>(state: &Arc<ServerState>, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&ServerState) -> T + Send + 'static,
    T: Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| {
            tracing::error!("Content task failed: {}", e);
            ApiError::Internal
        })
}

async fn list_posts(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    let posts = blocking(&state, |s| s.store.list_summaries()).await?;
    Ok(Json(posts))
}

async fn list_slugs(State(state): State<Arc<ServerState>>) -> Result<Json<Vec<String>>, ApiError> {
    let slugs = blocking(&state, |s| s.store.list_slugs()).await?;
    Ok(Json(slugs))
}

async fn get_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Json<PostDetail>, ApiError> {
    let post = blocking(&state, move |s| s.store.get_by_slug(&slug)).await??;
    Ok(Json(post))
}

async fn sitemap(State(state): State<Arc<ServerState>>) -> Result<Response, ApiError> {
    let xml = blocking(&state, |s| sitemap_xml(&s.config, &s.store)).await?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}

async fn robots(State(state): State<Arc<ServerState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config),
    )
        .into_response()
}
