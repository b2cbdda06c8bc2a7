//! Application state, router construction and the serve loop.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use reqwest::Client;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{api, config::Config, session::SessionStore};

/// State shared by all handlers: the startup configuration, one HTTP client
/// reused across provider calls, and the session store behind its trait so
/// handlers never see the concrete backing.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: Client,
    pub sessions: Arc<dyn SessionStore>,
}

/// Builds the service router.
///
/// The CORS layer is permissive because the frontend is served from another
/// origin; the trace layer gives one span per request.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/playlists/{user_id}", get(api::playlists))
        .route("/generate-playlist/{user_id}", post(api::generate))
        .route("/save-playlist/{user_id}", post(api::save))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves requests until the process is
/// stopped.
pub async fn serve(state: AppState) -> std::io::Result<()> {
    let addr = state.config.bind_addr;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await
}
