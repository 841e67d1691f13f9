//! Inbound HTTP surface: a single `POST /identify` endpoint.

mod error;
pub mod handlers;

use crate::config::ServerConfig;
use crate::relay::Relay;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the application router around a shared relay.
pub fn router(relay: Arc<Relay>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/identify", post(handlers::identify))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(relay)
}

/// Bind `config.bind_addr()` and serve until the process is stopped.
pub async fn serve(relay: Arc<Relay>, config: &ServerConfig) -> crate::Result<()> {
    let app = router(relay, config);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
