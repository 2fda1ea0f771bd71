//! HTTP dictionary service
//!
//! One [`WordRepository`] is loaded at start-up and shared with every
//! request through axum state.

use super::protocol::ValidationResponse;
use crate::game::dictionary::WordRepository;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Default port for the dictionary service
pub const DEFAULT_PORT: u16 = 3000;

/// Build the service routes around a shared repository
pub fn router(repo: Arc<WordRepository>) -> Router {
    Router::new()
        .route("/validate-word/{word}", get(validate_word))
        .with_state(repo)
}

/// `GET /validate-word/{word}`
async fn validate_word(
    State(repo): State<Arc<WordRepository>>,
    Path(word): Path<String>,
) -> impl IntoResponse {
    let word = word.to_uppercase();
    let exists = repo.contains(&word);
    info!(
        "validation request for word \"{}\": {}",
        word,
        if exists { "valid" } else { "invalid" }
    );
    (
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(ValidationResponse { exists }),
    )
}

/// Bind `addr` and serve until ctrl-c
pub async fn serve(addr: SocketAddr, repo: Arc<WordRepository>) -> io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("dictionary server running on http://{}", listener.local_addr()?);
    axum::serve(listener, router(repo))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
