use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::domain::DomainError;

use super::container::Container;
use super::controller::{IndexController, SubmitController};

/// Largest `/submit` body accepted. The whole history is resent on every
/// call, so this sits well above axum's 2 MiB default.
pub const MAX_SUBMIT_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Build the HTTP surface: `GET /` page and `POST /submit`.
pub fn router(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(handle_index))
        .route(
            "/submit",
            post(handle_submit)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::max(MAX_SUBMIT_BODY_BYTES)),
        )
        .with_state(container)
}

/// Bind `addr` and serve until Ctrl+C. In-flight requests complete before exit.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(container))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn handle_index(State(container): State<Arc<Container>>) -> Response {
    match IndexController::new(&container).index() {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!("index error: {e}");
            error_response(&e)
        }
    }
}

async fn handle_submit(State(container): State<Arc<Container>>, body: Bytes) -> Response {
    match SubmitController::new(&container).submit(&body).await {
        Ok(submission) => Json(submission).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn error_response(err: &DomainError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.public_message()).into_response()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
