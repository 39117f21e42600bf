//! HTTP surface of fauxforge.
//!
//! Routes mirror the original service: `POST /generate-data`,
//! `GET /get-data/{key}`, `GET /list-files` and `DELETE /delete-data/{key}`,
//! plus `/api-docs` and `/health`.

pub mod api;
mod error;
mod shutdown;
mod state;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ServerError;
pub use shutdown::wait_for_shutdown_signal;
pub use state::{AppState, DEFAULT_GENERATION_TIMEOUT, DEFAULT_MAX_COUNT, ServerConfig};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    api::add_routes(Router::new())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve requests on `listener` until `cancel` fires, then drain in-flight
/// requests and return.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    cancel: CancellationToken,
) -> Result<(), ServerError> {
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "http server listening");

    let signal = async move {
        cancel.cancelled().await;
    };
    axum::serve(listener, router(state))
        .with_graceful_shutdown(signal)
        .await?;

    info!("http server stopped");
    Ok(())
}
