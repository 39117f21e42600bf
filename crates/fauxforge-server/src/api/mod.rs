use axum::Router;
use axum::routing::{delete, get, post};

use crate::state::AppState;

mod datasets;
mod docs;
mod error;

pub use error::{ApiError, DELETED_MESSAGE, NOT_FOUND_MESSAGE};

/// Register every route on `router`.
pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/generate-data", post(datasets::generate_data))
        .route("/get-data/{key}", get(datasets::get_data))
        .route("/list-files", get(datasets::list_files))
        .route("/delete-data/{key}", delete(datasets::delete_data))
        .route("/api-docs", get(docs::api_docs))
        .route("/health", get(docs::health))
}
