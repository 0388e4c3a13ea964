pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::writing::handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Writing API
        .route("/api/v1/modes", get(handlers::handle_list_modes))
        .route("/api/v1/write", post(handlers::handle_write))
        .fallback(not_found)
        .with_state(state)
}
