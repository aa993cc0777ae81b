//! Analytics handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Analytics routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/contest-history", get(handler::contest_history))
        .route("/{id}/problem-stats", get(handler::problem_stats))
        .route("/{id}/rating-distribution", get(handler::rating_distribution))
}
