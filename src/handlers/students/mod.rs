//! Student management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Student routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create_student))
        .route("/", get(handler::list_students))
        .route("/{id}", get(handler::get_student))
        .route("/{id}", delete(handler::delete_student))
        .route("/{id}/cf-handle", patch(handler::update_cf_handle))
        .route("/{id}/auto-reminder", patch(handler::update_auto_reminder))
}
