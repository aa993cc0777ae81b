//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod analytics;
pub mod health;
pub mod students;
pub mod sync;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/students", students::routes())
        .nest("/sync", sync::routes())
        .nest("/analytics", analytics::routes())
        .nest("/admin", admin::routes())
}
