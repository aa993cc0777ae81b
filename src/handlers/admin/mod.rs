//! Admin handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cron-settings", get(handler::get_cron_settings))
        .route("/cron-settings", put(handler::update_cron_settings))
        .route("/manual-sync", post(handler::trigger_manual_sync))
}
