//! CF Tracker - Codeforces Student Progress Tracker
//!
//! This library provides the core functionality for the CF Tracker platform,
//! which follows students' competitive-programming progress by syncing their
//! public Codeforces history and serving derived statistics to a dashboard.
//!
//! # Features
//!
//! - Student registration and management
//! - Periodic and on-demand sync of contest/submission history
//! - Problem-solving statistics and rating-distribution analytics
//! - Cron-scheduled batch refresh with inactivity reminder emails
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod scheduler;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
