//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{scheduler::SyncScheduler, services::CodeforcesClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Codeforces API client
    cf: CodeforcesClient,

    /// Sync batch scheduler
    scheduler: Arc<SyncScheduler>,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, cf: CodeforcesClient, scheduler: Arc<SyncScheduler>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, cf, scheduler }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the Codeforces client
    pub fn cf(&self) -> &CodeforcesClient {
        &self.inner.cf
    }

    /// Get a reference to the sync scheduler
    pub fn scheduler(&self) -> &SyncScheduler {
        &self.inner.scheduler
    }
}
