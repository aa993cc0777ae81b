//! Analytics request DTOs

use serde::Deserialize;

/// Optional trailing-day window for analytics reads
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub days: Option<i64>,
}
