//! Contest history model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One contest a student participated in, as of the most recent sync
///
/// The full set of rows for a student is replaced wholesale by each sync;
/// only contests from the trailing 365 days survive.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestHistoryEntry {
    pub id: Uuid,
    pub student_id: Uuid,
    pub contest_id: String,
    pub contest_name: String,
    pub rank: i32,
    pub old_rating: i32,
    pub new_rating: i32,
    pub rating_change: i32,
    pub unsolved_count: i32,
    pub timestamp: DateTime<Utc>,
}

/// A contest entry computed by the sync transform, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContestEntry {
    pub contest_id: String,
    pub contest_name: String,
    pub rank: i32,
    pub old_rating: i32,
    pub new_rating: i32,
    pub rating_change: i32,
    pub unsolved_count: i32,
    pub timestamp: DateTime<Utc>,
}
