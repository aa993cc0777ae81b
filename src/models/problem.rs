//! Solved problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One distinct problem a student has solved, as of the most recent sync
///
/// `solved_at` is the earliest accepted submission for the problem;
/// `rating` is NULL for unrated problems.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedProblem {
    pub id: Uuid,
    pub student_id: Uuid,
    pub problem_id: String,
    pub rating: Option<i32>,
    pub solved_at: DateTime<Utc>,
}

/// A solved problem computed by the sync transform, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSolvedProblem {
    pub problem_id: String,
    pub rating: Option<i32>,
    pub solved_at: DateTime<Utc>,
}
