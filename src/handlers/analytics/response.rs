//! Analytics response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Contest history with a rating-over-time series
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestHistoryResponse {
    pub student_id: Uuid,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub rating_graph: Vec<RatingGraphPoint>,
    pub contests: Vec<ContestSummary>,
}

/// One point of the rating graph
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingGraphPoint {
    pub date: DateTime<Utc>,
    pub rating: i32,
}

/// Brief contest info
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestSummary {
    pub name: String,
    pub contest_id: String,
    pub rank: i32,
    pub old_rating: i32,
    pub new_rating: i32,
    pub rating_change: i32,
    pub unsolved_count: i32,
    pub date: DateTime<Utc>,
}

/// Problem-solving statistics over a window
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemStatsResponse {
    pub student_id: Uuid,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub total_problems_solved: i64,
    pub most_difficult_problem: Option<MostDifficultProblem>,
    pub average_rating: Option<i32>,
    pub average_problems_per_day: f64,
}

/// The hardest problem solved in the window
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MostDifficultProblem {
    pub problem_id: String,
    pub rating: Option<i32>,
}

/// Solve counts per difficulty band
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDistributionResponse {
    pub student_id: Uuid,
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
    pub total_problems: i64,
    pub rating_distribution: Vec<RatingBucket>,
}

/// One non-empty histogram bucket
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    pub range: String,
    pub count: i64,
    pub percentage: i32,
}
