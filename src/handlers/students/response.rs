//! Student response DTOs

use serde::Serialize;

use crate::models::{ContestHistoryEntry, SolvedProblem, Student};

/// Student profile with their synced history
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithHistoryResponse {
    #[serde(flatten)]
    pub student: Student,
    pub contests: Vec<ContestHistoryEntry>,
    pub problems: Vec<SolvedProblem>,
}
