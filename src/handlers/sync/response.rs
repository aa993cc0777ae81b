//! Sync response DTOs

use serde::Serialize;

use crate::services::sync_service::SyncOutcome;

/// Result of a manual sync
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCodeforcesResponse {
    pub message: String,
    #[serde(flatten)]
    pub outcome: SyncOutcome,
}
