//! Admin response DTOs

use serde::Serialize;

use crate::scheduler::BatchReport;

/// Confirmation of a schedule update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCronSettingsResponse {
    pub message: String,
    pub cron_expression: String,
    pub enabled: bool,
}

/// Result of a manually triggered batch run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualSyncResponse {
    pub message: String,
    #[serde(flatten)]
    pub report: BatchReport,
}
