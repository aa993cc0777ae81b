//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

/// Update the sync schedule
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCronSettingsRequest {
    #[validate(length(min = 1, max = 64))]
    pub cron_expression: String,

    /// Defaults to enabled when omitted, matching the update semantics of
    /// the settings entity
    pub enabled: Option<bool>,
}
