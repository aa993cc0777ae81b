//! Admin handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    db::repositories::SettingsRepository,
    error::AppResult,
    models::SchedulerSettings,
    state::AppState,
};

use super::{
    request::UpdateCronSettingsRequest,
    response::{ManualSyncResponse, UpdateCronSettingsResponse},
};

/// Read the current sync schedule
pub async fn get_cron_settings(
    State(state): State<AppState>,
) -> AppResult<Json<SchedulerSettings>> {
    let settings = SettingsRepository::load(state.db()).await?;
    Ok(Json(settings))
}

/// Update the sync schedule and reinstall the cron job
pub async fn update_cron_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCronSettingsRequest>,
) -> AppResult<Json<UpdateCronSettingsResponse>> {
    payload.validate()?;

    let enabled = payload.enabled.unwrap_or(true);
    state
        .scheduler()
        .reconfigure(payload.cron_expression.clone(), enabled)
        .await?;

    Ok(Json(UpdateCronSettingsResponse {
        message: "Cron schedule updated".to_string(),
        cron_expression: payload.cron_expression,
        enabled,
    }))
}

/// Run the sync batch now; 409 if one is already in progress
pub async fn trigger_manual_sync(
    State(state): State<AppState>,
) -> AppResult<Json<ManualSyncResponse>> {
    let report = state.scheduler().run_once().await?;

    Ok(Json(ManualSyncResponse {
        message: "Manual sync completed".to_string(),
        report,
    }))
}
