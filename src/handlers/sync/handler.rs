//! Sync handler implementations

use axum::{Json, extract::State};

use crate::{
    error::AppResult,
    services::{StudentService, SyncService},
    state::AppState,
};

use super::{request::SyncCodeforcesRequest, response::SyncCodeforcesResponse};

/// Run the sync pipeline for one student, synchronously
///
/// Missing or malformed fields are a 400; upstream failures surface as a 500
/// carrying the Codeforces-provided detail.
pub async fn sync_codeforces(
    State(state): State<AppState>,
    Json(payload): Json<SyncCodeforcesRequest>,
) -> AppResult<Json<SyncCodeforcesResponse>> {
    let (handle, student_id) = payload.into_parts()?;

    // Reject unknown students before touching the upstream API
    StudentService::get(state.db(), &student_id).await?;

    let outcome = SyncService::sync_student(state.db(), state.cf(), &handle, &student_id).await?;

    Ok(Json(SyncCodeforcesResponse {
        message: format!("Contest history synced successfully for {handle}"),
        outcome,
    }))
}
