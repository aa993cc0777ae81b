//! Analytics handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{error::AppResult, services::StatsService, state::AppState};

use super::{
    request::WindowQuery,
    response::{ContestHistoryResponse, ProblemStatsResponse, RatingDistributionResponse},
};

/// Contest history for a student (default window: 30 days)
pub async fn contest_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<ContestHistoryResponse>> {
    let history = StatsService::contest_history(state.db(), &id, query.days).await?;
    Ok(Json(history))
}

/// Problem-solving statistics (all-time when no window is given)
pub async fn problem_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<ProblemStatsResponse>> {
    let stats = StatsService::problem_stats(state.db(), &id, query.days).await?;
    Ok(Json(stats))
}

/// Difficulty histogram of solves (all-time when no window is given)
pub async fn rating_distribution(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<RatingDistributionResponse>> {
    let distribution = StatsService::rating_distribution(state.db(), &id, query.days).await?;
    Ok(Json(distribution))
}
