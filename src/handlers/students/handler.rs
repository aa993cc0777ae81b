//! Student handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::Student,
    services::StudentService,
    state::AppState,
};

use super::{
    request::{CreateStudentRequest, UpdateAutoReminderRequest, UpdateHandleRequest},
    response::StudentWithHistoryResponse,
};

/// Register a new student
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> AppResult<(StatusCode, Json<Student>)> {
    payload.validate()?;

    let student = StudentService::create(
        state.db(),
        &payload.name,
        &payload.email,
        payload.phone.as_deref(),
        payload.cf_handle.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// List all students
pub async fn list_students(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentService::list(state.db()).await?;
    Ok(Json(students))
}

/// Get a student with their synced contest and solve history
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StudentWithHistoryResponse>> {
    let (student, contests, problems) = StudentService::get_with_history(state.db(), &id).await?;

    Ok(Json(StudentWithHistoryResponse {
        student,
        contests,
        problems,
    }))
}

/// Change a student's Codeforces handle
pub async fn update_cf_handle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHandleRequest>,
) -> AppResult<Json<Student>> {
    payload.validate()?;

    let student =
        StudentService::update_handle(state.db(), &id, payload.cf_handle.as_deref()).await?;
    Ok(Json(student))
}

/// Toggle a student's automatic reminder emails
pub async fn update_auto_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAutoReminderRequest>,
) -> AppResult<Json<Student>> {
    let student =
        StudentService::update_auto_reminder(state.db(), &id, payload.auto_reminder).await?;
    Ok(Json(student))
}

/// Delete a student (history rows cascade)
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    StudentService::delete(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
