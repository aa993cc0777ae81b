//! Student service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{ContestHistoryRepository, SolvedProblemRepository, StudentRepository},
    error::{AppError, AppResult},
    models::{ContestHistoryEntry, SolvedProblem, Student},
};

/// Student service for business logic
pub struct StudentService;

impl StudentService {
    /// Register a new student
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        phone: Option<&str>,
        cf_handle: Option<&str>,
    ) -> AppResult<Student> {
        StudentRepository::create(pool, name, email, phone, cf_handle)
            .await
            .map_err(|e| match e {
                AppError::AlreadyExists(_) => {
                    AppError::AlreadyExists("Codeforces handle already in use".to_string())
                }
                other => other,
            })
    }

    /// List all students
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Student>> {
        StudentRepository::list(pool).await
    }

    /// Get a student by ID
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<Student> {
        StudentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Get a student together with their synced contest and solve history
    pub async fn get_with_history(
        pool: &PgPool,
        id: &Uuid,
    ) -> AppResult<(Student, Vec<ContestHistoryEntry>, Vec<SolvedProblem>)> {
        let student = StudentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let contests = ContestHistoryRepository::list_for_student(pool, id).await?;
        let problems = SolvedProblemRepository::list_for_student(pool, id).await?;

        Ok((student, contests, problems))
    }

    /// Change a student's Codeforces handle
    ///
    /// Clears `last_updated` so the next sync is treated as a fresh one.
    pub async fn update_handle(
        pool: &PgPool,
        id: &Uuid,
        cf_handle: Option<&str>,
    ) -> AppResult<Student> {
        StudentRepository::update_handle(pool, id, cf_handle)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Toggle a student's automatic reminder emails
    pub async fn update_auto_reminder(
        pool: &PgPool,
        id: &Uuid,
        auto_reminder: bool,
    ) -> AppResult<Student> {
        StudentRepository::update_auto_reminder(pool, id, auto_reminder)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Delete a student and all their synced history
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        let deleted = StudentRepository::delete(pool, id).await?;
        if !deleted {
            return Err(AppError::NotFound("Student not found".to_string()));
        }
        Ok(())
    }
}
