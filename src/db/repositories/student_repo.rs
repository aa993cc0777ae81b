//! Student repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Student};

/// Repository for student database operations
pub struct StudentRepository;

impl StudentRepository {
    /// Create a new student
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        phone: Option<&str>,
        cf_handle: Option<&str>,
    ) -> AppResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, email, phone, cf_handle)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(cf_handle)
        .fetch_one(pool)
        .await?;

        Ok(student)
    }

    /// Find student by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(r#"SELECT * FROM students WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(student)
    }

    /// List all students
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Student>> {
        let students =
            sqlx::query_as::<_, Student>(r#"SELECT * FROM students ORDER BY created_at"#)
                .fetch_all(pool)
                .await?;

        Ok(students)
    }

    /// Update a student's Codeforces handle and clear the sync timestamp
    pub async fn update_handle(
        pool: &PgPool,
        id: &Uuid,
        cf_handle: Option<&str>,
    ) -> AppResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET cf_handle = $2, last_updated = NULL
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(cf_handle)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }

    /// Update a student's auto-reminder preference
    pub async fn update_auto_reminder(
        pool: &PgPool,
        id: &Uuid,
        auto_reminder: bool,
    ) -> AppResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET auto_reminder = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(auto_reminder)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }

    /// Update the cached rating snapshot and mark the sync time
    ///
    /// Runs inside the sync transaction, so it takes any executor.
    pub async fn update_ratings<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &Uuid,
        current_rating: i32,
        max_rating: i32,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE students
            SET current_rating = $2, max_rating = $3, last_updated = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(current_rating)
        .bind(max_rating)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Mark the sync time without touching ratings (student has no rated contests)
    pub async fn touch_last_updated<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &Uuid,
    ) -> AppResult<()> {
        sqlx::query(r#"UPDATE students SET last_updated = NOW() WHERE id = $1"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Increment the reminder counter
    pub async fn increment_reminders_sent(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"UPDATE students SET reminders_sent = reminders_sent + 1 WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete a student (contest history and solved problems cascade)
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM students WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
