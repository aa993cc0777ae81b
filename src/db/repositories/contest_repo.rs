//! Contest history repository

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ContestHistoryEntry, NewContestEntry},
};

/// Repository for contest history database operations
pub struct ContestHistoryRepository;

impl ContestHistoryRepository {
    /// Replace a student's contest history with a freshly computed snapshot
    ///
    /// Runs inside the caller's transaction so a failure rolls back the
    /// delete together with the partial insert.
    pub async fn replace_for_student(
        tx: &mut Transaction<'_, Postgres>,
        student_id: &Uuid,
        entries: &[NewContestEntry],
    ) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM contest_history WHERE student_id = $1"#)
            .bind(student_id)
            .execute(&mut **tx)
            .await?;

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO contest_history
                    (student_id, contest_id, contest_name, rank, old_rating,
                     new_rating, rating_change, unsolved_count, timestamp)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(student_id)
            .bind(&entry.contest_id)
            .bind(&entry.contest_name)
            .bind(entry.rank)
            .bind(entry.old_rating)
            .bind(entry.new_rating)
            .bind(entry.rating_change)
            .bind(entry.unsolved_count)
            .bind(entry.timestamp)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// List a student's contests since a given time, oldest first
    pub async fn list_since(
        pool: &PgPool,
        student_id: &Uuid,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<ContestHistoryEntry>> {
        let entries = sqlx::query_as::<_, ContestHistoryEntry>(
            r#"
            SELECT * FROM contest_history
            WHERE student_id = $1 AND timestamp >= $2
            ORDER BY timestamp ASC
            "#,
        )
        .bind(student_id)
        .bind(since)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// List a student's full contest history, oldest first
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: &Uuid,
    ) -> AppResult<Vec<ContestHistoryEntry>> {
        let entries = sqlx::query_as::<_, ContestHistoryEntry>(
            r#"
            SELECT * FROM contest_history
            WHERE student_id = $1
            ORDER BY timestamp ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}
