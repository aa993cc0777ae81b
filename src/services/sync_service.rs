//! Sync pipeline service
//!
//! Orchestrates one student's refresh: validate the handle, fetch rating and
//! submission history from Codeforces, normalize both feeds, and replace the
//! student's persisted snapshot in a single transaction.

use chrono::{Duration, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::CONTEST_HISTORY_WINDOW_DAYS,
    db::repositories::{ContestHistoryRepository, SolvedProblemRepository, StudentRepository},
    error::{AppError, AppResult},
    services::{CodeforcesClient, transform},
};

/// Summary of one completed student sync
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    pub contests: usize,
    pub problems_solved: usize,
}

/// Sync service for refreshing a student's Codeforces data
pub struct SyncService;

impl SyncService {
    /// Run the full sync pipeline for one student
    pub async fn sync_student(
        pool: &PgPool,
        cf: &CodeforcesClient,
        handle: &str,
        student_id: &Uuid,
    ) -> AppResult<SyncOutcome> {
        if !cf.validate_handle(handle).await {
            return Err(AppError::Upstream(format!(
                "Invalid Codeforces handle: {handle}"
            )));
        }

        // The two feeds are independent; fetch them concurrently
        let (rating_changes, submissions) = futures::try_join!(
            cf.fetch_rating_changes(handle),
            cf.fetch_submissions(handle)
        )?;

        let cutoff = Utc::now() - Duration::days(CONTEST_HISTORY_WINDOW_DAYS);
        let contests = transform::contest_history(&rating_changes, &submissions, cutoff);
        let problems = transform::solved_problems(&submissions);
        let summary = transform::rating_summary(&rating_changes);

        // Replace both collections and the rating snapshot atomically, so a
        // partial failure never leaves them describing different points in time
        let mut tx = pool.begin().await.map_err(AppError::from)?;

        ContestHistoryRepository::replace_for_student(&mut tx, student_id, &contests).await?;
        SolvedProblemRepository::replace_for_student(&mut tx, student_id, &problems).await?;

        match summary {
            Some((current, max)) => {
                StudentRepository::update_ratings(&mut *tx, student_id, current, max).await?;
            }
            None => {
                StudentRepository::touch_last_updated(&mut *tx, student_id).await?;
            }
        }

        tx.commit().await.map_err(AppError::from)?;

        tracing::info!(
            handle,
            contests = contests.len(),
            problems = problems.len(),
            "Synced Codeforces data"
        );

        Ok(SyncOutcome {
            contests: contests.len(),
            problems_solved: problems.len(),
        })
    }
}
