//! Cron scheduler for the recurring sync batch
//!
//! Owns at most one active cron job at a time. Reconfiguration atomically
//! replaces the job, and a run-in-progress guard ensures a new tick (or a
//! manual trigger) never overlaps a batch that is still executing.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::{
    constants::REMINDER_WINDOW_DAYS,
    db::repositories::{SettingsRepository, SolvedProblemRepository, StudentRepository},
    error::{AppError, AppResult},
    models::{SchedulerSettings, Student},
    services::{CodeforcesClient, ReminderNotifier, SyncService},
};

/// Outcome of one full pass over all students
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total_students: usize,
    pub synced: usize,
    pub failed: usize,
    pub skipped: usize,
    pub reminders_sent: usize,
}

/// Scheduler that runs the sync batch on a cron schedule
pub struct SyncScheduler {
    pool: PgPool,
    cf: CodeforcesClient,
    notifier: Arc<dyn ReminderNotifier>,
    scheduler: JobScheduler,
    /// The one active cron job, if any; guarded so replacement is atomic
    active_job: Mutex<Option<Uuid>>,
    /// Held for the duration of a batch run; ticks and manual triggers share it
    batch_guard: Arc<Mutex<()>>,
}

impl SyncScheduler {
    /// Create a new sync scheduler (no job installed yet)
    pub async fn new(
        pool: PgPool,
        cf: CodeforcesClient,
        notifier: Arc<dyn ReminderNotifier>,
    ) -> AppResult<Self> {
        let scheduler = JobScheduler::new().await?;
        scheduler.start().await?;

        Ok(Self {
            pool,
            cf,
            notifier,
            scheduler,
            active_job: Mutex::new(None),
            batch_guard: Arc::new(Mutex::new(())),
        })
    }

    /// Load persisted settings and install the cron job if enabled
    pub async fn initialize(&self) -> AppResult<SchedulerSettings> {
        let settings = SettingsRepository::load(&self.pool).await?;
        self.install(&settings).await?;
        Ok(settings)
    }

    /// Persist new settings and atomically replace the active job
    pub async fn reconfigure(&self, cron_expression: String, enabled: bool) -> AppResult<()> {
        let settings = SchedulerSettings {
            cron_expression,
            enabled,
        };

        // Build the job first so an invalid cron expression is rejected
        // before anything is persisted or cancelled
        let job = if settings.enabled {
            Some(self.build_job(&settings.cron_expression)?)
        } else {
            None
        };

        SettingsRepository::save(&self.pool, &settings).await?;
        self.swap_job(job).await?;

        tracing::info!(
            cron = %settings.cron_expression,
            enabled = settings.enabled,
            "Scheduler reconfigured"
        );
        Ok(())
    }

    /// Run the batch now, sharing the mutual exclusion with scheduled ticks
    pub async fn run_once(&self) -> AppResult<BatchReport> {
        let Ok(_guard) = self.batch_guard.try_lock() else {
            return Err(AppError::Conflict(
                "A sync batch is already running".to_string(),
            ));
        };

        Ok(run_batch(&self.pool, &self.cf, self.notifier.as_ref()).await)
    }

    /// Stop future ticks; an in-flight batch is not interrupted
    pub async fn shutdown(&self) -> AppResult<()> {
        self.swap_job(None).await?;
        self.scheduler.clone().shutdown().await?;
        Ok(())
    }

    async fn install(&self, settings: &SchedulerSettings) -> AppResult<()> {
        let job = if settings.enabled {
            Some(self.build_job(&settings.cron_expression)?)
        } else {
            None
        };
        self.swap_job(job).await?;

        tracing::info!(
            cron = %settings.cron_expression,
            enabled = settings.enabled,
            "Scheduler initialized"
        );
        Ok(())
    }

    /// Replace the active job under the lock, so reconfiguration can never
    /// stack two jobs or race a concurrent replacement
    async fn swap_job(&self, job: Option<Job>) -> AppResult<()> {
        let mut active = self.active_job.lock().await;

        if let Some(old_id) = active.take() {
            self.scheduler.remove(&old_id).await?;
        }
        if let Some(job) = job {
            let id = self.scheduler.add(job).await?;
            *active = Some(id);
        }

        Ok(())
    }

    fn build_job(&self, cron_expression: &str) -> AppResult<Job> {
        let pool = self.pool.clone();
        let cf = self.cf.clone();
        let notifier = self.notifier.clone();
        let batch_guard = self.batch_guard.clone();

        let job = Job::new_async(cron_expression, move |_uuid, _lock| {
            let pool = pool.clone();
            let cf = cf.clone();
            let notifier = notifier.clone();
            let batch_guard = batch_guard.clone();

            Box::pin(async move {
                let Ok(_guard) = batch_guard.try_lock() else {
                    tracing::warn!("Previous sync batch still running, skipping this tick");
                    return;
                };

                tracing::info!("Running scheduled Codeforces sync batch");
                let report = run_batch(&pool, &cf, notifier.as_ref()).await;
                tracing::info!(
                    synced = report.synced,
                    failed = report.failed,
                    skipped = report.skipped,
                    reminders = report.reminders_sent,
                    "Sync batch finished"
                );
            })
        })
        .map_err(|e| AppError::Scheduler(format!("Invalid cron expression: {e}")))?;

        Ok(job)
    }
}

/// One full pass over all students
///
/// Students are processed sequentially and independently: a failure for one
/// is recorded in the report and never aborts the rest of the batch.
async fn run_batch(
    pool: &PgPool,
    cf: &CodeforcesClient,
    notifier: &dyn ReminderNotifier,
) -> BatchReport {
    let students = match StudentRepository::list(pool).await {
        Ok(students) => students,
        Err(e) => {
            tracing::error!("Failed to list students for sync batch: {}", e);
            return BatchReport::default();
        }
    };

    let mut report = BatchReport {
        total_students: students.len(),
        ..Default::default()
    };

    for student in &students {
        if !student.has_handle() {
            report.skipped += 1;
            continue;
        }

        match process_student(pool, cf, notifier, student).await {
            Ok(reminded) => {
                report.synced += 1;
                if reminded {
                    report.reminders_sent += 1;
                }
            }
            Err(e) => {
                tracing::error!("Failed to sync student {}: {}", student.id, e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Sync one student, then send a reminder if they were inactive all week
///
/// Returns whether a reminder was delivered.
async fn process_student(
    pool: &PgPool,
    cf: &CodeforcesClient,
    notifier: &dyn ReminderNotifier,
    student: &Student,
) -> AppResult<bool> {
    let handle = student.cf_handle.as_deref().unwrap_or_default();
    SyncService::sync_student(pool, cf, handle, &student.id).await?;

    let to = Utc::now();
    let from = to - Duration::days(REMINDER_WINDOW_DAYS);
    let recent_solves =
        SolvedProblemRepository::count_in_window(pool, &student.id, from, to).await?;

    if send_reminder_if_due(notifier, recent_solves, student).await {
        StudentRepository::increment_reminders_sent(pool, &student.id).await?;
        return Ok(true);
    }

    Ok(false)
}

/// Decide and deliver: send a reminder when one is due, returning whether it
/// was actually delivered. Only a delivered reminder counts toward
/// `reminders_sent`.
async fn send_reminder_if_due(
    notifier: &dyn ReminderNotifier,
    recent_solves: i64,
    student: &Student,
) -> bool {
    if !should_remind(recent_solves, student) {
        return false;
    }

    notifier.send_reminder(&student.email, &student.name).await
}

/// A reminder goes out only when the student solved nothing in the window,
/// opted in, and has an email on file. There is no cooldown: a student who
/// stays inactive is reminded again on every cycle.
fn should_remind(recent_solves: i64, student: &Student) -> bool {
    recent_solves == 0 && student.auto_reminder && !student.email.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::services::email_service::MockReminderNotifier;

    fn student(auto_reminder: bool, email: &str) -> Student {
        Student {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: email.to_string(),
            phone: None,
            cf_handle: Some("alice".to_string()),
            current_rating: None,
            max_rating: None,
            auto_reminder,
            reminders_sent: 0,
            last_updated: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_should_remind_requires_inactivity_opt_in_and_email() {
        assert!(should_remind(0, &student(true, "alice@example.com")));
        assert!(!should_remind(3, &student(true, "alice@example.com")));
        assert!(!should_remind(0, &student(false, "alice@example.com")));
        assert!(!should_remind(0, &student(true, "")));
    }

    #[tokio::test]
    async fn test_inactive_student_gets_exactly_one_reminder() {
        let mut notifier = MockReminderNotifier::new();
        notifier
            .expect_send_reminder()
            .withf(|email, name| email == "alice@example.com" && name == "Alice")
            .times(1)
            .returning(|_, _| true);

        let delivered =
            send_reminder_if_due(&notifier, 0, &student(true, "alice@example.com")).await;
        assert!(delivered);
    }

    #[tokio::test]
    async fn test_failed_delivery_does_not_count() {
        let mut notifier = MockReminderNotifier::new();
        notifier
            .expect_send_reminder()
            .times(1)
            .returning(|_, _| false);

        let delivered =
            send_reminder_if_due(&notifier, 0, &student(true, "alice@example.com")).await;
        assert!(!delivered);
    }

    #[tokio::test]
    async fn test_active_student_gets_no_email() {
        let mut notifier = MockReminderNotifier::new();
        notifier.expect_send_reminder().never();

        let delivered =
            send_reminder_if_due(&notifier, 5, &student(true, "alice@example.com")).await;
        assert!(!delivered);
    }
}
