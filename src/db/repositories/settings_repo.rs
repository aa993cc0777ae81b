//! Scheduler settings repository

use sqlx::PgPool;

use crate::{error::AppResult, models::SchedulerSettings};

/// Repository for the singleton scheduler settings row
pub struct SettingsRepository;

impl SettingsRepository {
    /// Load persisted settings, falling back to defaults when none exist
    pub async fn load(pool: &PgPool) -> AppResult<SchedulerSettings> {
        let settings = sqlx::query_as::<_, SchedulerSettings>(
            r#"SELECT cron_expression, enabled FROM scheduler_settings"#,
        )
        .fetch_optional(pool)
        .await?;

        Ok(settings.unwrap_or_default())
    }

    /// Replace the settings wholesale
    pub async fn save(pool: &PgPool, settings: &SchedulerSettings) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO scheduler_settings (singleton, cron_expression, enabled)
            VALUES (TRUE, $1, $2)
            ON CONFLICT (singleton)
            DO UPDATE SET cron_expression = $1, enabled = $2
            "#,
        )
        .bind(&settings.cron_expression)
        .bind(settings.enabled)
        .execute(pool)
        .await?;

        Ok(())
    }
}
