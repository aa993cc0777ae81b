//! Scheduler settings model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::DEFAULT_SYNC_CRON;

/// Singleton scheduler configuration
///
/// At most one row exists in the database (enforced by a check constraint on
/// the primary key); when the table is empty the defaults below apply.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerSettings {
    pub cron_expression: String,
    pub enabled: bool,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            cron_expression: DEFAULT_SYNC_CRON.to_string(),
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SchedulerSettings::default();
        assert_eq!(settings.cron_expression, "0 2 * * *");
        assert!(settings.enabled);
    }
}
