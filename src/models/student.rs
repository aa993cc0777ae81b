//! Student model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Student database model
///
/// `current_rating` and `max_rating` are cached snapshots written only by the
/// sync pipeline; both stay NULL until the first successful sync of a student
/// with at least one rated contest.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cf_handle: Option<String>,
    pub current_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub auto_reminder: bool,
    pub reminders_sent: i32,
    pub last_updated: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Whether this student participates in the scheduled sync batch
    pub fn has_handle(&self) -> bool {
        self.cf_handle.as_deref().is_some_and(|h| !h.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(handle: Option<&str>) -> Student {
        Student {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            cf_handle: handle.map(String::from),
            current_rating: None,
            max_rating: None,
            auto_reminder: true,
            reminders_sent: 0,
            last_updated: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_has_handle() {
        assert!(student(Some("alice")).has_handle());
        assert!(!student(Some("")).has_handle());
        assert!(!student(None).has_handle());
    }
}
