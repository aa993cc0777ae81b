//! Business logic services

pub mod codeforces;
pub mod email_service;
pub mod stats_service;
pub mod student_service;
pub mod sync_service;
pub mod transform;

pub use codeforces::CodeforcesClient;
pub use email_service::{EmailNotifier, ReminderNotifier};
pub use stats_service::StatsService;
pub use student_service::StudentService;
pub use sync_service::SyncService;
