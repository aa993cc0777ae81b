//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod contest_repo;
pub mod problem_repo;
pub mod settings_repo;
pub mod student_repo;

pub use contest_repo::ContestHistoryRepository;
pub use problem_repo::SolvedProblemRepository;
pub use settings_repo::SettingsRepository;
pub use student_repo::StudentRepository;
