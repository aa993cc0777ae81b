//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// CODEFORCES API
// =============================================================================

/// Base URL of the Codeforces read API
pub const CODEFORCES_API_BASE_URL: &str = "https://codeforces.com/api";

/// Default per-request timeout for Codeforces API calls, in seconds
pub const DEFAULT_CODEFORCES_TIMEOUT_SECONDS: u64 = 30;

/// Verdict string the Codeforces API uses for an accepted submission
pub const VERDICT_ACCEPTED: &str = "OK";

/// Key used for problems that carry no contest id
pub const UNKNOWN_CONTEST_KEY: &str = "unknown";

// =============================================================================
// SYNC WINDOWS
// =============================================================================

/// Contest history is kept for this many trailing days at each sync
pub const CONTEST_HISTORY_WINDOW_DAYS: i64 = 365;

/// Inactivity window checked before sending a reminder email
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// Default window for the contest-history analytics endpoint
pub const DEFAULT_CONTEST_HISTORY_QUERY_DAYS: i64 = 30;

// =============================================================================
// SCHEDULER DEFAULTS
// =============================================================================

/// Default cron expression for the nightly sync batch (2am daily)
pub const DEFAULT_SYNC_CRON: &str = "0 2 * * *";

// =============================================================================
// RATING DISTRIBUTION
// =============================================================================

/// Lower bound of the first bounded rating bucket
pub const RATING_BUCKET_MIN: i32 = 800;

/// Lower bound of the open-ended top rating bucket
pub const RATING_BUCKET_MAX: i32 = 3000;

/// Width of each bounded rating bucket
pub const RATING_BUCKET_WIDTH: i32 = 100;

/// Label for solves whose problem carries no difficulty rating
pub const UNRATED_BUCKET_LABEL: &str = "Unrated";

// =============================================================================
// SMTP DEFAULTS
// =============================================================================

/// Default SMTP relay port
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address for reminder emails
pub const DEFAULT_EMAIL_FROM: &str = "noreply@example.com";

/// Subject line of the inactivity reminder email
pub const REMINDER_EMAIL_SUBJECT: &str = "Time to get back to Codeforces problem solving!";
