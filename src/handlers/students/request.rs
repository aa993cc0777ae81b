//! Student request DTOs

use serde::Deserialize;
use validator::Validate;

/// Register a new student
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub cf_handle: Option<String>,
}

/// Change a student's Codeforces handle
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHandleRequest {
    #[validate(length(min = 1, max = 64))]
    pub cf_handle: Option<String>,
}

/// Toggle automatic reminder emails
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAutoReminderRequest {
    pub auto_reminder: bool,
}
