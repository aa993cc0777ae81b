//! Sync request DTOs

use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Immediately sync one student's Codeforces data
///
/// Both fields are optional at the wire level so an absent field is reported
/// as a 400 validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncCodeforcesRequest {
    pub handle: Option<String>,
    pub student_id: Option<Uuid>,
}

impl SyncCodeforcesRequest {
    /// Extract the required fields, rejecting missing or empty values
    pub fn into_parts(self) -> AppResult<(String, Uuid)> {
        let handle = self
            .handle
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AppError::Validation("Missing handle or studentId".to_string()))?;
        let student_id = self
            .student_id
            .ok_or_else(|| AppError::Validation("Missing handle or studentId".to_string()))?;

        Ok((handle, student_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_parts_rejects_missing_fields() {
        let missing_handle = SyncCodeforcesRequest {
            handle: None,
            student_id: Some(Uuid::new_v4()),
        };
        assert!(missing_handle.into_parts().is_err());

        let empty_handle = SyncCodeforcesRequest {
            handle: Some(String::new()),
            student_id: Some(Uuid::new_v4()),
        };
        assert!(empty_handle.into_parts().is_err());

        let missing_id = SyncCodeforcesRequest {
            handle: Some("alice".to_string()),
            student_id: None,
        };
        assert!(missing_id.into_parts().is_err());
    }

    #[test]
    fn test_into_parts_accepts_complete_request() {
        let id = Uuid::new_v4();
        let request = SyncCodeforcesRequest {
            handle: Some("alice".to_string()),
            student_id: Some(id),
        };

        let (handle, student_id) = request.into_parts().unwrap();
        assert_eq!(handle, "alice");
        assert_eq!(student_id, id);
    }
}
