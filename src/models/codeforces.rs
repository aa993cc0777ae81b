//! Codeforces API response types
//!
//! Wire-format models for the Codeforces read API. Field names follow the
//! upstream JSON (camelCase) and are renamed on deserialization.

use serde::Deserialize;

/// Envelope every Codeforces API response is wrapped in
///
/// `status` is `"OK"` on success; on failure `comment` usually explains why.
#[derive(Debug, Deserialize)]
pub struct CfResponse<T> {
    pub status: String,
    #[serde(default)]
    pub result: Option<T>,
    pub comment: Option<String>,
}

impl<T> CfResponse<T> {
    /// Whether the upstream call succeeded
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// One contest's effect on a user's rating, from `user.rating`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_id: i64,
    pub contest_name: String,
    pub handle: String,
    pub rank: i32,
    pub rating_update_time_seconds: i64,
    pub old_rating: i32,
    pub new_rating: i32,
}

/// One submission, from `user.status`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub contest_id: Option<i64>,
    pub creation_time_seconds: i64,
    pub problem: Option<Problem>,
    pub verdict: Option<String>,
}

/// Problem metadata attached to a submission
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: Option<i64>,
    pub index: String,
    pub name: Option<String>,
    pub rating: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rating_response() {
        let body = r#"{
            "status": "OK",
            "result": [{
                "contestId": 1700,
                "contestName": "Codeforces Round 800",
                "handle": "alice",
                "rank": 42,
                "ratingUpdateTimeSeconds": 1655000000,
                "oldRating": 1200,
                "newRating": 1300
            }]
        }"#;

        let parsed: CfResponse<Vec<RatingChange>> = serde_json::from_str(body).unwrap();
        assert!(parsed.is_ok());
        let changes = parsed.result.unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].contest_id, 1700);
        assert_eq!(changes[0].new_rating, 1300);
    }

    #[test]
    fn test_deserialize_failed_response() {
        let body = r#"{"status": "FAILED", "comment": "handles: User with handle ghost not found"}"#;

        let parsed: CfResponse<Vec<RatingChange>> = serde_json::from_str(body).unwrap();
        assert!(!parsed.is_ok());
        assert!(parsed.result.is_none());
        assert!(parsed.comment.unwrap().contains("not found"));
    }

    #[test]
    fn test_deserialize_submission_without_verdict() {
        // In-queue submissions have no verdict yet
        let body = r#"{
            "id": 1,
            "contestId": 100,
            "creationTimeSeconds": 1650000000,
            "problem": {"contestId": 100, "index": "A", "name": "Theatre Square"}
        }"#;

        let sub: Submission = serde_json::from_str(body).unwrap();
        assert!(sub.verdict.is_none());
        assert_eq!(sub.problem.unwrap().index, "A");
    }
}
