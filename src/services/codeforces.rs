//! Codeforces API client for fetching public contest and submission history.
//!
//! Handles:
//! - Handle validation via `user.info` (fails closed)
//! - Rating change history via `user.rating`
//! - Submission history via `user.status`
//!
//! No retry is performed here; the caller decides what a failed fetch means.

use crate::{
    config::CodeforcesConfig,
    error::{AppError, AppResult},
    models::{CfResponse, RatingChange, Submission},
};

/// Codeforces read-API client
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    http: reqwest::Client,
    base_url: String,
}

impl CodeforcesClient {
    /// Create a new client from configuration
    pub fn new(config: &CodeforcesConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a client against a custom base URL (used by tests)
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Check that a handle exists on Codeforces
    ///
    /// Fails closed: transport errors, parse errors, and non-OK API statuses
    /// all yield `false` so an unreachable upstream never passes validation.
    pub async fn validate_handle(&self, handle: &str) -> bool {
        let url = format!("{}/user.info", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("handles", handle)])
            .send()
            .await;

        match response {
            Ok(resp) => match resp.json::<CfResponse<serde_json::Value>>().await {
                Ok(body) => body.is_ok(),
                Err(e) => {
                    tracing::warn!("Failed to parse user.info response for {}: {}", handle, e);
                    false
                }
            },
            Err(e) => {
                tracing::warn!("Failed to validate handle {}: {}", handle, e);
                false
            }
        }
    }

    /// Fetch a user's full rating change history
    pub async fn fetch_rating_changes(&self, handle: &str) -> AppResult<Vec<RatingChange>> {
        let url = format!("{}/user.rating", self.base_url);
        self.fetch_list(&url, handle, "rating history").await
    }

    /// Fetch a user's full submission history
    pub async fn fetch_submissions(&self, handle: &str) -> AppResult<Vec<Submission>> {
        let url = format!("{}/user.status", self.base_url);
        self.fetch_list(&url, handle, "submissions").await
    }

    /// Shared GET + envelope handling for the list endpoints
    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        handle: &str,
        what: &str,
    ) -> AppResult<Vec<T>> {
        let body = self
            .http
            .get(url)
            .query(&[("handle", handle)])
            .send()
            .await?
            .json::<CfResponse<Vec<T>>>()
            .await?;

        if !body.is_ok() {
            let reason = body.comment.unwrap_or_else(|| "Unknown error".to_string());
            return Err(AppError::Upstream(format!(
                "Failed to fetch {what}: {reason}"
            )));
        }

        Ok(body.result.unwrap_or_default())
    }
}
