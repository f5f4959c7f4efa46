//! Remote analysis backend — delegates scoring to an external analysis API.
//!
//! Selected at startup when ANALYSIS_API_URL is set. One attempt per request,
//! no retry or backoff; the caller surfaces failures to the user.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::analysis::{Analysis, Analyzer};
use crate::errors::AppError;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    resume_text: &'a str,
    job_description: &'a str,
}

/// Client for a remote analysis API accepting extracted resume text plus a
/// job description and returning `{ analysis, match_score }`.
pub struct RemoteAnalyzer {
    client: Client,
    endpoint: String,
}

impl RemoteAnalyzer {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }

    async fn call(&self, resume_text: &str, job_description: &str) -> Result<Analysis, RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest {
                resume_text,
                job_description,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let analysis: Analysis = response.json().await?;
        debug!(
            "Remote analysis succeeded: match_score={}",
            analysis.match_score
        );
        Ok(analysis)
    }
}

#[async_trait]
impl Analyzer for RemoteAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Analysis, AppError> {
        self.call(resume_text, job_description)
            .await
            .map_err(|e| AppError::Analysis(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(AnalyzeRequest {
            resume_text: "resume",
            job_description: "jd",
        })
        .unwrap();
        assert_eq!(body["resume_text"], "resume");
        assert_eq!(body["job_description"], "jd");
    }

    #[test]
    fn test_api_error_message_includes_status() {
        let err = RemoteError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }
}
