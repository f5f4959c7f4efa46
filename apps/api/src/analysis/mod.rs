// Analysis backends: the Analyzer trait, the default lexical similarity
// engine, and the remote HTTP backend. AppState holds an Arc<dyn Analyzer>,
// selected at startup from config.

pub mod engine;
pub mod remote;
pub mod similarity;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Output of one resume-vs-JD analysis: the free-form numbered analysis text
/// plus the overall 0-100 match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub analysis: String,
    pub match_score: u32,
}

/// Analysis backend. Implement this to swap engines without touching the
/// endpoint or handler code.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Analysis, AppError>;
}
