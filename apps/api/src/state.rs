use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analysis backend. Default: SimilarityAnalyzer.
    /// Swapped to RemoteAnalyzer when ANALYSIS_API_URL is set.
    pub analyzer: Arc<dyn Analyzer>,
}
