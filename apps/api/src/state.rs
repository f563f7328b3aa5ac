use std::sync::Arc;

use crate::analysis::analyzer::ScopeAnalyzer;
use crate::verification::oracle::VideoVerifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scope analyzer. Default: RuleBasedAnalyzer. Swap via ANALYSIS_UPSTREAM_URL.
    pub analyzer: Arc<dyn ScopeAnalyzer>,
    /// Pluggable video oracle. Default: PlaceholderVerifier. Swap via VIDEO_VERIFIER_URL.
    pub verifier: Arc<dyn VideoVerifier>,
}
