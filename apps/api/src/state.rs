use std::sync::Arc;

use crate::analyzer::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The analyzer is built once at startup and is read-only afterwards, so both
/// front-ends (HTTP API and CLI) share it without any synchronization.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ResumeAnalyzer>,
    pub config: Config,
}
