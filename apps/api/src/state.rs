use std::sync::Arc;

use crate::config::Config;
use crate::storage::ResumeStore;
use crate::store::IntakeStore;
use crate::summaries::summarizer::JdSummarizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Candidates and JD summaries. Postgres in production.
    pub store: Arc<dyn IntakeStore>,
    /// Resume files. S3 / MinIO in production.
    pub resumes: Arc<dyn ResumeStore>,
    /// Pluggable JD summarizer. LLM-backed when ANTHROPIC_API_KEY is set.
    pub summarizer: Arc<dyn JdSummarizer>,
    pub config: Config,
}
