pub mod health;
pub mod jobs;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::applications::handlers::handle_apply;
use crate::state::AppState;
use crate::summaries::handlers::handle_summarize_jd;

/// Room for the twelve text parts and multipart framing on top of the resume itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let apply_limit = state.config.max_resume_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Intake endpoints called by the careers front end
        .route("/summarizeJD", post(handle_summarize_jd))
        .route(
            "/apply",
            post(handle_apply).layer(DefaultBodyLimit::max(apply_limit)),
        )
        // Catalog
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:role", get(jobs::handle_get_job))
        .with_state(state)
}
