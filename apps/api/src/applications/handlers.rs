//! Axum route handler for application submissions.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::applications::multipart::{read_submission, PDF_CONTENT_TYPE};
use crate::applications::validation::build_candidate;
use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::state::AppState;
use crate::storage::resume_key;

/// POST /apply
///
/// Stores the resume (if any) under `resumes/<candidate id>.pdf`, then inserts the Candidate.
/// Nothing is written when the fields fail validation. If the insert fails, the uploaded
/// resume is removed again.
pub async fn handle_apply(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CandidateRow>), AppError> {
    let submission = read_submission(multipart, state.config.max_resume_bytes).await?;

    let id = Uuid::new_v4();
    let mut candidate = build_candidate(id, &submission.draft, Utc::now())?;

    if let Some(resume) = submission.resume {
        let key = resume_key(id);
        state
            .resumes
            .put(&key, resume.bytes, PDF_CONTENT_TYPE)
            .await?;
        candidate.resume_path = Some(key);
    }

    if let Err(e) = state.store.insert_candidate(&candidate).await {
        if let Some(key) = &candidate.resume_path {
            if let Err(cleanup) = state.resumes.delete(key).await {
                warn!("Failed to remove orphaned resume {key}: {cleanup}");
            }
        }
        return Err(e);
    }

    info!(
        "Candidate {} saved (resume attached: {})",
        candidate.id,
        candidate.resume_path.is_some()
    );
    Ok((StatusCode::CREATED, Json(candidate)))
}
