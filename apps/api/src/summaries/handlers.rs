//! Axum route handler for JD summaries.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::summary::JdSummaryRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeJdRequest {
    #[serde(rename = "rawJDText", default)]
    pub raw_jd_text: String,
}

/// POST /summarizeJD
///
/// Summarizes a job description and records the result. The careers front end fires this
/// on every job view and ignores the response beyond its status.
pub async fn handle_summarize_jd(
    State(state): State<AppState>,
    Json(request): Json<SummarizeJdRequest>,
) -> Result<(StatusCode, Json<JdSummaryRow>), AppError> {
    if request.raw_jd_text.trim().is_empty() {
        return Err(AppError::Validation("rawJDText cannot be empty".to_string()));
    }

    let summary = state.summarizer.summarize(&request.raw_jd_text).await?;

    let row = JdSummaryRow {
        id: Uuid::new_v4(),
        title: summary.title,
        requirements: summary.requirements,
        summary: summary.summary,
        raw_text: request.raw_jd_text,
        summarizer: state.summarizer.backend().to_string(),
        created_at: Utc::now(),
    };
    state.store.insert_jd_summary(&row).await?;

    info!(
        "Summarized JD '{}' ({} requirements, {})",
        row.title,
        row.requirements.len(),
        row.summarizer
    );
    Ok((StatusCode::CREATED, Json(row)))
}
