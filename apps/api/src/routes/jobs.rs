use axum::{extract::Path, Json};
use intake::catalog::{self, JobPosting, INVALID_ROLE_MESSAGE};

use crate::errors::AppError;

/// GET /api/v1/jobs
pub async fn handle_list_jobs() -> Json<&'static [JobPosting]> {
    Json(catalog::postings())
}

/// GET /api/v1/jobs/:role
pub async fn handle_get_job(Path(role): Path<String>) -> Result<Json<&'static JobPosting>, AppError> {
    catalog::lookup(&role)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(INVALID_ROLE_MESSAGE.to_string()))
}
