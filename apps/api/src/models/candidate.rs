use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One submitted job application. Written once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub school10: Option<String>,
    pub marks10: Option<f64>,
    pub school12: Option<String>,
    pub marks12: Option<f64>,
    pub college: Option<String>,
    pub cgpa: Option<f64>,
    pub graduation_year: Option<i32>,
    /// Object storage key of the uploaded resume.
    pub resume_path: Option<String>,
    /// Placeholder for an external matching process; always 0 on creation.
    pub match_score: f64,
    pub applied_date: DateTime<Utc>,
}
