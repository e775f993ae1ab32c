use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JdSummaryRow {
    pub id: Uuid,
    pub title: String,
    pub requirements: Vec<String>,
    pub summary: String,
    #[serde(skip_serializing)]
    pub raw_text: String,
    /// Which summarizer produced the row: "extractive" | "llm".
    pub summarizer: String,
    pub created_at: DateTime<Utc>,
}
