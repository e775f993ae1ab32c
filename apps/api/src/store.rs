//! Persistence for candidates and JD summaries.
//!
//! Handlers only see `IntakeStore`; `PgIntakeStore` is the production backend.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::models::summary::JdSummaryRow;

#[async_trait]
pub trait IntakeStore: Send + Sync {
    /// Inserts a new candidate. Candidates are append-only.
    async fn insert_candidate(&self, candidate: &CandidateRow) -> Result<(), AppError>;

    async fn insert_jd_summary(&self, summary: &JdSummaryRow) -> Result<(), AppError>;
}

pub struct PgIntakeStore {
    pool: PgPool,
}

impl PgIntakeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IntakeStore for PgIntakeStore {
    async fn insert_candidate(&self, c: &CandidateRow) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO candidates
                (id, first_name, last_name, email, phone, address,
                 school10, marks10, school12, marks12, college, cgpa,
                 graduation_year, resume_path, match_score, applied_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(c.id)
        .bind(&c.first_name)
        .bind(&c.last_name)
        .bind(&c.email)
        .bind(&c.phone)
        .bind(&c.address)
        .bind(&c.school10)
        .bind(c.marks10)
        .bind(&c.school12)
        .bind(c.marks12)
        .bind(&c.college)
        .bind(c.cgpa)
        .bind(c.graduation_year)
        .bind(&c.resume_path)
        .bind(c.match_score)
        .bind(c.applied_date)
        .execute(&self.pool)
        .await?;

        info!("Inserted candidate {}", c.id);
        Ok(())
    }

    async fn insert_jd_summary(&self, s: &JdSummaryRow) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO jd_summaries
                (id, title, requirements, summary, raw_text, summarizer, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(s.id)
        .bind(&s.title)
        .bind(&s.requirements)
        .bind(&s.summary)
        .bind(&s.raw_text)
        .bind(&s.summarizer)
        .bind(s.created_at)
        .execute(&self.pool)
        .await?;

        info!("Stored JD summary {} for '{}'", s.id, s.title);
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use std::sync::Mutex;

    use super::*;

    /// In-memory store for handler tests. `fail` makes every write return a database error.
    #[derive(Default)]
    pub struct MemoryIntakeStore {
        pub candidates: Mutex<Vec<CandidateRow>>,
        pub summaries: Mutex<Vec<JdSummaryRow>>,
        pub fail: bool,
    }

    impl MemoryIntakeStore {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn candidates(&self) -> Vec<CandidateRow> {
            self.candidates.lock().unwrap().clone()
        }

        pub fn summaries(&self) -> Vec<JdSummaryRow> {
            self.summaries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IntakeStore for MemoryIntakeStore {
        async fn insert_candidate(&self, candidate: &CandidateRow) -> Result<(), AppError> {
            if self.fail {
                return Err(AppError::Database(sqlx::Error::PoolClosed));
            }
            self.candidates.lock().unwrap().push(candidate.clone());
            Ok(())
        }

        async fn insert_jd_summary(&self, summary: &JdSummaryRow) -> Result<(), AppError> {
            if self.fail {
                return Err(AppError::Database(sqlx::Error::PoolClosed));
            }
            self.summaries.lock().unwrap().push(summary.clone());
            Ok(())
        }
    }
}
