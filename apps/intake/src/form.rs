//! Application Form Controller.
//!
//! Owns the draft and the submission state for a single job view:
//! `Idle -> Submitting -> {Succeeded, Failed}`. A failed submission may be retried; a
//! successful one may not, and a second submit while one is in flight is refused.

use thiserror::Error;
use tracing::{error, info};

use crate::catalog::JobPosting;
use crate::client::{IntakeClient, IntakeError, SubmitReceipt};
use crate::draft::{ApplicationDraft, Field, ResumeFile, UnknownField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("A submission is already in progress")]
    InFlight,

    #[error("This application has already been submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    Intake(#[from] IntakeError),
}

/// User-facing messages for the two submit outcomes.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Application submitted successfully!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit application.";

#[derive(Debug, Clone)]
pub struct ApplicationForm {
    posting: &'static JobPosting,
    draft: ApplicationDraft,
    state: SubmissionState,
}

impl ApplicationForm {
    pub fn new(posting: &'static JobPosting) -> Self {
        Self {
            posting,
            draft: ApplicationDraft::default(),
            state: SubmissionState::Idle,
        }
    }

    pub fn posting(&self) -> &'static JobPosting {
        self.posting
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Sets a field by its wire name, e.g. `graduationYear`.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn set_resume(&mut self, resume: ResumeFile) {
        self.draft.resume = Some(resume);
    }

    /// Moves to `Submitting` and hands out the snapshot to send.
    ///
    /// Split from [`finish_submit`](Self::finish_submit) so a form shared behind a lock can
    /// release it while the request is in flight.
    pub fn begin_submit(&mut self) -> Result<ApplicationDraft, FormError> {
        match self.state {
            SubmissionState::Submitting => Err(FormError::InFlight),
            SubmissionState::Succeeded => Err(FormError::AlreadySubmitted),
            SubmissionState::Idle | SubmissionState::Failed => {
                self.state = SubmissionState::Submitting;
                Ok(self.draft.clone())
            }
        }
    }

    /// Records the outcome of a submission started with `begin_submit`. The draft is kept
    /// either way.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.state = if succeeded {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
    }

    pub async fn submit(&mut self, client: &IntakeClient) -> Result<SubmitReceipt, FormError> {
        let snapshot = self.begin_submit()?;
        let result = client.submit_application(&snapshot).await;
        self.finish_submit(result.is_ok());

        match result {
            Ok(receipt) => {
                info!("Application for '{}' submitted", self.posting.key);
                Ok(receipt)
            }
            Err(e) => {
                error!("Application for '{}' failed: {e}", self.posting.key);
                Err(e.into())
            }
        }
    }
}
