//! Intake Client: the outbound side of the application workflow.
//!
//! Two independent calls against the careers backend:
//! - `POST /summarizeJD`, fired once per job view, best-effort;
//! - `POST /apply`, one multipart request per submit.
//!
//! Neither call retries. Failures are classified into `ErrorKind` so callers can tell a
//! rejected application apart from a backend outage or a dead connection.
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::catalog::JobPosting;
use crate::config::IntakeConfig;
use crate::draft::ApplicationDraft;

pub mod payload;

use payload::{application_form, SummarizeRequest};

/// Coarse classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backend refused the request (4xx).
    Validation,
    /// The backend failed (5xx or any other non-success status).
    Server,
    /// No usable response: connection refused, timeout, malformed body.
    Network,
}

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Application rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Backend error (status {status}): {message}")]
    Server { status: u16, message: String },
}

impl IntakeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IntakeError::Http(_) => ErrorKind::Network,
            IntakeError::Rejected { .. } => ErrorKind::Validation,
            IntakeError::Server { .. } => ErrorKind::Server,
        }
    }
}

/// Outcome of a successful submission. The body is opaque to the client.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct IntakeClient {
    client: Client,
    base_url: String,
}

impl IntakeClient {
    pub fn new(config: &IntakeConfig) -> reqwest::Result<Self> {
        Self::with_base_url(&config.api_url, config.timeout)
    }

    /// No timeout is applied unless one is given.
    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the posting's text to `POST /summarizeJD`. The response body is ignored.
    pub async fn notify_job_viewed(&self, posting: &JobPosting) -> Result<(), IntakeError> {
        let response = self
            .client
            .post(self.url("/summarizeJD"))
            .json(&SummarizeRequest::from(posting))
            .send()
            .await?;

        check_status(response).await.map(|_| ())
    }

    /// Dispatches `notify_job_viewed` on its own task. The outcome is only logged;
    /// nothing in the submit path waits on it.
    pub fn spawn_job_viewed(&self, posting: &'static JobPosting) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            match client.notify_job_viewed(posting).await {
                Ok(()) => info!("JD summary for '{}' sent to backend", posting.key),
                Err(e) => warn!("Failed to send JD summary for '{}': {e}", posting.key),
            }
        })
    }

    /// Sends one `POST /apply` with the draft's fields and optional resume.
    pub async fn submit_application(
        &self,
        draft: &ApplicationDraft,
    ) -> Result<SubmitReceipt, IntakeError> {
        let form = application_form(draft)?;
        debug!(
            "Submitting application (resume attached: {})",
            draft.resume.is_some()
        );

        let response = self
            .client
            .post(self.url("/apply"))
            .multipart(form)
            .send()
            .await?;

        let receipt = check_status(response).await?;
        info!("Candidate saved: {}", receipt.body);
        Ok(receipt)
    }
}

/// A 2xx status is success whatever the body holds. Failures are classified by status alone;
/// an unreadable error body only loses the message.
async fn check_status(response: reqwest::Response) -> Result<SubmitReceipt, IntakeError> {
    let status = response.status();

    if status.is_success() {
        return Ok(SubmitReceipt {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        });
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);

    if status.is_client_error() {
        Err(IntakeError::Rejected {
            status: status.as_u16(),
            message,
        })
    } else {
        Err(IntakeError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
