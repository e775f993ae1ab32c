//! One job view: the best-effort `/summarizeJD` notice plus the application form.
//!
//! The notice runs on its own task from the moment the posting is opened. Submitting never
//! waits on it; the caller drains it with [`ApplySession::finish`] once the outcome has been
//! reported, bounded by a grace period.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::catalog::JobPosting;
use crate::client::{IntakeClient, SubmitReceipt};
use crate::form::{ApplicationForm, FormError};

/// How long a short-lived caller waits for the notice before exiting.
pub const NOTICE_GRACE: Duration = Duration::from_secs(5);

pub struct ApplySession {
    form: ApplicationForm,
    notice: JoinHandle<()>,
}

impl ApplySession {
    /// Opens the posting and fires the view notice.
    pub fn open(client: &IntakeClient, posting: &'static JobPosting) -> Self {
        Self {
            form: ApplicationForm::new(posting),
            notice: client.spawn_job_viewed(posting),
        }
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ApplicationForm {
        &mut self.form
    }

    pub fn notice_pending(&self) -> bool {
        !self.notice.is_finished()
    }

    pub async fn submit(&mut self, client: &IntakeClient) -> Result<SubmitReceipt, FormError> {
        self.form.submit(client).await
    }

    /// Waits up to `grace` for the view notice, then gives up on it.
    pub async fn finish(self, grace: Duration) {
        drain_notice(self.notice, grace).await;
    }
}

/// Waits up to `grace` for a spawned view notice. A notice still running afterwards is
/// aborted; its outcome was never part of the result.
pub async fn drain_notice(mut notice: JoinHandle<()>, grace: Duration) {
    match tokio::time::timeout(grace, &mut notice).await {
        Ok(Ok(())) => debug!("View notice completed"),
        Ok(Err(e)) => warn!("View notice task failed: {e}"),
        Err(_) => {
            warn!("View notice still pending after {grace:?}, abandoning it");
            notice.abort();
        }
    }
}
