//! Application intake for the careers site: the job catalog, the application draft and
//! form controller, the per-view session, and the HTTP client that talks to the careers backend.

pub mod catalog;
pub mod client;
pub mod config;
pub mod draft;
pub mod form;
pub mod session;

#[cfg(test)]
mod testing;

pub use catalog::{lookup, JobPosting};
pub use client::{ErrorKind, IntakeClient, IntakeError, SubmitReceipt};
pub use draft::{ApplicationDraft, Field, ResumeFile};
pub use form::{ApplicationForm, FormError, SubmissionState};
pub use session::ApplySession;
