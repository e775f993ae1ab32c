use std::path::Path;

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use intake::draft::RESUME_PART;
use intake::{ApplicationDraft, Field};
use tracing::debug;

use crate::errors::AppError;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug)]
pub struct UploadedResume {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedResume {
    /// Accepts a file that is declared as PDF (by extension or content type) and starts
    /// with the PDF signature.
    fn check_pdf(&self) -> Result<(), AppError> {
        let named_pdf = Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        let typed_pdf = self.content_type.as_deref() == Some(PDF_CONTENT_TYPE);

        if !(named_pdf || typed_pdf) {
            return Err(AppError::Validation(
                "Invalid file type. Only PDF resumes are accepted".to_string(),
            ));
        }
        if !self.bytes.starts_with(b"%PDF") {
            return Err(AppError::Validation(
                "resume is not a valid PDF file".to_string(),
            ));
        }
        Ok(())
    }
}

/// A parsed `/apply` body: the raw field text, exactly as the form sent it.
#[derive(Debug)]
pub struct Submission {
    pub draft: ApplicationDraft,
    pub resume: Option<UploadedResume>,
}

/// Reads every part of the body. Known fields fill the draft, `resume` becomes the upload,
/// anything else is drained and ignored.
pub async fn read_submission(
    mut multipart: Multipart,
    max_resume_bytes: usize,
) -> Result<Submission, AppError> {
    let mut draft = ApplicationDraft::default();
    let mut resume = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_PART {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(multipart_error)?;

            // An untouched file input still posts an empty, nameless part.
            if bytes.is_empty() && file_name.is_empty() {
                continue;
            }
            if bytes.len() > max_resume_bytes {
                return Err(AppError::PayloadTooLarge(format!(
                    "resume exceeds the {max_resume_bytes} byte limit"
                )));
            }

            let upload = UploadedResume {
                file_name,
                content_type,
                bytes,
            };
            upload.check_pdf()?;
            resume = Some(upload);
        } else if let Ok(known) = name.parse::<Field>() {
            let value = field.text().await.map_err(multipart_error)?;
            draft.set(known, value);
        } else {
            debug!("Ignoring unknown multipart part '{name}'");
            field.bytes().await.map_err(multipart_error)?;
        }
    }

    Ok(Submission { draft, resume })
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
