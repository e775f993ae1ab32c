use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::catalog::JobPosting;
use crate::draft::{ApplicationDraft, RESUME_PART};

/// JSON body of `POST /summarizeJD`.
#[derive(Debug, Serialize)]
pub struct SummarizeRequest {
    #[serde(rename = "rawJDText")]
    pub raw_jd_text: String,
}

impl From<&JobPosting> for SummarizeRequest {
    fn from(posting: &JobPosting) -> Self {
        Self {
            raw_jd_text: posting.raw_jd_text(),
        }
    }
}

/// Builds the `POST /apply` multipart body: every text field (numbers included, as typed)
/// followed by the resume part when one is attached.
pub fn application_form(draft: &ApplicationDraft) -> reqwest::Result<Form> {
    let mut form = draft
        .text_parts()
        .fold(Form::new(), |form, (name, value)| {
            form.text(name, value.to_string())
        });

    if let Some(resume) = &draft.resume {
        let part = Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(&resume.content_type)?;
        form = form.part(RESUME_PART, part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup;
    use crate::draft::ResumeFile;

    #[test]
    fn test_summarize_request_wire_key() {
        let body = SummarizeRequest::from(lookup("aiml").unwrap());
        let json = serde_json::to_value(&body).unwrap();
        let text = json["rawJDText"].as_str().unwrap();
        assert!(text.starts_with("AI/ML Engineer\n"));
        assert!(text.contains("\nRequirements:\n"));
    }

    #[test]
    fn test_form_rejects_malformed_content_type() {
        let mut draft = ApplicationDraft::default();
        draft.resume = Some(ResumeFile {
            file_name: "cv.pdf".to_string(),
            content_type: "not a mime".to_string(),
            bytes: vec![1, 2, 3],
        });
        assert!(application_form(&draft).is_err());
    }

    #[test]
    fn test_form_builds_without_resume() {
        let draft = ApplicationDraft::default();
        assert!(application_form(&draft).is_ok());
    }
}
