//! Turns a raw application draft into a Candidate row.
//!
//! Required names and email must be non-blank (email format is not checked). Optional text
//! is trimmed and stored as NULL when blank. Numeric parts are parsed here; a blank numeric
//! part is NULL, anything unparseable is rejected with the field's wire name.

use chrono::{DateTime, Utc};
use intake::{ApplicationDraft, Field};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;

pub fn build_candidate(
    id: Uuid,
    draft: &ApplicationDraft,
    applied_date: DateTime<Utc>,
) -> Result<CandidateRow, AppError> {
    Ok(CandidateRow {
        id,
        first_name: required(draft, Field::FirstName)?,
        last_name: required(draft, Field::LastName)?,
        email: required(draft, Field::Email)?,
        phone: optional_text(draft, Field::Phone),
        address: optional_text(draft, Field::Address),
        school10: optional_text(draft, Field::School10),
        marks10: optional_number(draft, Field::Marks10)?,
        school12: optional_text(draft, Field::School12),
        marks12: optional_number(draft, Field::Marks12)?,
        college: optional_text(draft, Field::College),
        cgpa: optional_number(draft, Field::Cgpa)?,
        graduation_year: optional_year(draft, Field::GraduationYear)?,
        resume_path: None,
        match_score: 0.0,
        applied_date,
    })
}

fn required(draft: &ApplicationDraft, field: Field) -> Result<String, AppError> {
    optional_text(draft, field).ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

fn optional_text(draft: &ApplicationDraft, field: Field) -> Option<String> {
    let value = draft.get(field).trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn optional_number(draft: &ApplicationDraft, field: Field) -> Result<Option<f64>, AppError> {
    let Some(raw) = optional_text(draft, field) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(AppError::Validation(format!("{field} must be a number"))),
    }
}

fn optional_year(draft: &ApplicationDraft, field: Field) -> Result<Option<i32>, AppError> {
    let Some(raw) = optional_text(draft, field) else {
        return Ok(None);
    };
    raw.parse::<i32>()
        .map(Some)
        .map_err(|_| AppError::Validation(format!("{field} must be a whole number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ApplicationDraft {
        let mut draft = ApplicationDraft::default();
        draft.set(Field::FirstName, "A");
        draft.set(Field::LastName, "B");
        draft.set(Field::Email, "a@b.com");
        draft
    }

    fn validation_message(result: Result<CandidateRow, AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_draft_builds_candidate_with_defaults() {
        let id = Uuid::new_v4();
        let candidate = build_candidate(id, &minimal(), Utc::now()).unwrap();
        assert_eq!(candidate.id, id);
        assert_eq!(candidate.first_name, "A");
        assert_eq!(candidate.phone, None);
        assert_eq!(candidate.marks10, None);
        assert_eq!(candidate.graduation_year, None);
        assert_eq!(candidate.resume_path, None);
        assert_eq!(candidate.match_score, 0.0);
    }

    #[test]
    fn test_numbers_are_parsed() {
        let mut draft = minimal();
        draft.set(Field::Marks10, "92.5");
        draft.set(Field::Marks12, " 88 ");
        draft.set(Field::Cgpa, "8.75");
        draft.set(Field::GraduationYear, "2024");
        let candidate = build_candidate(Uuid::new_v4(), &draft, Utc::now()).unwrap();
        assert_eq!(candidate.marks10, Some(92.5));
        assert_eq!(candidate.marks12, Some(88.0));
        assert_eq!(candidate.cgpa, Some(8.75));
        assert_eq!(candidate.graduation_year, Some(2024));
    }

    #[test]
    fn test_blank_required_field_is_named() {
        let mut draft = minimal();
        draft.set(Field::Email, "   ");
        let msg = validation_message(build_candidate(Uuid::new_v4(), &draft, Utc::now()));
        assert_eq!(msg, "email is required");
    }

    #[test]
    fn test_email_format_is_not_checked() {
        let mut draft = minimal();
        draft.set(Field::Email, "not-an-email");
        assert!(build_candidate(Uuid::new_v4(), &draft, Utc::now()).is_ok());
    }

    #[test]
    fn test_non_numeric_marks_rejected() {
        let mut draft = minimal();
        draft.set(Field::Marks12, "ninety");
        let msg = validation_message(build_candidate(Uuid::new_v4(), &draft, Utc::now()));
        assert_eq!(msg, "marks12 must be a number");
    }

    #[test]
    fn test_non_finite_cgpa_rejected() {
        let mut draft = minimal();
        draft.set(Field::Cgpa, "NaN");
        assert!(build_candidate(Uuid::new_v4(), &draft, Utc::now()).is_err());
    }

    #[test]
    fn test_fractional_graduation_year_rejected() {
        let mut draft = minimal();
        draft.set(Field::GraduationYear, "2024.5");
        let msg = validation_message(build_candidate(Uuid::new_v4(), &draft, Utc::now()));
        assert_eq!(msg, "graduationYear must be a whole number");
    }
}
