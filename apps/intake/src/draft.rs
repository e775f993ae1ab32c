//! The application draft: every Candidate field as raw text plus an optional resume.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// The twelve text fields of an application, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    School10,
    Marks10,
    School12,
    Marks12,
    College,
    Cgpa,
    GraduationYear,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Address,
        Field::School10,
        Field::Marks10,
        Field::School12,
        Field::Marks12,
        Field::College,
        Field::Cgpa,
        Field::GraduationYear,
    ];

    /// Multipart part name for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::School10 => "school10",
            Field::Marks10 => "marks10",
            Field::School12 => "school12",
            Field::Marks12 => "marks12",
            Field::College => "college",
            Field::Cgpa => "cgpa",
            Field::GraduationYear => "graduationYear",
        }
    }

    /// Fields the backend rejects when blank.
    pub fn is_required(self) -> bool {
        matches!(self, Field::FirstName | Field::LastName | Field::Email)
    }

    /// Fields the backend stores as numbers.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Field::Marks10 | Field::Marks12 | Field::Cgpa | Field::GraduationYear
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown application field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Part name of the resume file in the multipart body.
pub const RESUME_PART: &str = "resume";

/// A resume file selected for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "application/pdf".to_string(),
            bytes,
        }
    }

    /// Reads a resume from disk. The content type is inferred from the extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume.pdf")
            .to_string();
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        let content_type = if is_pdf {
            "application/pdf"
        } else {
            "application/octet-stream"
        };
        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            bytes,
        })
    }
}

/// Pre-submission mirror of a Candidate. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub school10: String,
    pub marks10: String,
    pub school12: String,
    pub marks12: String,
    pub college: String,
    pub cgpa: String,
    pub graduation_year: String,
    pub resume: Option<ResumeFile>,
}

impl ApplicationDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::School10 => &self.school10,
            Field::Marks10 => &self.marks10,
            Field::School12 => &self.school12,
            Field::Marks12 => &self.marks12,
            Field::College => &self.college,
            Field::Cgpa => &self.cgpa,
            Field::GraduationYear => &self.graduation_year,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::School10 => &mut self.school10,
            Field::Marks10 => &mut self.marks10,
            Field::School12 => &mut self.school12,
            Field::Marks12 => &mut self.marks12,
            Field::College => &mut self.college,
            Field::Cgpa => &mut self.cgpa,
            Field::GraduationYear => &mut self.graduation_year,
        }
    }

    /// Last write wins; no other field is touched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// The text parts of the multipart body, in wire order. Empty values are included.
    pub fn text_parts(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL.into_iter().map(|f| (f.as_str(), self.get(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "resume".parse::<Field>(),
            Err(UnknownField("resume".to_string()))
        );
    }

    #[test]
    fn test_set_only_touches_target_field() {
        let mut draft = ApplicationDraft::default();
        draft.set(Field::FirstName, "Ada");
        draft.set(Field::Cgpa, "9.1");

        let before = draft.clone();
        draft.set(Field::Email, "ada@example.com");

        assert_eq!(draft.get(Field::Email), "ada@example.com");
        for field in Field::ALL.into_iter().filter(|f| *f != Field::Email) {
            assert_eq!(draft.get(field), before.get(field), "{field} changed");
        }
    }

    #[test]
    fn test_set_is_last_write_wins() {
        let mut draft = ApplicationDraft::default();
        draft.set(Field::Marks10, "88");
        draft.set(Field::Marks10, "91");
        assert_eq!(draft.marks10, "91");
    }

    #[test]
    fn test_text_parts_cover_all_fields_in_order() {
        let draft = ApplicationDraft::default();
        let names: Vec<&str> = draft.text_parts().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "firstName",
                "lastName",
                "email",
                "phone",
                "address",
                "school10",
                "marks10",
                "school12",
                "marks12",
                "college",
                "cgpa",
                "graduationYear"
            ]
        );
    }

    #[test]
    fn test_required_and_numeric_flags() {
        let required: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required, vec![Field::FirstName, Field::LastName, Field::Email]);
        assert!(Field::GraduationYear.is_numeric());
        assert!(!Field::College.is_numeric());
    }

    #[tokio::test]
    async fn test_resume_from_path_infers_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.PDF");
        tokio::fs::write(&path, b"%PDF-1.4 test").await.unwrap();

        let resume = ResumeFile::from_path(&path).await.unwrap();
        assert_eq!(resume.file_name, "cv.PDF");
        assert_eq!(resume.content_type, "application/pdf");
        assert_eq!(resume.bytes, b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_resume_from_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ResumeFile::from_path(&dir.path().join("nope.pdf")).await.is_err());
    }
}
