// Application intake: `POST /apply` turns a multipart submission into a Candidate row and,
// when one is attached, a stored resume.

pub mod handlers;
pub mod multipart;
pub mod validation;
