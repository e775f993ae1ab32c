// JD summaries: the `/summarizeJD` endpoint fired by the careers front end on every job view.
// The summarizer is pluggable; the LLM-backed one is only used when an API key is configured.

pub mod handlers;
pub mod prompts;
pub mod summarizer;
