/// Reply budget for one JD summary.
pub const JD_SUMMARY_MAX_TOKENS: u32 = 512;

/// JD summary prompt template. Replace `{jd_text}` before sending.
/// Paired with `llm_client::prompts::JSON_ONLY_SYSTEM`.
pub const JD_SUMMARY_PROMPT_TEMPLATE: &str = r#"Summarize the following job description for a recruiter who will screen applicants.

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "AI/ML Engineer",
  "requirements": ["3+ years of experience in ML/DL"],
  "summary": "Two or three sentences describing the role and the ideal candidate."
}

Rules:
- "title" is the role title as written in the job description.
- "requirements" lists each requirement once, in the order given, reworded only to remove filler.
- "summary" must not mention anything the job description does not state.

Job description:
{jd_text}
"#;
