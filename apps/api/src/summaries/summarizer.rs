//! JD summarizers: turn the raw text posted to `/summarizeJD` into a structured summary.
//!
//! Default: `ExtractiveSummarizer` (pure-Rust, deterministic, no network).
//! With `ANTHROPIC_API_KEY` set: `LlmSummarizer`.
//!
//! `AppState` holds an `Arc<dyn JdSummarizer>`, chosen at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::summaries::prompts::{JD_SUMMARY_MAX_TOKENS, JD_SUMMARY_PROMPT_TEMPLATE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdSummary {
    pub title: String,
    pub requirements: Vec<String>,
    pub summary: String,
}

#[async_trait]
pub trait JdSummarizer: Send + Sync {
    /// Short backend name recorded with each summary.
    fn backend(&self) -> &'static str;

    async fn summarize(&self, raw_jd_text: &str) -> Result<JdSummary, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// ExtractiveSummarizer
// ────────────────────────────────────────────────────────────────────────────

/// Reads the layout the careers front end sends:
///
/// ```text
/// <title>
/// <description, one or more lines>
/// Requirements:
/// <one requirement per line>
/// ```
///
/// Text without a `Requirements:` header is treated as title plus description.
pub struct ExtractiveSummarizer;

#[async_trait]
impl JdSummarizer for ExtractiveSummarizer {
    fn backend(&self) -> &'static str {
        "extractive"
    }

    async fn summarize(&self, raw_jd_text: &str) -> Result<JdSummary, AppError> {
        extract_summary(raw_jd_text)
    }
}

fn extract_summary(raw: &str) -> Result<JdSummary, AppError> {
    let mut lines = raw.lines().map(str::trim).filter(|l| !l.is_empty());

    let title = lines
        .next()
        .ok_or_else(|| AppError::Validation("rawJDText is empty".to_string()))?
        .to_string();

    let mut description = Vec::new();
    let mut requirements = Vec::new();
    let mut in_requirements = false;

    for line in lines {
        if !in_requirements && line.eq_ignore_ascii_case("requirements:") {
            in_requirements = true;
        } else if in_requirements {
            let item = line
                .trim_start_matches(['-', '*', '•'])
                .trim_start();
            if !item.is_empty() {
                requirements.push(item.to_string());
            }
        } else {
            description.push(line);
        }
    }

    let summary = if description.is_empty() {
        title.clone()
    } else {
        description.join(" ")
    };

    Ok(JdSummary {
        title,
        requirements,
        summary,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSummarizer
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSummarizer(pub LlmClient);

#[async_trait]
impl JdSummarizer for LlmSummarizer {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn summarize(&self, raw_jd_text: &str) -> Result<JdSummary, AppError> {
        let prompt = JD_SUMMARY_PROMPT_TEMPLATE.replace("{jd_text}", raw_jd_text);
        self.0
            .call_json::<JdSummary>(&prompt, JSON_ONLY_SYSTEM, JD_SUMMARY_MAX_TOKENS)
            .await
            .map_err(|e| AppError::Llm(format!("JD summary failed: {e}")))
    }
}
