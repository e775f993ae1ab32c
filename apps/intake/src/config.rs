use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    pub api_url: String,
    /// Per-request timeout. None unless `INTAKE_TIMEOUT_SECS` is set.
    pub timeout: Option<Duration>,
    pub rust_log: String,
}

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

impl IntakeConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout = match var("INTAKE_TIMEOUT_SECS") {
            Some(secs) => {
                let secs = secs
                    .trim()
                    .parse::<u64>()
                    .context("INTAKE_TIMEOUT_SECS must be a whole number of seconds")?;
                if secs == 0 {
                    bail!("INTAKE_TIMEOUT_SECS must be at least 1; unset it to disable the timeout");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(IntakeConfig {
            api_url: var("CAREERS_API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
