use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use intake::catalog::{self, JobPosting, INVALID_ROLE_MESSAGE};
use intake::config::IntakeConfig;
use intake::form::{SUBMIT_FAILURE_MESSAGE, SUBMIT_SUCCESS_MESSAGE};
use intake::session::{drain_notice, NOTICE_GRACE};
use intake::{ApplySession, IntakeClient, ResumeFile};

#[derive(Parser)]
#[command(name = "apply", version, about = "Browse open roles and submit job applications")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List open roles
    Jobs,
    /// Show a role's description and requirements
    Show { role: String },
    /// Submit an application for a role
    Submit {
        role: String,
        /// Field value as NAME=VALUE, e.g. --set firstName=Ada (repeatable)
        #[arg(long = "set", value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
        /// Path to a PDF resume
        #[arg(long)]
        resume: Option<PathBuf>,
    },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = IntakeConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{pkg}={level},{bin}={level}",
                pkg = env!("CARGO_PKG_NAME"),
                bin = env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = IntakeClient::new(&config).context("Failed to build HTTP client")?;
    info!("Using careers backend at {}", config.api_url);

    match cli.command {
        Command::Jobs => {
            for posting in catalog::postings() {
                println!("{:<12} {}\n{:<12} {}", posting.key, posting.title, "", posting.tagline);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { role } => {
            let Some(posting) = catalog::lookup(&role) else {
                println!("{INVALID_ROLE_MESSAGE}");
                return Ok(ExitCode::FAILURE);
            };
            let notify = client.spawn_job_viewed(posting);
            print_posting(posting);
            drain_notice(notify, NOTICE_GRACE).await;
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit {
            role,
            fields,
            resume,
        } => {
            let Some(posting) = catalog::lookup(&role) else {
                println!("{INVALID_ROLE_MESSAGE}");
                return Ok(ExitCode::FAILURE);
            };
            let mut session = ApplySession::open(&client, posting);

            let form = session.form_mut();
            for (name, value) in fields {
                form.set_named(&name, value)?;
            }
            if let Some(path) = resume {
                let file = ResumeFile::from_path(&path)
                    .await
                    .with_context(|| format!("Failed to read resume {}", path.display()))?;
                form.set_resume(file);
            }

            let code = match session.submit(&client).await {
                Ok(_) => {
                    println!("{SUBMIT_SUCCESS_MESSAGE}");
                    ExitCode::SUCCESS
                }
                Err(_) => {
                    eprintln!("{SUBMIT_FAILURE_MESSAGE}");
                    ExitCode::FAILURE
                }
            };

            session.finish(NOTICE_GRACE).await;
            Ok(code)
        }
    }
}

fn print_posting(posting: &JobPosting) {
    println!("{}\n\n{}\n\nRequirements:", posting.title, posting.description);
    for requirement in posting.requirements {
        println!("  - {requirement}");
    }
}
