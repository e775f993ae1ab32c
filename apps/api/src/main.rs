mod applications;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod storage;
mod store;
mod summaries;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::S3ResumeStore;
use crate::store::PgIntakeStore;
use crate::summaries::summarizer::{ExtractiveSummarizer, JdSummarizer, LlmSummarizer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting careers API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize S3 / MinIO
    let resumes = S3ResumeStore::from_config(&config).await;
    info!("S3 client initialized (bucket: {})", config.s3_bucket);

    // JD summarizer: LLM-backed only when a key is configured
    let summarizer: Arc<dyn JdSummarizer> = match &config.anthropic_api_key {
        Some(key) => {
            info!("JD summaries via LLM (model: {})", llm_client::MODEL);
            Arc::new(LlmSummarizer(LlmClient::new(key.clone())?))
        }
        None => {
            info!("ANTHROPIC_API_KEY not set, JD summaries are extractive");
            Arc::new(ExtractiveSummarizer)
        }
    };

    let state = AppState {
        store: Arc::new(PgIntakeStore::new(db)),
        resumes: Arc::new(resumes),
        summarizer,
        config: config.clone(),
    };

    // The careers front end is served from a different origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
