//! In-process stand-in for the careers backend, used by the client and form tests.

use std::collections::BTreeMap;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

#[derive(Clone, Copy)]
pub enum BackendMode {
    /// 200 with the received field names, values and resume metadata.
    Echo,
    /// 500 on every route.
    Fail,
    /// 400 with the standard error envelope.
    Reject,
    /// `/summarizeJD` records the text and never answers; `/apply` echoes.
    SlowSummary,
    /// Every route reads the request and never answers.
    Hang,
}

pub struct TestBackend {
    pub url: String,
    /// `rawJDText` of every `/summarizeJD` call, in arrival order.
    pub summaries: mpsc::UnboundedReceiver<String>,
}

#[derive(Clone)]
struct BackendState {
    mode: BackendMode,
    summaries: mpsc::UnboundedSender<String>,
}

async fn summarize(
    State(state): State<BackendState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Some(text) = body["rawJDText"].as_str() {
        let _ = state.summaries.send(text.to_string());
    }
    match state.mode {
        BackendMode::SlowSummary | BackendMode::Hang => std::future::pending().await,
        BackendMode::Echo => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        BackendMode::Fail => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "code": "INTERNAL_ERROR", "message": "boom" } })),
        ),
        BackendMode::Reject => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "code": "VALIDATION_ERROR", "message": "rawJDText is required" } })),
        ),
    }
}

async fn apply(State(state): State<BackendState>, mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    let mut fields = Vec::new();
    let mut values = BTreeMap::new();
    let mut resume = Value::Null;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        if name == "resume" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let len = field.bytes().await.map(|b| b.len()).unwrap_or_default();
            resume = json!({ "file_name": file_name, "content_type": content_type, "len": len });
        } else {
            let value = field.text().await.unwrap_or_default();
            fields.push(name.clone());
            values.insert(name, value);
        }
    }

    match state.mode {
        BackendMode::Hang => std::future::pending().await,
        BackendMode::Echo | BackendMode::SlowSummary => (
            StatusCode::OK,
            Json(json!({ "fields": fields, "values": values, "resume": resume })),
        ),
        BackendMode::Fail => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "code": "DATABASE_ERROR", "message": "A database error occurred" } })),
        ),
        BackendMode::Reject => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "code": "VALIDATION_ERROR", "message": "email is required" } })),
        ),
    }
}

/// Serves the stand-in backend on an ephemeral localhost port.
pub async fn spawn_backend(mode: BackendMode) -> TestBackend {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = Router::new()
        .route("/summarizeJD", post(summarize))
        .route("/apply", post(apply))
        .with_state(BackendState {
            mode,
            summaries: tx,
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestBackend {
        url: format!("http://{addr}"),
        summaries: rx,
    }
}

/// A localhost URL on which nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
