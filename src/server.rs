//! HTTP service — thin wrapper around the compiler core.
//!
//! Routes (mirroring the compiler's external contract):
//! - `POST /generate` — compile an instruction, persist the latest
//!   document pair under the output directory, return `{domain, problem,
//!   meta}`.
//! - `POST /solve` — forward a domain/problem pair to the remote solving
//!   service and relay its JSON verbatim.
//! - `GET /download/{filename}` — serve a previously generated file.
//!
//! The compiler core stays synchronous and stateless; only this layer is
//! async. All failures surface as JSON `{"error": ...}` with a matching
//! status code.

use std::path::PathBuf;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::compiler;

/// Public solver endpoint used when none is configured.
pub const DEFAULT_SOLVER_URL: &str = "https://solver.planning.domains/solve";

const SOLVER_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    /// Directory the latest domain/problem pair is written to.
    pub output_dir: PathBuf,
    /// Remote solving service endpoint.
    pub solver_url: String,
    client: reqwest::Client,
}

impl AppState {
    pub fn new(output_dir: PathBuf, solver_url: String) -> Self {
        Self {
            output_dir,
            solver_url,
            client: reqwest::Client::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} required")]
    MissingField(&'static str),
    #[error("solver request failed: {0}")]
    Solver(String),
    #[error("no such file: {0}")]
    NotFound(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ServiceError::MissingField(_) => StatusCode::BAD_REQUEST,
            ServiceError::Solver(_) => StatusCode::BAD_GATEWAY,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/solve", post(solve))
        .route("/download/{filename}", get(download))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&state.output_dir).await?;
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "instruction compiler service listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    instruction: Option<String>,
}

async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<compiler::Compilation>, ServiceError> {
    let instruction = match req.instruction.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ServiceError::MissingField("instruction")),
    };

    let compilation = compiler::compile(instruction);
    info!(steps = compilation.meta.steps.len(), "compiled instruction");

    // Persist the latest pair for /download
    tokio::fs::create_dir_all(&state.output_dir).await?;
    tokio::fs::write(state.output_dir.join("domain.pddl"), &compilation.domain).await?;
    tokio::fs::write(state.output_dir.join("problem.pddl"), &compilation.problem).await?;

    Ok(Json(compilation))
}

#[derive(Debug, Deserialize)]
struct SolveRequest {
    domain: Option<String>,
    problem: Option<String>,
}

async fn solve(
    State(state): State<AppState>,
    Json(req): Json<SolveRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let domain = req.domain.filter(|s| !s.is_empty());
    let problem = req.problem.filter(|s| !s.is_empty());
    let (domain, problem) = match (domain, problem) {
        (Some(d), Some(p)) => (d, p),
        _ => return Err(ServiceError::MissingField("domain and problem")),
    };

    let payload = serde_json::json!({ "domain": domain, "problem": problem });
    let response = state
        .client
        .post(&state.solver_url)
        .timeout(SOLVER_TIMEOUT)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            error!("solver unreachable: {}", e);
            ServiceError::Solver(e.to_string())
        })?;

    let response = response.error_for_status().map_err(|e| {
        error!("solver rejected request: {}", e);
        ServiceError::Solver(e.to_string())
    })?;

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ServiceError::Solver(e.to_string()))?;
    Ok(Json(body))
}

async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    if !safe_filename(&filename) {
        return Err(ServiceError::NotFound(filename));
    }

    let path = state.output_dir.join(&filename);
    let body = tokio::fs::read_to_string(&path)
        .await
        .map_err(|_| ServiceError::NotFound(filename.clone()))?;

    let disposition = format!("attachment; filename=\"{}\"", filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// Only bare filenames may be served — no separators, no parent refs.
fn safe_filename(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
