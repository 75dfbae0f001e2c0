//! HTTP request handlers for the service.
//!
//! Implements the recompute endpoint and health check using axum.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use reqtrace_domain::{BrdRecord, TaskRecord, TraceGraph};
use reqtrace_graph::TraceGraphBuilder;
use reqtrace_verifier::{CitationReport, CitationVerifier};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Graph pipeline, shared across requests
    pub builder: Arc<TraceGraphBuilder>,

    /// Citation verifier, shared across requests
    pub verifier: Arc<CitationVerifier>,
}

/// Recompute request: the BRD record and its task list, as fetched from the
/// store by the caller
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceRequest {
    /// The BRD record; absent means the caller's fetch came back empty
    pub brd: Option<BrdRecord>,

    /// Tasks derived from the BRD
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

/// Query options for the recompute endpoint
#[derive(Debug, Deserialize)]
pub struct TraceQuery {
    /// Re-run citation verification before building the graph
    #[serde(default)]
    pub verify: bool,
}

/// Recompute response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceResponse {
    /// Run identifier for log correlation
    pub run_id: String,

    /// The rebuilt traceability snapshot
    pub graph: TraceGraph,

    /// Verification report, present when `?verify=true`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<CitationReport>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The request carried no BRD record
    MissingBrd,

    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingBrd => (
                StatusCode::BAD_REQUEST,
                "BRD record is missing; cannot build a traceability graph".to_string(),
            ),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /trace - Rebuild the traceability graph for one BRD
///
/// The graph is derived, never stored; every call recomputes it from the
/// records in the request body. With `?verify=true` the citations are
/// re-checked against the raw source content first, so the summary's
/// unverified count reflects the current text.
async fn recompute_trace(
    State(state): State<AppState>,
    Query(query): Query<TraceQuery>,
    Json(request): Json<TraceRequest>,
) -> Result<Json<TraceResponse>, AppError> {
    let run_id = Uuid::now_v7().to_string();

    let mut brd = request.brd.ok_or(AppError::MissingBrd)?;

    let citations = if query.verify {
        Some(state.verifier.verify(&mut brd))
    } else {
        None
    };

    let graph = state.builder.build(&brd, &request.tasks);

    info!(
        run_id = %run_id,
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        verified = query.verify,
        "recomputed traceability graph"
    );

    Ok(Json(TraceResponse {
        run_id,
        graph,
        citations,
    }))
}

/// GET /health - Liveness probe
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/trace", post(recompute_trace))
        .route("/health", get(health_check))
        .with_state(state)
}
