//! HTTP route handlers for the API.

use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tandem_common::{AgentResult, Plan};
use tandem_coordinator::RunMode;
use tracing::{error, info};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Query request body.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub content: String,
    /// Pipeline selection; falls back to the configured default
    #[serde(default)]
    pub mode: Option<RunMode>,
}

/// Query response body. Plan and steps are empty in simple mode.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub id: String,
    pub mode: RunMode,
    pub plan: Plan,
    pub steps: Vec<AgentResult>,
    pub output: String,
    pub duration_ms: u64,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    #[serde(skip)]
    pub status: StatusCode,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Run a query through the selected pipeline.
pub async fn run_query(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ErrorResponse> {
    let config = state.coordinator.config();

    if request.content.len() > config.max_query_len {
        return Err(ErrorResponse {
            error: format!(
                "Query exceeds maximum length of {} bytes",
                config.max_query_len
            ),
            code: "QUERY_TOO_LONG",
            status: StatusCode::BAD_REQUEST,
        });
    }

    let mode = request.mode.unwrap_or(config.default_mode);

    info!(
        ?mode,
        content_preview = %request.content.chars().take(50).collect::<String>(),
        "Received query"
    );

    match mode {
        RunMode::Multi => {
            let report = state.coordinator.run(&request.content).await.map_err(|e| {
                error!(error = %e, "Pipeline run failed");
                ErrorResponse {
                    error: format!("Pipeline run failed: {}", e),
                    code: "PIPELINE_ERROR",
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                }
            })?;

            Ok(Json(QueryResponse {
                id: report.run_id,
                mode,
                plan: report.plan,
                steps: report.steps,
                output: report.output,
                duration_ms: report.duration_ms,
            }))
        }
        RunMode::Simple => {
            let started = std::time::Instant::now();
            let output = state.simple.respond(&request.content);

            Ok(Json(QueryResponse {
                id: format!("simple_{}", uuid::Uuid::new_v4()),
                mode,
                plan: Plan::new(Vec::new()),
                steps: Vec::new(),
                output,
                duration_ms: started.elapsed().as_millis() as u64,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            version: "0.1.0",
            uptime_seconds: 100,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("uptime_seconds"));
    }

    #[test]
    fn test_query_request_deserialization() {
        let json = r#"{"content": "Hello world"}"#;
        let request: QueryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.content, "Hello world");
        assert!(request.mode.is_none());
    }

    #[test]
    fn test_query_request_with_mode() {
        let json = r#"{"content": "Hello", "mode": "simple"}"#;
        let request: QueryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.mode, Some(RunMode::Simple));
    }

    #[test]
    fn test_error_response_skips_status() {
        let err = ErrorResponse {
            error: "bad".into(),
            code: "QUERY_TOO_LONG",
            status: StatusCode::BAD_REQUEST,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("QUERY_TOO_LONG"));
        assert!(!json.contains("400"));
    }
}
