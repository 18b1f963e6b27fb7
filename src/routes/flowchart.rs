//! Flowchart generation routes.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::task::JoinError;

use crate::flowchart::{self, samples};
use crate::state::AppState;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Documentation text is required")]
    MissingDocumentation,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Failed to generate flowchart")]
    Generation(#[from] JoinError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingDocumentation => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            tracing::debug!(error = %rejection, "rejecting malformed request body");
            Self::MissingDocumentation
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Generation(err) = &self {
            tracing::error!(error = %err, "flowchart generation failed");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub mermaid_code: String,
}

/// `POST /api/generate-flowchart`: compile `{ documentation }` to Mermaid.
///
/// The body is taken as raw JSON so a missing or non-string `documentation`
/// maps to 400 instead of the extractor's 422.
pub async fn generate_flowchart(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(body) = payload?;
    let documentation = documentation_from(&body)?.to_owned();
    let options = state.render;
    let lines = documentation.lines().count();

    let (nodes, edges, mermaid_code) = tokio::task::spawn_blocking(move || {
        let chart = flowchart::parse(&documentation);
        let code = flowchart::render(&chart, &options);
        (chart.nodes().count(), chart.edges().count(), code)
    })
    .await?;

    tracing::info!(lines, nodes, edges, "flowchart generated");
    Ok(Json(GenerateResponse { mermaid_code }))
}

/// `GET /api/flowchart/samples`: built-in example documents.
pub async fn list_samples() -> Json<&'static [samples::Sample]> {
    Json(samples::SAMPLES)
}

/// Extract a non-empty `documentation` string from a request body.
pub(crate) fn documentation_from(body: &Value) -> Result<&str, ApiError> {
    body.get("documentation")
        .and_then(Value::as_str)
        .filter(|doc| !doc.is_empty())
        .ok_or(ApiError::MissingDocumentation)
}

#[cfg(test)]
#[path = "flowchart_test.rs"]
mod tests;
