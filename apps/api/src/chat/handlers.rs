//! Axum route handlers for the chat assistant.
//!
//! These endpoints answer in the `{"success": .., "data": ..}` envelope the chat UI
//! reads. Transport failures still go through `AppError`, except the next-question
//! endpoint, which always hands the UI a fallback question to show.

use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::chat::assistant::{extract_info, next_question, ExtractionOutcome};
use crate::chat::models::{ExtractedProfile, NextQuestion};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractInfoRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub current_data: ExtractedProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionRequest {
    #[serde(default)]
    pub current_data: ExtractedProfile,
    #[serde(default)]
    pub conversation_history: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<NextQuestion>,
}

impl<T> ChatReply<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            fallback: None,
        }
    }

    fn failed(error: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            fallback: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /extract-info
///
/// Extracts the new profile facts in a chat message. A reply the model did not
/// format as JSON is reported with `success: false` and a 200 status.
pub async fn handle_extract_info(
    State(state): State<AppState>,
    Json(request): Json<ExtractInfoRequest>,
) -> Result<Json<ChatReply<ExtractedProfile>>, AppError> {
    let outcome = extract_info(
        state.generator.as_ref(),
        &request.message,
        &request.current_data,
    )
    .await?;

    Ok(Json(match outcome {
        ExtractionOutcome::Extracted(profile) => ChatReply::ok(profile),
        ExtractionOutcome::Unparseable => ChatReply::failed("Could not parse extracted data"),
    }))
}

/// POST /generate-next-question
///
/// On model failure responds 500 with a generic fallback question so the
/// conversation can continue.
pub async fn handle_next_question(
    State(state): State<AppState>,
    Json(request): Json<NextQuestionRequest>,
) -> Response {
    info!(
        "Generating next question ({} turns of history)",
        request.conversation_history.len()
    );

    match next_question(
        state.generator.as_ref(),
        &request.current_data,
        &request.conversation_history,
    )
    .await
    {
        Ok(question) => Json(ChatReply::ok(question)).into_response(),
        Err(e) => {
            error!("Error generating next question: {e}");
            let reply = ChatReply::<NextQuestion> {
                fallback: Some(NextQuestion::fallback()),
                ..ChatReply::failed("Failed to generate next question")
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(reply)).into_response()
        }
    }
}
