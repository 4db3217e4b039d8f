//! Axum route handlers for the Generation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::chat::models::ExtractedProfile;
use crate::errors::AppError;
use crate::generation::generator::{build_chat_prompt, build_prompt, generate_pdf};
use crate::generation::request::GenerationRequest;
use crate::render::RenderedArtifact;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildFromChatRequest {
    #[serde(default)]
    pub extracted_data: ExtractedProfile,
}

/// POST /refine-pdf
///
/// Multipart form. `mode=build` writes a resume from the form fields,
/// `mode=refine` rewrites the uploaded `resume` PDF against the job description.
pub async fn handle_refine_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<RenderedArtifact, AppError> {
    let request = GenerationRequest::from_multipart(multipart, state.config.max_upload_bytes).await?;
    info!(
        "Generating resume: mode={:?}, name given={}",
        request.mode,
        request.display_name().is_some()
    );

    if let Some(source) = &request.source {
        source.ensure_readable().await?;
    }

    let prompt = build_prompt(&request);
    generate_pdf(&state, &prompt, request.display_name()).await
}

/// POST /build-from-chat
///
/// Builds a resume from the profile collected by the chat assistant.
pub async fn handle_build_from_chat(
    State(state): State<AppState>,
    Json(request): Json<BuildFromChatRequest>,
) -> Result<RenderedArtifact, AppError> {
    let profile = request.extracted_data;
    let profile_json = serde_json::to_string_pretty(&profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;
    info!("Building resume from chat profile ({} bytes)", profile_json.len());

    let prompt = build_chat_prompt(&profile_json);
    generate_pdf(&state, &prompt, profile.display_name()).await
}
