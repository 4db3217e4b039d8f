//! Resume generation: the one pipeline shared by every PDF endpoint.
//!
//! Flow: build prompt (mode selects the template) → generate → normalize → render.
//! Nothing is persisted; the artifact goes straight back to the caller.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::document::{fill_placeholders, normalize};
use crate::errors::AppError;
use crate::generation::prompts::{
    BUILD_PROMPT_TEMPLATE, CHAT_BUILD_PROMPT_TEMPLATE, REFINE_PROMPT_TEMPLATE,
};
use crate::generation::request::{GenerationRequest, Mode, PDF_MIME};
use crate::llm_client::prompts::{HTML_FORMAT_RULES, HTML_ONLY_INSTRUCTION};
use crate::llm_client::Prompt;
use crate::render::RenderedArtifact;
use crate::state::AppState;

/// Builds the model prompt for a form request. Refine attaches the source PDF.
pub fn build_prompt(request: &GenerationRequest) -> Prompt {
    match request.mode {
        Mode::Build => Prompt::text(fill_placeholders(
            BUILD_PROMPT_TEMPLATE,
            &[
                ("{format_rules}", HTML_FORMAT_RULES),
                ("{html_only}", HTML_ONLY_INSTRUCTION),
                ("{name}", request.name.as_str()),
                ("{email}", request.email.as_str()),
                ("{web_link}", request.web_link.as_str()),
                ("{linkedin}", request.linkedin.as_str()),
                ("{job_target}", request.job_target.as_str()),
                ("{job_description}", request.job_description.as_str()),
            ],
        )),
        Mode::Refine => {
            let prompt = Prompt::text(fill_placeholders(
                REFINE_PROMPT_TEMPLATE,
                &[
                    ("{format_rules}", HTML_FORMAT_RULES),
                    ("{html_only}", HTML_ONLY_INSTRUCTION),
                    ("{job_description}", request.job_description.as_str()),
                ],
            ));
            match &request.source {
                Some(source) => prompt.with_attachment(PDF_MIME, source.data.clone()),
                None => prompt,
            }
        }
    }
}

/// Builds the model prompt for a conversationally collected profile.
pub fn build_chat_prompt(profile_json: &str) -> Prompt {
    Prompt::text(fill_placeholders(
        CHAT_BUILD_PROMPT_TEMPLATE,
        &[
            ("{format_rules}", HTML_FORMAT_RULES),
            ("{html_only}", HTML_ONLY_INSTRUCTION),
            ("{profile_json}", profile_json),
        ],
    ))
}

/// Runs generate → normalize → render and names the artifact after `name`.
/// Each run is logged under its own `generation_id` span.
pub async fn generate_pdf(
    state: &AppState,
    prompt: &Prompt,
    name: Option<&str>,
) -> Result<RenderedArtifact, AppError> {
    let span = info_span!("generation", generation_id = %Uuid::new_v4());
    run_pipeline(state, prompt, name).instrument(span).await
}

async fn run_pipeline(
    state: &AppState,
    prompt: &Prompt,
    name: Option<&str>,
) -> Result<RenderedArtifact, AppError> {
    let raw = state.generator.generate(prompt).await?;
    info!("Model returned {} bytes of output", raw.len());

    let document = normalize(&raw, name, &state.shell);
    info!(
        "Normalized document: {} bytes, wrapped={}",
        document.as_str().len(),
        document.was_wrapped()
    );

    let bytes = state.renderer.render(&document).await?;
    info!("Rendered PDF: {} bytes", bytes.len());

    Ok(RenderedArtifact::new(bytes, name))
}
