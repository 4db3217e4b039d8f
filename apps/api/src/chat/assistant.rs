//! Conversational resume assistant. Pulls profile facts out of chat messages and
//! picks the next question to ask.

use serde_json::Value;
use tracing::{debug, warn};

use crate::chat::models::{ExtractedProfile, NextQuestion};
use crate::chat::prompts::{EXTRACT_PROMPT_TEMPLATE, NEXT_QUESTION_PROMPT_TEMPLATE};
use crate::document::{fill_placeholders, strip_fences};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{generate_json, ContentGenerator, LlmError, Prompt};

/// Only the tail of the conversation goes into the question prompt.
const RECENT_TURNS: usize = 3;
const QUESTION_TEMPERATURE: f32 = 0.7;
const QUESTION_MAX_TOKENS: u32 = 300;

/// Result of an extraction call. A reply that is not valid profile JSON is an
/// expected outcome, not an error.
#[derive(Debug)]
pub enum ExtractionOutcome {
    Extracted(ExtractedProfile),
    Unparseable,
}

pub fn build_extract_prompt(message: &str, current: &ExtractedProfile) -> Prompt {
    Prompt::text(fill_placeholders(
        EXTRACT_PROMPT_TEMPLATE,
        &[
            ("{json_only}", JSON_ONLY_INSTRUCTION),
            ("{current_data}", pretty(current).as_str()),
            ("{message}", message),
        ],
    ))
}

pub fn build_next_question_prompt(current: &ExtractedProfile, history: &[Value]) -> Prompt {
    let recent = &history[history.len().saturating_sub(RECENT_TURNS)..];
    Prompt::text(fill_placeholders(
        NEXT_QUESTION_PROMPT_TEMPLATE,
        &[
            ("{current_data}", pretty(current).as_str()),
            ("{recent_conversation}", pretty(recent).as_str()),
        ],
    ))
    .with_temperature(QUESTION_TEMPERATURE)
    .with_max_output_tokens(QUESTION_MAX_TOKENS)
}

/// Extracts only the new information in `message`.
pub async fn extract_info(
    generator: &dyn ContentGenerator,
    message: &str,
    current: &ExtractedProfile,
) -> Result<ExtractionOutcome, LlmError> {
    let prompt = build_extract_prompt(message, current);
    match generate_json::<ExtractedProfile>(generator, &prompt).await {
        Ok(profile) => {
            debug!("Extracted profile data: {:?}", profile);
            Ok(ExtractionOutcome::Extracted(profile))
        }
        Err(LlmError::Parse(e)) => {
            warn!("Could not parse extracted data: {e}");
            Ok(ExtractionOutcome::Unparseable)
        }
        Err(e) => Err(e),
    }
}

/// Asks the model for the next question. A prose reply is used as the question text.
pub async fn next_question(
    generator: &dyn ContentGenerator,
    current: &ExtractedProfile,
    history: &[Value],
) -> Result<NextQuestion, LlmError> {
    let prompt = build_next_question_prompt(current, history);
    let reply = generator.generate(&prompt).await?;

    match serde_json::from_str::<NextQuestion>(strip_fences(&reply)) {
        Ok(question) => Ok(question),
        Err(e) => {
            debug!("Next-question reply is not JSON ({e}), using it verbatim");
            Ok(NextQuestion::from_plain_reply(&reply))
        }
    }
}

fn pretty<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
