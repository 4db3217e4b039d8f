// Chat assistant: conversational profile extraction and question generation.
// The collected profile feeds POST /build-from-chat in the generation module.

pub mod assistant;
pub mod handlers;
pub mod models;
pub mod prompts;
