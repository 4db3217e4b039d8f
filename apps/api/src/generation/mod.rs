// Resume generation: request parsing, prompts, and the shared
// prompt → generate → normalize → render pipeline.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod request;
