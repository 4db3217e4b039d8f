use std::sync::Arc;

use crate::config::Config;
use crate::document::ShellTemplate;
use crate::llm_client::ContentGenerator;
use crate::render::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; swapped for fakes in router tests.
    pub generator: Arc<dyn ContentGenerator>,
    /// Headless Chromium in production.
    pub renderer: Arc<dyn PdfRenderer>,
    pub shell: Arc<ShellTemplate>,
    pub config: Arc<Config>,
}
