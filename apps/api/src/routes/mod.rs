pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::generation::handlers as generation;
use crate::state::AppState;

/// Room for the text fields and multipart framing around the uploaded file.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/health", get(health::health_handler))
        // Resume generation
        .route(
            "/refine-pdf",
            post(generation::handle_refine_pdf).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/build-from-chat", post(generation::handle_build_from_chat))
        // Chat assistant
        .route("/extract-info", post(chat::handle_extract_info))
        .route("/generate-next-question", post(chat::handle_next_question))
        .with_state(state)
}
