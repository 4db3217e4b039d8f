// PDF rendering: NormalizedDocument → PDF bytes.
// The renderer is a trait seam held in AppState as Arc<dyn PdfRenderer>;
// the production backend drives a headless Chromium per request.

pub mod chromium;

use std::time::Duration;

use async_trait::async_trait;
use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::document::{attachment_filename, NormalizedDocument};

pub use chromium::ChromiumRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch browser '{binary}': {source}")]
    Launch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("browser exited with status {status:?}: {stderr}")]
    Failed { status: Option<i32>, stderr: String },

    #[error("rendering timed out after {0:?}")]
    Timeout(Duration),

    #[error("browser output is not a PDF ({0} bytes)")]
    InvalidOutput(usize),
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, document: &NormalizedDocument) -> Result<Vec<u8>, RenderError>;
}

/// Rendered PDF plus the filename suggested to the client.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl RenderedArtifact {
    pub fn new(bytes: Vec<u8>, name: Option<&str>) -> Self {
        Self {
            bytes,
            filename: attachment_filename(name),
        }
    }
}

impl IntoResponse for RenderedArtifact {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}
