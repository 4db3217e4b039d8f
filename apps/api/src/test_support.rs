//! Fakes for the generator and renderer seams, shared by handler and pipeline tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::Config;
use crate::document::{NormalizedDocument, ShellTemplate};
use crate::llm_client::{ContentGenerator, LlmError, Prompt};
use crate::render::{PdfRenderer, RenderError};
use crate::state::AppState;

/// Prefix the fake renderer puts in front of the HTML it was given.
const FAKE_PDF_PREFIX: &str = "%PDF-fake\n";

/// Replies with a canned string (or fails) and records every prompt it sees.
#[derive(Clone)]
pub struct FakeGenerator {
    reply: Option<String>,
    prompts: Arc<Mutex<Vec<Prompt>>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(&self, prompt: &Prompt) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        })
    }
}

/// "Renders" by echoing the HTML behind a PDF magic prefix, so tests can see
/// exactly what reached the browser.
pub struct FakeRenderer;

#[async_trait]
impl PdfRenderer for FakeRenderer {
    async fn render(&self, document: &NormalizedDocument) -> Result<Vec<u8>, RenderError> {
        Ok(format!("{FAKE_PDF_PREFIX}{}", document.as_str()).into_bytes())
    }
}

pub struct FailingRenderer;

#[async_trait]
impl PdfRenderer for FailingRenderer {
    async fn render(&self, _document: &NormalizedDocument) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Timeout(Duration::from_secs(30)))
    }
}

/// Recovers the HTML handed to [`FakeRenderer`].
pub fn rendered_html(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes)
        .unwrap()
        .strip_prefix(FAKE_PDF_PREFIX)
        .unwrap()
}

pub fn test_config() -> Config {
    Config {
        gemini_api_key: "test-key".to_string(),
        port: 4000,
        rust_log: "debug".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        chrome_bin: "chromium".to_string(),
        render_timeout: Duration::from_secs(30),
        max_upload_bytes: 1024 * 1024,
        shell_template_path: None,
    }
}

pub fn test_state(generator: FakeGenerator) -> AppState {
    test_state_with_renderer(generator, Arc::new(FakeRenderer))
}

pub fn test_state_with_renderer(
    generator: FakeGenerator,
    renderer: Arc<dyn PdfRenderer>,
) -> AppState {
    AppState {
        generator: Arc::new(generator),
        renderer,
        shell: Arc::new(ShellTemplate::default()),
        config: Arc::new(test_config()),
    }
}

/// A small but well-formed single-page PDF showing `text` in Helvetica.
pub fn minimal_pdf(text: &str) -> Bytes {
    let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));

    Bytes::from(pdf)
}
