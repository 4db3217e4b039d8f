//! Generation requests: form fields, operating mode and the uploaded source PDF.

use std::collections::HashMap;

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use pdf_extract::OutputError;
use tracing::{debug, warn};

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";
const RESUME_FIELD: &str = "resume";
const INVALID_MODE_MESSAGE: &str = "Invalid mode or missing data.";

/// Selects the prompt template. Everything after the prompt is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write a resume from the typed fields.
    Build,
    /// Tailor an uploaded resume to the job description.
    Refine,
}

impl Mode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "build" => Some(Mode::Build),
            "refine" => Some(Mode::Refine),
            _ => None,
        }
    }
}

/// An uploaded resume. Only constructed from bytes that look like a PDF.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub data: Bytes,
}

impl SourceDocument {
    /// Accepts `application/pdf` uploads, or any upload whose bytes start with `%PDF-`.
    pub fn new(data: Bytes, content_type: Option<&str>) -> Result<Self, AppError> {
        let declared_pdf = content_type
            .map(|ct| ct.to_ascii_lowercase().contains(PDF_MIME))
            .unwrap_or(false);

        if !declared_pdf && !data.starts_with(PDF_MAGIC) {
            return Err(AppError::UnprocessableEntity(
                "Uploaded resume must be a PDF".to_string(),
            ));
        }
        Ok(Self { data })
    }

    /// Checks the PDF loads before it is sent to the model.
    ///
    /// Only a structural load failure rejects the upload. Text extraction problems
    /// (exotic fonts, pdf-extract panics) are logged and the document is kept, since
    /// the model reads the PDF itself.
    pub async fn ensure_readable(&self) -> Result<(), AppError> {
        let data = self.data.clone();
        let outcome = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await;

        match outcome {
            Ok(Ok(text)) => {
                debug!("Source PDF has {} characters of text", text.chars().count());
                Ok(())
            }
            Ok(Err(OutputError::PdfError(e))) => {
                warn!("Rejecting unreadable source PDF: {e}");
                Err(AppError::UnprocessableEntity(
                    "Uploaded resume could not be read as a PDF".to_string(),
                ))
            }
            Ok(Err(e)) => {
                warn!("Text extraction failed on source PDF, sending it anyway: {e}");
                Ok(())
            }
            Err(e) => {
                warn!("Text extraction panicked on source PDF, sending it anyway: {e}");
                Ok(())
            }
        }
    }
}

/// A validated `/refine-pdf` request. `Refine` always carries a source document;
/// `Build` never does.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub name: String,
    pub email: String,
    pub web_link: String,
    pub linkedin: String,
    pub job_target: String,
    pub job_description: String,
    pub mode: Mode,
    pub source: Option<SourceDocument>,
}

impl GenerationRequest {
    /// Enforces the mode invariant. Unknown mode, or `refine` without an upload,
    /// is a validation error.
    pub fn from_fields(
        mut fields: HashMap<String, String>,
        source: Option<SourceDocument>,
    ) -> Result<Self, AppError> {
        let mode = fields
            .get("mode")
            .and_then(|m| Mode::parse(m))
            .ok_or_else(|| AppError::Validation(INVALID_MODE_MESSAGE.to_string()))?;

        let source = match (mode, source) {
            (Mode::Refine, Some(doc)) => Some(doc),
            (Mode::Refine, None) => {
                return Err(AppError::Validation(INVALID_MODE_MESSAGE.to_string()))
            }
            (Mode::Build, Some(_)) => {
                debug!("Ignoring uploaded resume in build mode");
                None
            }
            (Mode::Build, None) => None,
        };

        let mut take = |key: &str| fields.remove(key).unwrap_or_default();

        Ok(Self {
            name: take("name"),
            email: take("email"),
            web_link: take("web_link"),
            linkedin: take("linkedin"),
            job_target: take("jobTarget"),
            job_description: take("jobDescription"),
            mode,
            source,
        })
    }

    /// Reads the multipart form. Text fields are collected by name; the `resume`
    /// file field becomes the source document. An empty file input counts as no upload.
    pub async fn from_multipart(
        mut multipart: Multipart,
        max_upload_bytes: usize,
    ) -> Result<Self, AppError> {
        let mut fields = HashMap::new();
        let mut source = None;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let field_name = field.name().unwrap_or_default().to_string();

            if field_name == RESUME_FIELD {
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                if data.len() > max_upload_bytes {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Uploaded resume exceeds {max_upload_bytes} bytes"
                    )));
                }
                if !data.is_empty() {
                    source = Some(SourceDocument::new(data, content_type.as_deref())?);
                }
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                fields.insert(field_name, value);
            }
        }

        Self::from_fields(fields, source)
    }

    /// The subject name, if one was given.
    pub fn display_name(&self) -> Option<&str> {
        Some(self.name.as_str()).filter(|n| !n.is_empty())
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}
