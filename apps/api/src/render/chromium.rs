//! Headless Chromium backend.
//!
//! Each render launches a fresh browser in its own temp directory (HTML in, PDF out,
//! throwaway profile) and tears it down afterwards. No pooling. The launch is
//! bounded by a wall-clock timeout; the child is killed if the future is dropped.
//!
//! The command line has no paper or margin options, so page geometry is injected
//! into every document as a print stylesheet before it is written out.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::document::NormalizedDocument;
use crate::render::{PdfRenderer, RenderError};

const PDF_MAGIC: &[u8] = b"%PDF-";
/// Upper bound on stderr carried into `RenderError::Failed`.
const STDERR_LIMIT: usize = 2048;
/// A4 with 0.25in margins and printed backgrounds, whatever the document declares.
const PRINT_STYLE: &str = "<style>\n@page { size: A4; margin: 0.25in; }\n\
* { -webkit-print-color-adjust: exact; print-color-adjust: exact; }\n</style>\n";

/// Virtual time Chromium waits for fonts and styles before printing.
const VIRTUAL_TIME_BUDGET_MS: u32 = 5000;

#[derive(Debug, Clone)]
pub struct ChromiumRenderer {
    binary: String,
    timeout: Duration,
}

impl ChromiumRenderer {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    fn args(&self, input: &Path, output: &Path, profile: &Path) -> Vec<String> {
        vec![
            "--headless".to_string(),
            "--no-sandbox".to_string(),
            "--disable-setuid-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
            "--disable-gpu".to_string(),
            "--no-pdf-header-footer".to_string(),
            "--print-to-pdf-no-header".to_string(),
            "--run-all-compositor-stages-before-draw".to_string(),
            format!("--virtual-time-budget={VIRTUAL_TIME_BUDGET_MS}"),
            format!("--user-data-dir={}", profile.display()),
            format!("--print-to-pdf={}", output.display()),
            format!("file://{}", input.display()),
        ]
    }
}

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render(&self, document: &NormalizedDocument) -> Result<Vec<u8>, RenderError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("resume.html");
        let output = workdir.path().join("resume.pdf");
        let profile = workdir.path().join("profile");

        tokio::fs::write(&input, with_print_style(document.as_str())).await?;

        let mut command = Command::new(&self.binary);
        command
            .args(self.args(&input, &output, &profile))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("Launching {} for {} bytes of HTML", self.binary, document.as_str().len());

        let result = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                warn!("Rendering exceeded {:?}, killing browser", self.timeout);
                RenderError::Timeout(self.timeout)
            })?
            .map_err(|source| RenderError::Launch {
                binary: self.binary.clone(),
                source,
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let stderr: String = stderr.chars().take(STDERR_LIMIT).collect();
            return Err(RenderError::Failed {
                status: result.status.code(),
                stderr,
            });
        }

        let pdf = tokio::fs::read(&output).await?;
        if !pdf.starts_with(PDF_MAGIC) {
            return Err(RenderError::InvalidOutput(pdf.len()));
        }

        debug!("Rendered {} bytes of PDF", pdf.len());
        Ok(pdf)
    }
}

/// Inserts [`PRINT_STYLE`] last in `<head>`, so it wins over the document's own
/// `@page` rules. Falls back to just before `<body`, then to the very start.
fn with_print_style(html: &str) -> String {
    let lowered = html.to_ascii_lowercase();
    let at = lowered
        .find("</head>")
        .or_else(|| lowered.find("<body"))
        .unwrap_or(0);

    let mut out = String::with_capacity(html.len() + PRINT_STYLE.len());
    out.push_str(&html[..at]);
    out.push_str(PRINT_STYLE);
    out.push_str(&html[at..]);
    out
}
