// HTML Completion Normalizer
// Turns raw model output into a render-ready document: strip fences, detect
// completeness, wrap incomplete output in the canonical shell.
// Everything here is pure and total. No function in this module can fail.

pub mod completeness;
pub mod fences;
pub mod filename;
pub mod shell;
pub mod template;

use tracing::debug;

pub use completeness::is_complete;
pub use fences::strip_fences;
pub use filename::attachment_filename;
pub use shell::ShellTemplate;
pub use template::fill_placeholders;

/// A document that satisfies [`is_complete`]. Only produced by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    html: String,
    wrapped: bool,
}

impl NormalizedDocument {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Whether the shell was applied (the model output was a fragment).
    pub fn was_wrapped(&self) -> bool {
        self.wrapped
    }
}

/// Strips fences from `raw`; passes complete documents through unchanged and wraps
/// anything else in `shell`, titled with `name`.
pub fn normalize(raw: &str, name: Option<&str>, shell: &ShellTemplate) -> NormalizedDocument {
    let stripped = strip_fences(raw);

    if is_complete(stripped) {
        debug!("Model output is a complete document ({} bytes)", stripped.len());
        return NormalizedDocument {
            html: stripped.to_string(),
            wrapped: false,
        };
    }

    debug!(
        "Model output is missing {:?}, wrapping {} bytes in shell",
        completeness::missing_markers(stripped),
        stripped.len()
    );
    NormalizedDocument {
        html: shell.wrap(stripped, name),
        wrapped: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::filename::sanitize_filename;

    #[test]
    fn test_fenced_complete_document_passes_through() {
        let raw = "```html\n<!DOCTYPE html><html><head></head><body>Hi</body></html>\n```";
        let doc = normalize(raw, Some("Jane Doe"), &ShellTemplate::default());

        assert!(!doc.was_wrapped());
        assert_eq!(
            doc.as_str(),
            "<!DOCTYPE html><html><head></head><body>Hi</body></html>"
        );
    }

    #[test]
    fn test_fragment_is_wrapped_with_name() {
        let doc = normalize("<div>Hello</div>", Some("Jane Doe"), &ShellTemplate::default());

        assert!(doc.was_wrapped());
        assert!(is_complete(doc.as_str()));
        assert!(doc.as_str().contains("<title>Resume - Jane Doe</title>"));
        assert!(doc.as_str().contains("<div>Hello</div>"));
    }

    #[test]
    fn test_empty_output_without_name() {
        let doc = normalize("", None, &ShellTemplate::default());

        assert!(doc.was_wrapped());
        assert!(is_complete(doc.as_str()));
        assert!(doc.as_str().contains("<title>Resume - Professional Resume</title>"));
        assert!(doc.as_str().contains("<body>\n  \n</body>"));
        assert_eq!(sanitize_filename(None), "resume");
    }

    #[test]
    fn test_partial_document_is_wrapped_verbatim() {
        let raw = "```html\n<body><h1>Only body</h1></body>\n```";
        let doc = normalize(raw, None, &ShellTemplate::default());

        assert!(doc.was_wrapped());
        assert!(doc.as_str().contains("<body><h1>Only body</h1></body>"));
    }

    #[test]
    fn test_normalize_is_stable() {
        let shell = ShellTemplate::default();
        let first = normalize("<p>x</p>", Some("A"), &shell);
        let second = normalize(first.as_str(), Some("A"), &shell);

        assert!(!second.was_wrapped());
        assert_eq!(first.as_str().trim(), second.as_str());
    }
}
