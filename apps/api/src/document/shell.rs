//! The canonical HTML/CSS shell used to wrap incomplete model output.
//!
//! The shell is a plain template with two placeholders, `{{title}}` and `{{body}}`.
//! Wrapping is string substitution only: the fragment is inserted verbatim, never
//! parsed, escaped or repaired. A malformed fragment can break the page layout;
//! the result still renders.

use std::path::Path;

use thiserror::Error;

use crate::document::completeness::{missing_markers, Marker};
use crate::document::template::fill_placeholders;

pub const TITLE_PLACEHOLDER: &str = "{{title}}";
pub const BODY_PLACEHOLDER: &str = "{{body}}";

/// Title text used when no display name is available.
pub const FALLBACK_TITLE: &str = "Professional Resume";

const SAMPLE_TITLE: &str = "Resume - Sample";
const SAMPLE_BODY: &str = "<div>sample</div>";

/// Built-in shell: ATS-friendly black-on-white, Arial/Helvetica, A4 with print margins.
pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{title}}</title>
  <style>
    @page {
      size: A4;
      margin: 0.25in;
    }

    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: Arial, Helvetica, sans-serif;
      line-height: 1.4;
      color: #000000;
      background: #ffffff;
      font-size: 11pt;
      padding: 0.75in;
    }

    .header {
      text-align: center;
      margin-bottom: 25px;
      border-bottom: 1px solid #000000;
      padding-bottom: 15px;
    }

    h1, .header h1 {
      font-size: 18pt;
      font-weight: bold;
      color: #000000;
      margin: 0 0 8px 0;
      text-transform: uppercase;
      letter-spacing: 1px;
    }

    .contact-info {
      font-size: 10pt;
      color: #000000;
      line-height: 1.3;
    }

    .section {
      margin-bottom: 20px;
    }

    .section-title {
      font-size: 12pt;
      font-weight: bold;
      color: #000000;
      border-bottom: 1px solid #000000;
      padding-bottom: 2px;
      margin-bottom: 12px;
      text-transform: uppercase;
      letter-spacing: 0.5px;
    }

    .job-entry {
      margin-bottom: 18px;
    }

    .job-title, .degree {
      font-size: 11pt;
      font-weight: bold;
      color: #000000;
      margin-bottom: 2px;
    }

    .company-info, .school-info {
      font-size: 10pt;
      color: #333333;
      font-style: italic;
      margin-bottom: 6px;
    }

    .job-description ul {
      margin: 0 0 10px 20px;
    }

    .job-description li {
      margin-bottom: 3px;
      font-size: 10pt;
      line-height: 1.3;
      color: #000000;
    }

    .skills-list, .summary {
      font-size: 10pt;
      line-height: 1.4;
      color: #000000;
    }

    .summary {
      text-align: justify;
      margin-bottom: 8px;
    }

    .education-entry {
      margin-bottom: 12px;
    }

    p {
      margin-bottom: 6px;
      font-size: 10pt;
      line-height: 1.3;
      color: #000000;
    }

    @media print {
      body {
        font-size: 10pt;
        padding: 0.5in;
      }
      * {
        -webkit-print-color-adjust: exact !important;
        print-color-adjust: exact !important;
      }
    }
  </style>
</head>
<body>
  {{body}}
</body>
</html>
"#;

#[derive(Debug, Error)]
pub enum ShellTemplateError {
    #[error("shell template is missing the {0} placeholder")]
    MissingPlaceholder(&'static str),

    #[error("shell template must contain exactly one body placeholder, found {0}")]
    BodyPlaceholderCount(usize),

    #[error("shell template is not a complete document, missing: {0}")]
    Incomplete(String),

    #[error("failed to read shell template: {0}")]
    Io(#[from] std::io::Error),
}

/// A validated shell. Any fragment wrapped in it satisfies the completeness check.
#[derive(Debug, Clone)]
pub struct ShellTemplate {
    source: String,
}

impl ShellTemplate {
    /// Validates and wraps a template source.
    ///
    /// Rejects templates without both placeholders, with more than one body
    /// placeholder, or that are not themselves complete documents.
    pub fn new(source: impl Into<String>) -> Result<Self, ShellTemplateError> {
        let source = source.into();

        if !source.contains(TITLE_PLACEHOLDER) {
            return Err(ShellTemplateError::MissingPlaceholder(TITLE_PLACEHOLDER));
        }
        match source.matches(BODY_PLACEHOLDER).count() {
            0 => return Err(ShellTemplateError::MissingPlaceholder(BODY_PLACEHOLDER)),
            1 => {}
            n => return Err(ShellTemplateError::BodyPlaceholderCount(n)),
        }

        // A placeholder inside a marker (`<bo{{body}}dy>`) only breaks once filled,
        // so check with empty and with sample values.
        let template = Self { source };
        for (title, body) in [("", ""), (SAMPLE_TITLE, SAMPLE_BODY)] {
            let missing = missing_markers(&template.fill(title, body));
            if !missing.is_empty() {
                let names: Vec<_> = missing.iter().map(Marker::as_str).collect();
                return Err(ShellTemplateError::Incomplete(names.join(", ")));
            }
        }

        Ok(template)
    }

    pub fn from_file(path: &Path) -> Result<Self, ShellTemplateError> {
        let source = std::fs::read_to_string(path)?;
        Self::new(source)
    }

    /// Embeds `fragment` verbatim in the body placeholder. The title is
    /// `Resume - <name>`, falling back to [`FALLBACK_TITLE`] for an absent or empty name.
    pub fn wrap(&self, fragment: &str, name: Option<&str>) -> String {
        let display = name.filter(|n| !n.is_empty()).unwrap_or(FALLBACK_TITLE);
        let title = format!("Resume - {}", escape_html(display));
        self.fill(&title, fragment)
    }

    /// Single pass: placeholder text inside the values is never expanded.
    fn fill(&self, title: &str, body: &str) -> String {
        fill_placeholders(
            &self.source,
            &[(TITLE_PLACEHOLDER, title), (BODY_PLACEHOLDER, body)],
        )
    }
}

impl Default for ShellTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_SHELL.to_string(),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::completeness::is_complete;

    #[test]
    fn test_default_shell_is_valid() {
        assert!(ShellTemplate::new(DEFAULT_SHELL).is_ok());
    }

    #[test]
    fn test_default_shell_styles() {
        assert!(DEFAULT_SHELL.contains("charset=\"UTF-8\""));
        assert!(DEFAULT_SHELL.contains("color: #000000"));
        assert!(DEFAULT_SHELL.contains("background: #ffffff"));
        assert!(DEFAULT_SHELL.contains("font-family: Arial, Helvetica, sans-serif"));
        assert!(DEFAULT_SHELL.contains(".contact-info"));
        assert!(DEFAULT_SHELL.contains(".section-title"));
        assert!(DEFAULT_SHELL.contains("@media print"));
        assert!(DEFAULT_SHELL.contains("-webkit-print-color-adjust: exact"));
    }

    #[test]
    fn test_wrap_is_complete_and_contains_fragment() {
        let shell = ShellTemplate::default();
        let fragments = ["<div>Hello</div>", "", "<p>unclosed", "plain text", "<body>"];
        for fragment in fragments {
            let doc = shell.wrap(fragment, Some("Jane Doe"));
            assert!(is_complete(&doc));
            assert!(doc.contains(fragment));
        }
    }

    #[test]
    fn test_wrap_title_uses_name() {
        let doc = ShellTemplate::default().wrap("<div>Hello</div>", Some("Jane Doe"));
        assert!(doc.contains("<title>Resume - Jane Doe</title>"));
        assert!(doc.contains("<body>\n  <div>Hello</div>\n</body>"));
    }

    #[test]
    fn test_wrap_fallback_title() {
        let shell = ShellTemplate::default();
        for name in [None, Some("")] {
            let doc = shell.wrap("", name);
            assert!(doc.contains("<title>Resume - Professional Resume</title>"));
            assert!(doc.contains("<body>\n  \n</body>"));
        }
    }

    #[test]
    fn test_wrap_escapes_name_in_title() {
        let doc = ShellTemplate::default().wrap("x", Some("<script>Ann & Co</script>"));
        assert!(doc.contains("<title>Resume - &lt;script&gt;Ann &amp; Co&lt;/script&gt;</title>"));
    }

    #[test]
    fn test_placeholders_in_values_are_not_expanded() {
        let doc = ShellTemplate::default().wrap("before {{title}} after", Some("{{body}}"));
        assert!(doc.contains("before {{title}} after"));
        assert!(doc.contains("<title>Resume - {{body}}</title>"));
    }

    #[test]
    fn test_rejects_template_without_placeholders() {
        let err = ShellTemplate::new("<!DOCTYPE html><html><head></head><body></body></html>")
            .unwrap_err();
        assert!(matches!(err, ShellTemplateError::MissingPlaceholder(TITLE_PLACEHOLDER)));

        let err = ShellTemplate::new(
            "<!DOCTYPE html><html><head>{{title}}</head><body></body></html>",
        )
        .unwrap_err();
        assert!(matches!(err, ShellTemplateError::MissingPlaceholder(BODY_PLACEHOLDER)));
    }

    #[test]
    fn test_rejects_duplicate_body_placeholder() {
        let err = ShellTemplate::new(
            "<!DOCTYPE html><html><head>{{title}}</head><body>{{body}}{{body}}</body></html>",
        )
        .unwrap_err();
        assert!(matches!(err, ShellTemplateError::BodyPlaceholderCount(2)));
    }

    #[test]
    fn test_rejects_incomplete_template() {
        let err = ShellTemplate::new("<html><head>{{title}}</head><body>{{body}}</body></html>")
            .unwrap_err();
        match err {
            ShellTemplateError::Incomplete(missing) => assert_eq!(missing, "<!doctype html>"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_placeholder_inside_marker() {
        let err = ShellTemplate::new(
            "<!DOCTYPE html><html><head><title>{{title}}</title></head><bo{{body}}dy></body></html>",
        )
        .unwrap_err();
        match err {
            ShellTemplateError::Incomplete(missing) => assert_eq!(missing, "<body>"),
            other => panic!("unexpected error: {other}"),
        }

        let err = ShellTemplate::new(
            "<!DOCTYPE html><html><he{{title}}ad></head><body>{{body}}</body></html>",
        )
        .unwrap_err();
        assert!(matches!(err, ShellTemplateError::Incomplete(_)));
    }

    #[test]
    fn test_custom_template() {
        let shell = ShellTemplate::new(
            "<!doctype html><html><head><title>{{title}}</title></head><body><main>{{body}}</main></body></html>",
        )
        .unwrap();
        let doc = shell.wrap("<p>x</p>", Some("Ann"));
        assert_eq!(
            doc,
            "<!doctype html><html><head><title>Resume - Ann</title></head><body><main><p>x</p></main></body></html>"
        );
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = ShellTemplate::from_file(Path::new("/nonexistent/shell.html")).unwrap_err();
        assert!(matches!(err, ShellTemplateError::Io(_)));
    }
}
