//! Completeness detection. Decides whether model output can be rendered as-is.

/// The four structural markers a render-ready document must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Doctype,
    Html,
    Head,
    Body,
}

impl Marker {
    pub const ALL: [Marker; 4] = [Marker::Doctype, Marker::Html, Marker::Head, Marker::Body];

    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Doctype => "<!doctype html>",
            Marker::Html => "<html>",
            Marker::Head => "<head>",
            Marker::Body => "<body>",
        }
    }

    fn is_present_in(&self, lowered: &str) -> bool {
        match self {
            Marker::Doctype => has_doctype(lowered),
            Marker::Html => has_open_tag(lowered, "<html"),
            Marker::Head => has_open_tag(lowered, "<head"),
            Marker::Body => has_open_tag(lowered, "<body"),
        }
    }
}

/// True when all four markers are present, case-insensitively. Any missing marker
/// makes the text incomplete.
pub fn is_complete(text: &str) -> bool {
    missing_markers(text).is_empty()
}

/// Lists the markers absent from `text`, in declaration order.
pub fn missing_markers(text: &str) -> Vec<Marker> {
    let lowered = text.to_ascii_lowercase();
    Marker::ALL
        .into_iter()
        .filter(|m| !m.is_present_in(&lowered))
        .collect()
}

/// `<!doctype` followed by whitespace and `html`.
fn has_doctype(lowered: &str) -> bool {
    lowered.match_indices("<!doctype").any(|(i, m)| {
        let rest = &lowered[i + m.len()..];
        let trimmed = rest.trim_start();
        trimmed.len() < rest.len() && trimmed.starts_with("html")
    })
}

/// An opening tag counts only when the name ends there: `<head>` and `<head lang=..>`
/// match, `<header>` does not.
fn has_open_tag(lowered: &str, open: &str) -> bool {
    lowered.match_indices(open).any(|(i, m)| {
        match lowered[i + m.len()..].chars().next() {
            Some(c) => c == '>' || c == '/' || c.is_whitespace(),
            None => false,
        }
    })
}
