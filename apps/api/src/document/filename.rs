/// Token used when no display name is available.
pub const DEFAULT_FILENAME: &str = "resume";

const FILLER: char = '_';

/// Maps a display name to a filesystem-safe token: every character outside ASCII
/// `[A-Za-z0-9]` becomes `_`. Absent or empty names yield [`DEFAULT_FILENAME`].
pub fn sanitize_filename(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { FILLER })
            .collect(),
        _ => DEFAULT_FILENAME.to_string(),
    }
}

/// `<token>.pdf`, ready for a `Content-Disposition` header.
pub fn attachment_filename(name: Option<&str>) -> String {
    format!("{}.pdf", sanitize_filename(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_use_default() {
        assert_eq!(sanitize_filename(Some("")), DEFAULT_FILENAME);
        assert_eq!(sanitize_filename(None), DEFAULT_FILENAME);
    }

    #[test]
    fn test_replaces_punctuation_and_spaces() {
        assert_eq!(sanitize_filename(Some("Ann O'Brien!")), "Ann_O_Brien_");
    }

    #[test]
    fn test_preserves_letters_and_digits() {
        assert_eq!(sanitize_filename(Some("Agent007")), "Agent007");
    }

    #[test]
    fn test_non_ascii_becomes_filler() {
        assert_eq!(sanitize_filename(Some("José")), "Jos_");
        assert_eq!(sanitize_filename(Some("a/../b")), "a____b");
    }

    #[test]
    fn test_whitespace_only_is_not_empty() {
        assert_eq!(sanitize_filename(Some("  ")), "__");
    }

    #[test]
    fn test_attachment_filename() {
        assert_eq!(attachment_filename(Some("Jane Doe")), "Jane_Doe.pdf");
        assert_eq!(attachment_filename(None), "resume.pdf");
    }
}
