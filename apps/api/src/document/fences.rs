//! Markdown fence stripping for model replies.
//!
//! Models routinely wrap HTML (and JSON) in ```` ```html ... ``` ```` blocks even
//! when told not to. `strip_fences` peels those wrappers off the ends of the reply.
//! Fences in the middle of the text are left alone.

const FENCE: &str = "```";

/// Removes leading ```` ```lang ```` and trailing ```` ``` ```` markers, then trims.
///
/// Repeats until nothing changes, so `strip_fences(strip_fences(s)) == strip_fences(s)`.
/// Text without fence markers comes back as `text.trim()`.
pub fn strip_fences(text: &str) -> &str {
    let mut current = text.trim();
    loop {
        let mut next = current;
        if let Some(rest) = strip_leading_fence(next) {
            next = rest.trim();
        }
        if let Some(rest) = next.strip_suffix(FENCE) {
            next = rest.trim();
        }
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

/// Strips one opening fence and, where it is clearly a language tag, the tag after it.
///
/// A tag is consumed when it is `html` (any case) or is the only thing on the
/// fence line. Otherwise only the backticks go, so ```` ```Hello world```` keeps `Hello`.
fn strip_leading_fence(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FENCE)?;
    let tag_len = rest
        .char_indices()
        .find(|(_, c)| !is_tag_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    if tag_len == 0 {
        return Some(rest);
    }

    let (tag, after) = rest.split_at(tag_len);
    let line_ends = {
        let tail = after.trim_start_matches([' ', '\t']);
        tail.is_empty() || tail.starts_with('\n') || tail.starts_with('\r')
    };

    if tag.eq_ignore_ascii_case("html") || line_ends {
        Some(after)
    } else {
        Some(rest)
    }
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.')
}
