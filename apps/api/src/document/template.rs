//! Placeholder substitution shared by the resume shell and the model prompts.

/// Replaces every placeholder in `template` with its value in one left-to-right pass.
///
/// Substituted values are copied to the output and never scanned again, so text in a
/// value that looks like a placeholder stays literal. When two placeholders start at
/// the same position the one listed first wins.
pub fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    loop {
        let next = values
            .iter()
            .filter(|(placeholder, _)| !placeholder.is_empty())
            .filter_map(|&(placeholder, value)| {
                rest.find(placeholder).map(|i| (i, placeholder, value))
            })
            .min_by_key(|(i, _, _)| *i);

        match next {
            Some((i, placeholder, value)) => {
                out.push_str(&rest[..i]);
                out.push_str(value);
                rest = &rest[i + placeholder.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}
