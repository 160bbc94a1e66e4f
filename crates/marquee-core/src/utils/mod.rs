//! Small shared helpers used across the family's plugins.

/// Restricts a free-form label to characters valid in an HTML class
/// attribute token: ASCII letters, digits, hyphen and underscore.
/// Everything else is stripped, which may leave the result empty.
pub fn sanitize_html_class(class: &str) -> String {
    class
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests;
