//! Canonical list-item formatting.

/// Bullet character produced by normalization.
pub const BULLET: char = '•';

/// Prefix every formatted line starts with.
pub const LIST_PREFIX: &str = "- ";

/// Rewrite a content line as a Markdown list item.
///
/// A leading `•` is replaced rather than kept, so `"• Led team"` becomes
/// `"- Led team"`.
pub fn format_list_item(line: &str) -> String {
    match line.strip_prefix(BULLET) {
        Some(rest) => format!("{}{}", LIST_PREFIX, rest.trim()),
        None => format!("{}{}", LIST_PREFIX, line),
    }
}

/// Reduce a raw or formatted line to the text used for duplicate checks.
///
/// Strips one leading list prefix or bullet. Only `-` and `•` are known
/// markers; other bullet glyphs are compared verbatim.
pub fn comparison_key(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(LIST_PREFIX) {
        rest.trim()
    } else if let Some(rest) = line.strip_prefix(BULLET) {
        rest.trim()
    } else {
        line
    }
}
