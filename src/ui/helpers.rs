//! Shared rendering utilities.

use std::borrow::Cow;

/// Escapes text for insertion into HTML element content or quoted attributes.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. Text without any of them is borrowed.
///
/// # Example
///
/// ```rust
/// use jobboard::ui::helpers::escape_html;
///
/// assert_eq!(escape_html("<b>Tom & Jerry's</b>"), "&lt;b&gt;Tom &amp; Jerry&#039;s&lt;/b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Escapes `text` into an owned `String`.
#[must_use]
pub fn escaped(text: &str) -> String {
    escape_html(text).into_owned()
}
