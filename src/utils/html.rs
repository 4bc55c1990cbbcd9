//! HTML escaping for rendered tags.

use std::borrow::Cow;

/// Characters that require escaping inside a double-quoted attribute.
const ATTR_CHARS: [char; 4] = ['<', '>', '&', '"'];

/// Escape an attribute value for use inside `"..."`.
///
/// Borrows when nothing needs escaping.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(ATTR_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
