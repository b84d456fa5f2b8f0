//! Quoting rules for string literals.
//!
//! Persisted filters depend on the exact escaping order: backslashes are
//! escaped before single quotes when quoting, and any `\X` pair collapses to
//! `X` when unquoting.

/// Wrap `value` in single quotes, escaping backslashes and then quotes.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Strip the surrounding quotes (single or double) and unescape the body.
///
/// Text that is not wrapped in a matching pair of quotes is only unescaped.
pub fn unquote(text: &str) -> String {
    let body = ['\'', '"']
        .into_iter()
        .find_map(|q| {
            text.strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(text);
    unescape(body)
}

/// Collapse every `\X` sequence to `X`.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            // A trailing lone backslash is kept as-is
            result.push(chars.next().unwrap_or('\\'));
        } else {
            result.push(ch);
        }
    }

    result
}
