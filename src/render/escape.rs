//! Escaping for values interpolated into rendered pages.
//!
//! HTML text and attribute positions use entity escaping. Inline script
//! positions use JSON string literals; the JSON encoding is the escaping there,
//! with `<` and `>` additionally written as `\u` escapes so a value can never
//! close the surrounding `<script>` element. The JavaScript value is unchanged
//! by those extra escapes.

/// Escapes HTML special characters for text and quoted attribute contexts.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Encodes a string as a JSON string literal safe to embed in an inline script.
pub fn js_string_literal(input: &str) -> String {
    // Serializing a &str cannot fail
    let json = serde_json::to_string(input).unwrap_or_else(|_| "\"\"".to_string());
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
