//! Query-string forwarding.

/// Appends a raw query string to a URL.
///
/// Joins with `&` when the URL already has a `?`, otherwise with `?`.
/// An empty query string leaves the URL untouched.
///
/// # Examples
///
/// ```
/// use smartlink::render::append_query_string;
///
/// assert_eq!(
///     append_query_string("https://example.com/app?ref=x", "utm=foo"),
///     "https://example.com/app?ref=x&utm=foo"
/// );
/// assert_eq!(append_query_string("myapp://open", "id=7"), "myapp://open?id=7");
/// assert_eq!(append_query_string("https://example.com", ""), "https://example.com");
/// ```
pub fn append_query_string(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query)
}
