/// HTML escaping for user-supplied text
///
/// Free-text fields (user names, review text, thing titles) are escaped
/// before they are returned in API responses so injected markup renders
/// inert. Escaping happens at serialization time; the database keeps the
/// raw value.

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use thingful_shared::sanitize::escape_html;
///
/// let input = "<script>alert('XSS')</script>";
/// let escaped = escape_html(input);
/// assert_eq!(escaped, "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
