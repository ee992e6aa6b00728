//! Path normalization.

/// Normalize a raw path string into its canonical routing key.
///
/// Leading and trailing ASCII spaces are trimmed, an empty result becomes
/// `"/"`, and a trailing `/` is appended when missing. The canonical form is
/// what the routing table keys on, so `"/hello"`, `"/hello/"` and
/// `"  /hello  "` all map to the same route.
///
/// This function is total: it never fails, and it is idempotent.
///
/// # Examples
///
/// ```
/// use tinymux_rs::normalize_path;
///
/// assert_eq!(normalize_path("/hello"), "/hello/");
/// assert_eq!(normalize_path("  /hello  "), "/hello/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim_matches(' ');

    if trimmed.is_empty() {
        return "/".to_string();
    }

    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
