//! URL utility functions for building query strings

/// Append `pairs` to `url` as a percent-encoded query string.
///
/// Keeps any existing query and moves a `#fragment` to the end.
pub fn append_query(url: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return url.to_string();
    }

    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    match fragment {
        Some(fragment) => format!("{}{}{}#{}", base, separator, query, fragment),
        None => format!("{}{}{}", base, separator, query),
    }
}
