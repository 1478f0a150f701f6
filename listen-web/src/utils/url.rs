//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL
///
/// Reads `window.location.search` directly, so it works before the router is
/// mounted.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    find_query_param(&search, key)
}

/// Look up `key` in a raw query string, with or without the leading `?`
///
/// A key without `=` yields an empty value. Values are URL-decoded, and a
/// value that fails to decode is returned as-is.
pub fn find_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    query_string.split('&').find_map(|pair| {
        let (param_key, param_value) = pair.split_once('=').unwrap_or((pair, ""));
        (param_key == key).then(|| {
            urlencoding::decode(param_value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| param_value.to_string())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_query_param() {
        assert_eq!(
            find_query_param("?viewport=mobile&x=1", "viewport").as_deref(),
            Some("mobile")
        );
        assert_eq!(find_query_param("x=1&viewport=desktop", "viewport").as_deref(), Some("desktop"));
        assert_eq!(find_query_param("?x=1", "viewport"), None);
        assert_eq!(find_query_param("", "viewport"), None);
    }

    #[test]
    fn test_find_query_param_decodes() {
        assert_eq!(
            find_query_param("?viewport=very%2Dsmall", "viewport").as_deref(),
            Some("very-small")
        );
    }

    #[test]
    fn test_find_query_param_without_value() {
        assert_eq!(find_query_param("?debug&x=1", "debug").as_deref(), Some(""));
    }
}
