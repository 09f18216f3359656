//! API utilities for frontend-backend communication
//!
//! The catalog is served by the same host that serves the page, so request
//! URLs are resolved against the current window origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Page origin like "http://localhost:5000"
/// - Empty string if window is not available (the path then stays relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/get_product_data");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Joins a base URL and a path. Absolute URLs in `path` are returned unchanged.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000", "/get_product_data"),
            "http://localhost:5000/get_product_data"
        );
        assert_eq!(
            join_url("http://localhost:5000/", "get_product_data"),
            "http://localhost:5000/get_product_data"
        );
    }

    #[test]
    fn test_join_url_without_base_stays_relative() {
        assert_eq!(join_url("", "/get_product_data"), "/get_product_data");
    }

    #[test]
    fn test_join_url_keeps_absolute_path() {
        assert_eq!(
            join_url("http://localhost:5000", "https://catalog.example.com/data"),
            "https://catalog.example.com/data"
        );
    }
}
