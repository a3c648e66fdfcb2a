//! URL helpers for building backend endpoint URLs.
//!
//! The backend base URL comes from config or the command line and may carry
//! a trailing slash; these helpers keep endpoint joins free of doubled
//! slashes.

/// Normalize a base URL by removing trailing slashes.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Join a backend base URL and an endpoint path.
///
/// # Examples
///
/// ```
/// use vitrine::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:5000/", "chat/history"),
///     "http://localhost:5000/chat/history"
/// );
/// assert_eq!(
///     construct_api_url("http://localhost:5000", "/api/gemini"),
///     "http://localhost:5000/api/gemini"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalized_base, endpoint)
}
