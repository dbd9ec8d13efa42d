//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::{API_URL_OVERRIDE, DEFAULT_API_PORT};

/// Get the base URL for API requests
///
/// Uses `AUTOSPLASH_API_URL` when it was set at build time, otherwise
/// builds the URL from the current window location on port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000" (never with a trailing slash)
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_URL_OVERRIDE.filter(|b| !b.trim().is_empty()) {
        return base.trim().trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append a `serde_qs` encoded query to `path`, leaving it untouched when
/// every field was skipped.
pub fn with_query<Q: serde::Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_customer::CustomerListQuery;
    use contracts::system::users::UserListQuery;

    #[test]
    fn test_with_query_customers() {
        let url = with_query("/api/customers", &CustomerListQuery::new(2, 10, "  ana ")).unwrap();
        assert_eq!(url, "/api/customers?page=2&limit=10&search=ana");
    }

    #[test]
    fn test_with_query_skips_blank_search() {
        let url = with_query("/api/customers", &CustomerListQuery::new(1, 10, "   ")).unwrap();
        assert_eq!(url, "/api/customers?page=1&limit=10");
    }

    #[test]
    fn test_with_query_users() {
        let url = with_query("/api/users", &UserListQuery { page: 3, limit: 20 }).unwrap();
        assert_eq!(url, "/api/users?page=3&limit=20");
    }
}
