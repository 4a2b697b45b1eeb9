//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and resolving media paths.

use contracts::domain::common::EntityKey;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Get the base URL for API requests
///
/// Taken from the `API_URL` environment variable at compile time.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/admissions/{}/", api_base(), slug);
/// ```
pub fn api_base() -> String {
    option_env!("API_URL")
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path starting with `/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Absolute URL of a stored file
pub fn media_url(path: &str) -> String {
    resolve_media(&api_base(), path)
}

/// Absolute URLs are kept; relative paths are prefixed with the server
/// origin (the API base without its `/api` suffix).
pub fn resolve_media(api_base: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let trimmed = api_base.trim_end_matches('/');
    let origin = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    if path.starts_with('/') {
        format!("{}{}", origin, path)
    } else {
        format!("{}/{}", origin, path)
    }
}

// ============================================================================
// REST paths of a collection
// ============================================================================

pub fn list_path(collection: &str, page: usize, page_size: usize) -> String {
    format!("/{}/?page={}&page_size={}", collection, page, page_size)
}

pub fn detail_path(collection: &str, key: &EntityKey) -> String {
    format!("/{}/{}/", collection, urlencoding::encode(key.as_str()))
}

pub fn create_path(collection: &str) -> String {
    format!("/{}/create/", collection)
}

pub fn update_path(collection: &str, key: &EntityKey) -> String {
    format!("/{}/{}/update/", collection, urlencoding::encode(key.as_str()))
}

pub fn delete_path(collection: &str, key: &EntityKey) -> String {
    format!("/{}/{}/delete/", collection, urlencoding::encode(key.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_media() {
        let base = "http://127.0.0.1:8000/api";
        assert_eq!(
            resolve_media(base, "/media/school/logos/a.png"),
            "http://127.0.0.1:8000/media/school/logos/a.png"
        );
        assert_eq!(
            resolve_media(base, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(resolve_media(base, ""), "");
        assert_eq!(
            resolve_media("https://api.example.com/api/", "media/x.jpg"),
            "https://api.example.com/media/x.jpg"
        );
    }

    #[test]
    fn test_collection_paths() {
        let key = EntityKey::slug("fall-intake");
        assert_eq!(list_path("admissions", 2, 12), "/admissions/?page=2&page_size=12");
        assert_eq!(detail_path("admissions", &key), "/admissions/fall-intake/");
        assert_eq!(create_path("admissions"), "/admissions/create/");
        assert_eq!(update_path("admissions", &key), "/admissions/fall-intake/update/");
        assert_eq!(
            delete_path("advertisements", &EntityKey::id("5")),
            "/advertisements/5/delete/"
        );
    }

    #[test]
    fn test_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }
}
