//! Backend address resolution.
//!
//! The backend origin comes from the compile-time `BACKEND_BASE_URL`
//! variable. Debug builds always talk to `/api` and rely on the Trunk dev
//! proxy; release builds call `<BACKEND_BASE_URL>/api` directly.

pub const API_PREFIX: &str = "/api";

/// Fixed timeout applied to every request.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Backend origin baked in at build time, if any.
pub fn backend_origin() -> Option<&'static str> {
    option_env!("BACKEND_BASE_URL")
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Computes the API base for the given backend origin and build flavour.
pub fn resolve_api_base(backend: Option<&str>, dev: bool) -> String {
    match backend {
        Some(origin) if !dev => format!("{}{}", origin.trim_end_matches('/'), API_PREFIX),
        _ => API_PREFIX.to_string(),
    }
}

/// API base for the current build.
pub fn api_base() -> String {
    resolve_api_base(backend_origin(), cfg!(debug_assertions))
}

/// Joins a base and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Absolute URL of an uploaded asset such as a student photo.
pub fn asset_url(relative: &str) -> String {
    asset_url_with(backend_origin(), relative)
}

pub fn asset_url_with(origin: Option<&str>, relative: &str) -> String {
    if relative.starts_with("http://") || relative.starts_with("https://") {
        return relative.to_string();
    }
    let encoded = relative
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    match origin {
        Some(origin) => join_url(origin, &encoded),
        None => format!("/{encoded}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_builds_always_use_proxy_prefix() {
        assert_eq!(resolve_api_base(Some("https://school.example"), true), "/api");
        assert_eq!(resolve_api_base(None, true), "/api");
    }

    #[test]
    fn release_builds_use_backend_origin() {
        assert_eq!(
            resolve_api_base(Some("https://school.example/"), false),
            "https://school.example/api"
        );
        assert_eq!(resolve_api_base(None, false), "/api");
    }

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("/api/", "/stream/getstreamnames"), "/api/stream/getstreamnames");
        assert_eq!(join_url("/api", "student/addstudent"), "/api/student/addstudent");
    }

    #[test]
    fn asset_urls_encode_segments() {
        assert_eq!(
            asset_url_with(Some("https://school.example"), "uploads/students/amina w.jpg"),
            "https://school.example/uploads/students/amina%20w.jpg"
        );
        assert_eq!(asset_url_with(None, "/uploads/logo.png"), "/uploads/logo.png");
        assert_eq!(
            asset_url_with(Some("https://cdn"), "https://other/x.png"),
            "https://other/x.png"
        );
    }
}
