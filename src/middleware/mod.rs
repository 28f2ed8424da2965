use hyper::{HeaderMap, header::{HeaderName, HeaderValue}};


pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Requested-With";
pub const PREFLIGHT_MAX_AGE: &str = "86400"; // one day

pub fn add_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-methods"),
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

pub fn add_preflight_headers(headers: &mut HeaderMap) {
    add_cors_headers(headers);
    headers.insert(
        HeaderName::from_static("access-control-max-age"),
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
}
