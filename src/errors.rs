use std::fmt;

use hyper::StatusCode;
use serde_json::{json, Value};

use crate::config::KNOWN_PATHS;

#[derive(Debug)]
pub enum GatewayError {
    MissingFolder,
    ConfigMissing(Vec<&'static str>),
    Upstream { status: u16, details: Value },
    Timeout,
    Unreachable(String),
    Parse(String),
    NotFound { path: String, method: String },
    InvalidUri(String),
    Http(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFolder => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> Value {
        match self {
            Self::MissingFolder => json!({ "error": "Missing folder" }),
            Self::ConfigMissing(missing) => json!({
                "error": "Cloudinary configuration missing",
                "missing": missing,
            }),
            Self::Upstream { details, .. } => json!({
                "error": "Cloudinary API error",
                "details": details,
            }),
            Self::Timeout => json!({ "error": "Request timeout" }),
            Self::Unreachable(details) => json!({
                "error": "Failed to fetch from Cloudinary",
                "details": details,
            }),
            Self::Parse(details) => json!({
                "error": "Failed to parse Cloudinary response",
                "details": details,
            }),
            Self::NotFound { path, method } => json!({
                "error": "Not found",
                "path": path,
                "method": method,
                "known_paths": KNOWN_PATHS,
            }),
            Self::InvalidUri(_) | Self::Http(_) => json!({ "error": "Internal server error" }),
        }
    }

    // True for failures of the outbound call itself, the only ones the
    // fallback policy is allowed to mask.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::Timeout | Self::Unreachable(_) | Self::Parse(_)
        )
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingFolder => write!(f, "Missing folder"),
            Self::ConfigMissing(missing) => {
                write!(f, "Cloudinary configuration missing: {}", missing.join(", "))
            }
            Self::Upstream { status, .. } => write!(f, "Cloudinary API error: HTTP {}", status),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Unreachable(e) => write!(f, "Failed to fetch from Cloudinary: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse Cloudinary response: {}", e),
            Self::NotFound { path, method } => write!(f, "No route for {} {}", method, path),
            Self::InvalidUri(e) => write!(f, "Invalid URI: {}", e),
            Self::Http(e) => write!(f, "HTTP Error: {}", e),
        }
    }
}

impl warp::reject::Reject for GatewayError {}
