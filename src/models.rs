use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_RESULTS, MAX_RESULTS_CAP};
use crate::errors::GatewayError;

#[derive(Debug, Clone, Serialize)]
pub struct ImageDescriptor {
    pub id: String,
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderQuery {
    pub folder: String,
    pub max_results: u32,
    pub cursor: Option<String>,
}

impl FolderQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, GatewayError> {
        let folder = params.get("folder").map(String::as_str).unwrap_or("").trim();
        if folder.is_empty() {
            return Err(GatewayError::MissingFolder);
        }
        // An unparseable max falls back to the default rather than erroring.
        let max_results = params
            .get("max")
            .and_then(|max| max.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_RESULTS)
            .clamp(1, MAX_RESULTS_CAP);
        let cursor = params.get("cursor").filter(|c| !c.is_empty()).cloned();
        Ok(Self {
            folder: folder.to_string(),
            max_results,
            cursor,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageListResult {
    pub folder: String,
    pub count: usize,
    pub images: Vec<ImageDescriptor>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

impl ImageListResult {
    pub fn new(folder: String, images: Vec<ImageDescriptor>, next_cursor: Option<String>) -> Self {
        Self {
            folder,
            count: images.len(),
            has_more: next_cursor.is_some(),
            images,
            next_cursor,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub public_key: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub timestamp: String,
    pub cloudinary_configured: bool,
}

// Wire types for the Cloudinary search API.

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub expression: String,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub resources: Vec<SearchResource>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResource {
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}
