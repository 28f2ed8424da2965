use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use hyper::client::HttpConnector;
use hyper::header::{AUTHORIZATION, CONTENT_TYPE};
use hyper::{Body, Client, Method, Request, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use serde_json::Value;
use tokio::time::timeout;

use crate::config::{AppConfig, Credentials, FOLDER_ALIASES, FOLDER_NAMESPACE};
use crate::errors::GatewayError;
use crate::models::{
    FolderQuery, ImageDescriptor, ImageListResult, SearchRequest, SearchResource, SearchResponse,
};

#[cfg(test)]
mod tests;

pub type HttpsClient = Client<HttpsConnector<HttpConnector>, Body>;

pub fn https_client() -> HttpsClient {
    Client::builder().build(HttpsConnector::new())
}

pub fn resolve_folder(folder: &str) -> String {
    match FOLDER_ALIASES.get(folder) {
        Some(path) => (*path).to_string(),
        None => format!("{}/{}", FOLDER_NAMESPACE, folder),
    }
}

pub async fn search_images(
    client: &HttpsClient,
    config: &AppConfig,
    query: &FolderQuery,
) -> Result<ImageListResult, GatewayError> {
    let credentials = config.credentials().map_err(GatewayError::ConfigMissing)?;
    let folder_path = resolve_folder(&query.folder);
    let response = search_request(client, config, &credentials, &folder_path, query).await?;
    tracing::info!(
        folder = %folder_path,
        resources = response.resources.len(),
        "cloudinary search succeeded"
    );
    Ok(build_listing(folder_path, credentials.cloud_name, response))
}

async fn search_request(
    client: &HttpsClient,
    config: &AppConfig,
    credentials: &Credentials<'_>,
    folder_path: &str,
    query: &FolderQuery,
) -> Result<SearchResponse, GatewayError> {
    let payload = SearchRequest {
        expression: format!("folder:{} AND resource_type:image", folder_path),
        max_results: query.max_results,
        next_cursor: query.cursor.clone(),
    };
    let body = serde_json::to_vec(&payload).map_err(|e| GatewayError::Http(e.to_string()))?;

    let uri: Uri = format!(
        "{}/v1_1/{}/resources/search",
        config.api_base, credentials.cloud_name
    )
    .parse()
    .map_err(|e: hyper::http::uri::InvalidUri| GatewayError::InvalidUri(e.to_string()))?;

    let auth = BASE64.encode(format!("{}:{}", credentials.api_key, credentials.api_secret));
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Basic {}", auth))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .map_err(|e| GatewayError::Http(e.to_string()))?;

    let response = match timeout(config.request_timeout, client.request(request)).await {
        Ok(result) => result.map_err(|e| GatewayError::Unreachable(e.to_string()))?,
        Err(_) => return Err(GatewayError::Timeout),
    };

    let status = response.status();
    let bytes: Bytes = hyper::body::to_bytes(response.into_body())
        .await
        .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

    if status != StatusCode::OK {
        // Pass the upstream body through verbatim, parsed when it is JSON.
        let details = serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        return Err(GatewayError::Upstream {
            status: status.as_u16(),
            details,
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| GatewayError::Parse(e.to_string()))
}

pub fn build_listing(
    folder_path: String,
    cloud_name: &str,
    response: SearchResponse,
) -> ImageListResult {
    let images: Vec<ImageDescriptor> = response
        .resources
        .iter()
        .filter_map(|resource| normalize_resource(cloud_name, resource))
        .collect();
    ImageListResult::new(folder_path, images, response.next_cursor)
}

pub fn normalize_resource(cloud_name: &str, resource: &SearchResource) -> Option<ImageDescriptor> {
    if resource.public_id.is_empty() {
        return None;
    }
    let url = resource
        .secure_url
        .clone()
        .or_else(|| resource.url.clone())
        .or_else(|| {
            resource.format.as_ref().map(|format| {
                format!(
                    "https://res.cloudinary.com/{}/image/upload/{}.{}",
                    cloud_name, resource.public_id, format
                )
            })
        })?;
    Some(ImageDescriptor {
        id: resource.public_id.clone(),
        alt: alt_text(&resource.public_id),
        url,
        width: resource.width,
        height: resource.height,
    })
}

fn alt_text(public_id: &str) -> String {
    public_id
        .rsplit('/')
        .next()
        .unwrap_or(public_id)
        .replace(['-', '_'], " ")
}

const SAMPLE_IMAGE_IDS: [&str; 3] = ["sample-1", "sample-2", "sample-3"];

// Fixed stand-in listing served only under FailurePolicy::Fallback.
pub fn sample_listing(folder: &str) -> ImageListResult {
    let folder_path = resolve_folder(folder);
    let images = SAMPLE_IMAGE_IDS
        .iter()
        .map(|name| {
            let public_id = format!("{}/{}", folder_path, name);
            ImageDescriptor {
                url: format!(
                    "https://res.cloudinary.com/demo/image/upload/{}.jpg",
                    public_id
                ),
                alt: alt_text(&public_id),
                id: public_id,
                width: None,
                height: None,
            }
        })
        .collect();
    ImageListResult::new(folder_path, images, None)
}
