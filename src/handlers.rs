use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Body, Response, StatusCode};
use serde::Serialize;
use serde_json::json;
use warp::path::FullPath;
use warp::Rejection;

use crate::config::{AppConfig, FailurePolicy};
use crate::errors::GatewayError;
use crate::middleware::{add_cors_headers, add_preflight_headers};
use crate::models::{ConfigResponse, FolderQuery, HealthResponse};
use crate::services::{self, HttpsClient};


pub fn json_reply<T: Serialize>(status: StatusCode, body: &T) -> Response<Body> {
    let payload = serde_json::to_vec(body).unwrap_or_else(|_| b"{}".to_vec());
    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    add_cors_headers(response.headers_mut());
    response
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn preflight() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    add_preflight_headers(response.headers_mut());
    response
}

pub fn health(config: Arc<AppConfig>) -> Response<Body> {
    json_reply(
        StatusCode::OK,
        &HealthResponse {
            ok: true,
            timestamp: now_iso(),
            cloudinary_configured: config.credentials().is_ok(),
        },
    )
}

pub fn emailjs_config(config: Arc<AppConfig>) -> Response<Body> {
    json_reply(
        StatusCode::OK,
        &ConfigResponse {
            public_key: config.emailjs_public_key.clone(),
            timestamp: now_iso(),
        },
    )
}

pub async fn list_images(
    params: HashMap<String, String>,
    config: Arc<AppConfig>,
    client: HttpsClient,
) -> Result<Response<Body>, Rejection> {
    let query = FolderQuery::from_params(&params).map_err(warp::reject::custom)?;
    tracing::info!(folder = %query.folder, max = query.max_results, "listing images");

    match services::search_images(&client, &config, &query).await {
        Ok(listing) => Ok(json_reply(StatusCode::OK, &listing)),
        Err(err)
            if config.on_upstream_failure == FailurePolicy::Fallback
                && err.is_upstream_failure() =>
        {
            tracing::warn!(error = %err, folder = %query.folder, "upstream failed, serving sample listing");
            Ok(json_reply(
                StatusCode::OK,
                &services::sample_listing(&query.folder),
            ))
        }
        Err(err) => {
            tracing::error!(error = %err, folder = %query.folder, "image listing failed");
            Err(warp::reject::custom(err))
        }
    }
}

// Terminal branch of the route tree: rejects with full request context so the
// recovery handler can name the unmatched path.
pub async fn reject_not_found(
    method: hyper::Method,
    path: FullPath,
) -> Result<Response<Body>, Rejection> {
    Err(warp::reject::custom(GatewayError::NotFound {
        path: path.as_str().to_string(),
        method: method.to_string(),
    }))
}

pub async fn handle_rejection(err: Rejection) -> Result<Response<Body>, Infallible> {
    if let Some(gateway_err) = err.find::<GatewayError>() {
        return Ok(json_reply(gateway_err.status(), &gateway_err.body()));
    }
    if err.is_not_found() {
        return Ok(json_reply(
            StatusCode::NOT_FOUND,
            &json!({ "error": "Not found" }),
        ));
    }
    tracing::error!(?err, "unhandled rejection");
    Ok(json_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        &json!({ "error": "Internal server error" }),
    ))
}
