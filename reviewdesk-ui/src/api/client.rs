//! HTTP API Client
//!
//! Functions for communicating with the reviews REST API from the browser.
//! Response bodies go through the core normalization boundary, and failures
//! are reported as the core [`ClientError`].

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::Value;

use reviewdesk::client::{endpoints, normalize_base_url, DEFAULT_API_BASE};
use reviewdesk::normalize::{unwrap_collection, unwrap_one};
use reviewdesk::{
    Analytics, ClientError, ClientResult, OverallStats, Property, PropertyStats, Review,
    ReviewQuery, ReviewUpdate,
};

const API_URL_KEY: &str = "reviewdesk_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base_url(&url)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(API_URL_KEY, &normalize_base_url(url));
    }
}

/// Forget the stored override
pub fn reset_api_base() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(API_URL_KEY);
    }
}

fn url(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

fn network_error(e: gloo_net::Error) -> ClientError {
    ClientError::network(e.to_string())
}

async fn get_value(path: &str) -> ClientResult<Value> {
    let response = Request::get(&url(path))
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(network_error)?;

    read_body(response).await
}

async fn patch_value<B: Serialize>(path: &str, body: &B) -> ClientResult<Value> {
    let response = Request::patch(&url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ClientError::Decode(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    read_body(response).await
}

async fn read_body(response: Response) -> ClientResult<Value> {
    let text = response.text().await.map_err(network_error)?;

    if !response.ok() {
        return Err(ClientError::from_response(
            response.status(),
            &response.status_text(),
            &text,
        ));
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
}

fn optional(result: ClientResult<Value>) -> ClientResult<Option<Value>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

// ============ API Functions ============

/// Reviews matching the query
pub async fn fetch_reviews(query: &ReviewQuery) -> ClientResult<Vec<Review>> {
    let body = get_value(&endpoints::reviews(query)).await?;
    Ok(unwrap_collection(body))
}

/// Overwrite a review's status
pub async fn update_review(id: &str, update: &ReviewUpdate) -> ClientResult<Review> {
    let body = patch_value(&endpoints::review(id), update).await?;
    unwrap_one(body).ok_or_else(|| ClientError::Decode(format!("review {} missing from response", id)))
}

pub async fn fetch_analytics() -> ClientResult<Analytics> {
    let body = get_value(&endpoints::analytics()).await?;
    Ok(unwrap_one(body).unwrap_or_default())
}

pub async fn fetch_overall_stats() -> ClientResult<OverallStats> {
    let body = get_value(&endpoints::overall_stats()).await?;
    Ok(unwrap_one(body).unwrap_or_default())
}

/// `Ok(None)` when the property does not exist
pub async fn fetch_property(id: &str) -> ClientResult<Option<Property>> {
    let body = optional(get_value(&endpoints::property(id)).await)?;
    Ok(body.and_then(unwrap_one))
}

pub async fn fetch_property_reviews(id: &str) -> ClientResult<Vec<Review>> {
    let body = get_value(&endpoints::property_reviews(id)).await?;
    Ok(unwrap_collection(body))
}

pub async fn fetch_property_stats(id: &str) -> ClientResult<Option<PropertyStats>> {
    let body = optional(get_value(&endpoints::property_stats_for(id)).await)?;
    Ok(body.and_then(unwrap_one))
}

/// Check that the configured backend answers
pub async fn check_connection() -> bool {
    get_value(&endpoints::overall_stats()).await.is_ok()
}
