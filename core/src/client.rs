//! Stateless request builder and response interpreter for a REST collection.
//!
//! # Design
//! `ResourceClient` holds only the collection URL and carries no mutable
//! state between calls. Each operation has a `build_*` method producing an
//! `HttpRequest`; every response goes through the single `parse_response`,
//! since all operations interpret their result the same way.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Query parameter the remote API uses to cap the collection size.
pub const LIMIT_PARAM: &str = "_limit";

/// Synchronous, stateless client for one REST collection.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    collection_url: String,
}

impl ResourceClient {
    pub fn new(collection_url: &str) -> Self {
        Self {
            collection_url: collection_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET the collection. The limit is only forwarded; the server truncates.
    pub fn build_fetch_collection(&self, limit: Option<u32>) -> HttpRequest {
        let url = match limit {
            Some(n) => format!("{}?{LIMIT_PARAM}={n}", self.collection_url),
            None => self.collection_url.clone(),
        };
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_fetch_resource(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.resource_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_resource<T>(&self, payload: &T) -> Result<HttpRequest, ApiError>
    where
        T: Serialize + ?Sized,
    {
        json_request(HttpMethod::Post, self.collection_url.clone(), payload)
    }

    pub fn build_replace_resource<T>(&self, id: u64, payload: &T) -> Result<HttpRequest, ApiError>
    where
        T: Serialize + ?Sized,
    {
        json_request(HttpMethod::Put, self.resource_url(id), payload)
    }

    pub fn build_delete_resource(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.resource_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Interpret a response for any operation.
    ///
    /// Non-2xx statuses fail without looking at the body. An empty 2xx body
    /// (e.g. `204 No Content` after a delete) reads as `{}`.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if !response.is_success() {
            return Err(ApiError::HttpStatus {
                status: response.status,
            });
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization {
            status: response.status,
            message: e.to_string(),
        })
    }

    fn resource_url(&self, id: u64) -> String {
        format!("{}/{id}", self.collection_url)
    }
}

fn json_request<T>(method: HttpMethod, url: String, payload: &T) -> Result<HttpRequest, ApiError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}
