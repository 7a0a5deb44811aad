//! JSON-over-HTTP plumbing for Tagmarks.
//!
//! Thin wrapper around `reqwest`: JSON request/response bodies, no-cache
//! headers, 204-No-Content handling, and mapping of non-2xx statuses to
//! [`ApiError::Status`]. Retry policy is not implemented here; callers
//! classify via [`ApiError::is_retryable`].

use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::types::errors::ApiError;

/// HTTP client bound to a backend base URL.
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    /// Creates a client for the given base URL with a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Network(format!("Invalid base URL: {}", e)))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::from)?;
        Ok(Self { http, base_url })
    }

    /// Builds an endpoint URL from path segments, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::Network("Base URL cannot have segments".to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = self
            .request::<T, ()>(Method::GET, url, query, None)
            .await?;
        body.ok_or_else(|| ApiError::Decode("Expected a response body, got none".to_string()))
    }

    /// POST with a JSON body. The response body, if any, is decoded as `T`.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        self.request(Method::POST, url, &[], Some(body)).await
    }

    /// PUT with a JSON body. Any response body is ignored.
    pub async fn put_json<B: Serialize>(&self, url: Url, body: &B) -> Result<(), ApiError> {
        self.request::<serde_json::Value, B>(Method::PUT, url, &[], Some(body))
            .await?;
        Ok(())
    }

    /// DELETE. Any response body is ignored.
    pub async fn delete(&self, url: Url) -> Result<(), ApiError> {
        self.request::<serde_json::Value, ()>(Method::DELETE, url, &[], None)
            .await?;
        Ok(())
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError> {
        let mut req = self
            .http
            .request(method, url)
            .header("Cache-Control", "no-cache");

        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await.map_err(ApiError::from)?;

        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown").to_string(),
            ));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = res.bytes().await.map_err(ApiError::from)?;
        if bytes.is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response body: {}", e)))?;
        Ok(Some(value))
    }
}
