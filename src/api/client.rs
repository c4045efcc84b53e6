//! Authenticated JSON client over an injected [`HttpClient`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{Endpoint, Method};
use crate::error::{ApiError, ApiResult};
use crate::models::ApiResponse;
use crate::traits::{Headers, HttpClient, Response, TokenStore};

/// Sends [`Endpoint`]s and unwraps the response envelope.
///
/// The access token is read from the [`TokenStore`] on every authorized
/// call, so a login that completes later is picked up without rebuilding
/// the client.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    token_store: Arc<dyn TokenStore>,
    base_url: String,
}

impl ApiClient {
    pub fn new(
        http: Arc<dyn HttpClient>,
        token_store: Arc<dyn TokenStore>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token_store,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.token_store
    }

    /// Absolute URL for `endpoint`, query string included.
    pub fn url_for(&self, endpoint: &Endpoint) -> ApiResult<String> {
        let raw = format!("{}{}", self.base_url, endpoint.path);
        if endpoint.query.is_empty() {
            return Ok(raw);
        }

        let params = endpoint.query.iter().map(|(k, v)| (*k, v.as_str()));
        reqwest::Url::parse_with_params(&raw, params)
            .map(String::from)
            .map_err(|e| ApiError::Network {
                message: format!("Invalid URL {}: {}", raw, e),
            })
    }

    async fn headers_for(&self, endpoint: &Endpoint) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if endpoint.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        if endpoint.authorized {
            match self.token_store.get().await {
                Ok(Some(token)) => {
                    headers.insert("Authorization".to_string(), format!("Bearer {}", token));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, path = %endpoint.path, "Could not read access token, sending without it");
                }
            }
        }

        headers
    }

    /// Send `endpoint`, failing on transport errors and non-2xx statuses.
    pub async fn send(&self, endpoint: &Endpoint) -> ApiResult<Response> {
        let url = self.url_for(endpoint)?;
        let headers = self.headers_for(endpoint).await;
        let body = endpoint
            .body
            .as_ref()
            .map(|b| b.to_string())
            .unwrap_or_default();

        debug!(method = %endpoint.method, url = %url, "Sending request");

        let response = match endpoint.method {
            Method::Get => self.http.get(&url, &headers).await,
            Method::Post => self.http.post(&url, &body, &headers).await,
            Method::Put => self.http.put(&url, &body, &headers).await,
            Method::Patch => self.http.patch(&url, &body, &headers).await,
            Method::Delete => self.http.delete(&url, &headers).await,
        }
        .map_err(|e| {
            warn!(method = %endpoint.method, url = %url, error = %e, "Request failed");
            ApiError::from(e)
        })?;

        if !response.is_success() {
            let message = response
                .json::<ApiResponse<serde_json::Value>>()
                .ok()
                .and_then(|envelope| envelope.error_message())
                .or_else(|| response.text().ok().filter(|text| !text.is_empty()))
                .unwrap_or_else(|| format!("HTTP {}", response.status));
            warn!(
                method = %endpoint.method,
                url = %url,
                status = response.status,
                message = %message,
                "Server rejected request"
            );
            return Err(ApiError::Server {
                status: response.status,
                message,
            });
        }

        Ok(response)
    }

    /// Send `endpoint` and discard the body.
    pub async fn execute(&self, endpoint: &Endpoint) -> ApiResult<()> {
        self.send(endpoint).await.map(|_| ())
    }

    async fn envelope<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        operation: &'static str,
    ) -> ApiResult<ApiResponse<T>> {
        let response = self.send(endpoint).await?;
        response.json::<ApiResponse<T>>().map_err(|e| {
            warn!(operation, error = %e, "Response did not match the expected shape");
            ApiError::decode(operation, e)
        })
    }

    /// Decode the envelope and return its `data`, which may be absent.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        operation: &'static str,
    ) -> ApiResult<Option<T>> {
        let envelope = self.envelope::<T>(endpoint, operation).await?;
        if envelope.data.is_none() {
            debug!(operation, result = %envelope.result, "Envelope carried no data");
        }
        Ok(envelope.data)
    }

    /// Decode the envelope, failing with [`ApiError::EmptyResult`] when
    /// `data` is absent.
    pub async fn fetch_required<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        operation: &'static str,
    ) -> ApiResult<T> {
        let envelope = self.envelope::<T>(endpoint, operation).await?;
        let message = envelope.error_message();
        envelope
            .data
            .ok_or(ApiError::EmptyResult { operation, message })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
