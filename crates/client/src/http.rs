//! Generic request function shared by every endpoint wrapper.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use shared_types::{ApiError, ClientError};
use std::fmt;
use tracing::{debug, warn};

use crate::config::client_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// HTTP client bound to one API origin.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_config()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client for the configured base URL.
    pub fn from_config() -> Self {
        Self::new(client_config().api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue one request and normalize the outcome.
    ///
    /// 2xx with status 204 or a non-JSON content type yields `{}`. Non-2xx
    /// becomes [`ClientError::Api`]; no response at all becomes
    /// [`ClientError::Transport`].
    pub async fn call(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<Value, ClientError> {
        debug!(%method, path, authenticated = token.is_some(), "api call");

        let mut request = self
            .http
            .request(method.into(), self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, path, error = %e, "api call failed before a response");
            ClientError::transport(e.to_string())
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(%method, path, status = status.as_u16(), error = %e, "failed to read error body");
                    String::new()
                }
            };
            let err = ApiError::from_response(status.as_u16(), is_json, &text);
            warn!(%method, path, status = err.status_code, message = %err.message, "api call rejected");
            return Err(err.into());
        }

        if status == StatusCode::NO_CONTENT || !is_json {
            return Ok(Value::Object(Map::new()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| {
            warn!(%method, path, error = %e, "api call returned malformed JSON");
            ClientError::invalid_response(format!("Malformed JSON response: {e}"))
        })
    }

    /// [`call`](Self::call) and decode the body into `T`.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<T, ClientError> {
        let value = self.call(path, method, body, token).await?;
        decode(value)
    }
}

/// Decode a JSON value, mapping shape mismatches to `InvalidResponse`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value)
        .map_err(|e| ClientError::invalid_response(format!("Unexpected response shape: {e}")))
}

/// Encode a request body.
pub fn encode<T: Serialize>(body: &T) -> Result<Value, ClientError> {
    serde_json::to_value(body)
        .map_err(|e| ClientError::invalid_response(format!("Could not encode request: {e}")))
}

/// Append `pairs` as a percent-encoded query string. Empty values are omitted.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Equipment;

    #[test]
    fn url_joins_with_single_slash() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.url("/lending/overdue"), "http://127.0.0.1:8000/lending/overdue");
        assert_eq!(client.url("users/login"), "http://127.0.0.1:8000/users/login");
    }

    #[test]
    fn query_is_percent_encoded_and_skips_empty() {
        let path = with_query(
            "/equipment/",
            &[
                ("search_term", "3D printer & tools".to_string()),
                ("category_id", String::new()),
            ],
        );
        assert_eq!(path, "/equipment/?search_term=3D%20printer%20%26%20tools");
        assert_eq!(with_query("/equipment/", &[]), "/equipment/");
    }

    #[test]
    fn decode_shape_mismatch_is_invalid_response() {
        let err = decode::<Vec<Equipment>>(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { .. }));
    }

    #[test]
    fn method_names() {
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(Method::from(HttpMethod::Delete), Method::DELETE);
    }
}
