//! Job board API client
//!
//! Every outbound call goes through [`ApiClient::call`]: the bearer token is
//! read from the token store at call time, bodies are encoded, and failures
//! come back as a [`ClientError`] carrying the server's message and status.

pub mod applications;
pub mod companies;
pub mod error;
pub mod guarded;
pub mod jobs;
pub mod options;
pub mod users;

pub use error::ClientError;
pub use guarded::GuardedClient;
pub use options::{RequestBody, RequestOptions};

use jobboard_core::{MemoryTokenStore, TokenStore};
use reqwest::{Client, ClientBuilder, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, error, warn};

/// Body fields checked, in order, for a server error message
const ERROR_FIELDS: [&str; 3] = ["error", "message", "msg"];

/// Job board API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client with an empty in-memory token store
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The store the bearer token is read from
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Issue one call and decode the JSON answer
    ///
    /// An empty success body decodes as `{}`. A success body carrying a
    /// string `error` field is treated as a rejection.
    pub async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let RequestOptions {
            method,
            body,
            headers,
            query,
        } = options;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method.clone(), url);

        if let Some(token) = self.tokens.get() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        if !query.is_empty() {
            request = request.query(&query);
        }

        request = match body {
            Some(RequestBody::Json(bytes)) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(bytes),
            Some(RequestBody::Multipart(form)) => request.multipart(form),
            None => request,
        };

        if !headers.is_empty() {
            request = request.headers(headers);
        }

        debug!(%method, path, "Sending request");
        let response = request.send().await.map_err(|e| {
            error!(%method, path, "Request failed: {e}");
            ClientError::Transport(e)
        })?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            decode_success(status, &text)
        } else {
            let message = error_message(&text).unwrap_or_else(|| status_text(status));
            warn!(%method, path, status = status.as_u16(), %message, "Request rejected");
            Err(ClientError::from_status(status.as_u16(), message))
        }
    }

    /// `GET path`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.call(path, RequestOptions::get()).await
    }
}

fn decode_success<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<T, ClientError> {
    if text.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Object(Map::new()))?);
    }

    let value: Value = serde_json::from_str(text)?;
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        warn!(status = status.as_u16(), %message, "Server reported an error in a success response");
        return Err(ClientError::Request {
            status: status.as_u16(),
            message: message.to_string(),
        });
    }

    Ok(serde_json::from_value(value)?)
}

/// Message from an error body, if it carries one
fn error_message(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    ERROR_FIELDS
        .iter()
        .filter_map(|field| value.get(*field).and_then(Value::as_str))
        .find(|message| !message.trim().is_empty())
        .map(ToString::to_string)
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_u16().to_string(), ToString::to_string)
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
    #[cfg(not(target_arch = "wasm32"))]
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Read bearer tokens from `store`
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(store);
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[cfg(not(target_arch = "wasm32"))]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url {base_url:?}: {e}")))?;

        #[allow(unused_mut)]
        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
            client_builder = client_builder.user_agent(
                self.user_agent
                    .unwrap_or_else(|| concat!("jobboard-client/", env!("CARGO_PKG_VERSION")).to_string()),
            );
        }

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_precedence() {
        assert_eq!(
            error_message(r#"{"message": "m", "error": "e"}"#).as_deref(),
            Some("e")
        );
        assert_eq!(
            error_message(r#"{"message": "m", "msg": "x"}"#).as_deref(),
            Some("m")
        );
        assert_eq!(
            error_message(r#"{"msg": "Token has expired"}"#).as_deref(),
            Some("Token has expired")
        );
        assert_eq!(error_message(r#"{"error": ""}"#), None);
        assert_eq!(error_message("<html>oops</html>"), None);
    }

    #[test]
    fn test_status_text_falls_back_to_code() {
        assert_eq!(status_text(StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(status_text(StatusCode::from_u16(599).unwrap()), "599");
    }

    #[test]
    fn test_empty_success_body_is_empty_object() {
        let value: Value = decode_success(StatusCode::NO_CONTENT, "").unwrap();
        assert_eq!(value, Value::Object(Map::new()));
    }

    #[test]
    fn test_error_field_in_success_body_is_rejection() {
        let result: Result<Value, _> =
            decode_success(StatusCode::OK, r#"{"error": "Missing query parameter"}"#);
        assert!(matches!(
            result,
            Err(ClientError::Request { status: 200, ref message }) if message == "Missing query parameter"
        ));
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = ApiClient::builder().build();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_builder_rejects_relative_base_url() {
        let result = ApiClient::new("/api");
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
