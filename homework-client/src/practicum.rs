//! Practicum homework status endpoint

use homework_core::dto::practicum::{ApiResponse, FROM_DATE_PARAM};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Production endpoint of the homework status API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Client for the homework review status API
///
/// Every call is a single authenticated GET; nothing is cached between
/// calls, so repeating a fetch with the same timestamp against unchanged
/// upstream state yields the same response.
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a client for the production endpoint
    ///
    /// # Example
    /// ```
    /// use homework_client::PracticumClient;
    ///
    /// let client = PracticumClient::new("token");
    /// assert!(client.endpoint().starts_with("https://"));
    /// ```
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_ENDPOINT, token, Client::new())
    }

    /// Create a client with a custom endpoint and HTTP client
    ///
    /// This allows you to configure timeouts or point at a test server.
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the status endpoint
    /// * `token` - OAuth token
    /// * `client` - A configured reqwest Client
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch review records changed after `timestamp`
    ///
    /// # Arguments
    /// * `timestamp` - Lower bound, in Unix seconds
    ///
    /// # Errors
    /// * [`ClientError::RequestFailed`] / [`ClientError::ApiError`] when the
    ///   request fails or returns a non-success status. Neither carries the
    ///   request URL or the response body, so the same failure always
    ///   formats to the same text.
    /// * [`ClientError::ParseError`] when the body is not JSON
    /// * [`ClientError::Shape`] when the JSON is not a `homeworks` envelope
    pub async fn fetch_since(&self, timestamp: i64) -> Result<ApiResponse> {
        debug!("Fetching homework statuses since {}", timestamp);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[(FROM_DATE_PARAM, timestamp)])
            .send()
            .await
            // The request URL carries the cursor, which changes every cycle
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = crate::error_body(response).await;
            debug!("Review API error body: {}", crate::truncate_detail(&body));
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            return Err(ClientError::api_error(status.as_u16(), reason));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("response is not valid JSON: {}", e)))?;

        Ok(ApiResponse::try_from(value)?)
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new("token");
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_debug_hides_token() {
        let client = PracticumClient::new("very-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
