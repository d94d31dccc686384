//! Telegram Bot API `sendMessage` endpoint

use homework_core::dto::telegram::{BotResponse, SendMessage};
use reqwest::Client;
use std::fmt;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Production Bot API base URL
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Client that posts text messages to one fixed chat
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL, without trailing slash
    api_url: String,
    /// Bot token, part of every request path
    token: String,
    /// Destination chat
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a client for the production Bot API
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_API_URL, token, chat_id, Client::new())
    }

    /// Create a client with a custom API URL and HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the destination chat
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send `text` to the configured chat
    ///
    /// Single attempt, no retry. Every failure, including network errors,
    /// surfaces as [`ClientError::DeliveryFailed`].
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: self.chat_id.clone(),
                text: text.to_string(),
            })
            .send()
            .await
            // The request URL embeds the bot token
            .map_err(|e| ClientError::DeliveryFailed(e.without_url().to_string()))?;

        let status = response.status();
        let body = crate::error_body(response).await;
        let reply = serde_json::from_str::<BotResponse>(&body).ok();

        if !status.is_success() {
            let reason = reply
                .and_then(|r| r.description)
                .unwrap_or_else(|| crate::truncate_detail(&body));
            return Err(ClientError::DeliveryFailed(format!(
                "status {}: {}",
                status.as_u16(),
                reason
            )));
        }

        match reply {
            Some(BotResponse { ok: true, .. }) => {
                debug!("Message delivered to chat {}", self.chat_id);
                Ok(())
            }
            Some(BotResponse { description, .. }) => Err(ClientError::DeliveryFailed(
                description.unwrap_or_else(|| "Bot API rejected the message".to_string()),
            )),
            None => Err(ClientError::DeliveryFailed(format!(
                "unexpected Bot API response: {}",
                crate::truncate_detail(&body)
            ))),
        }
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
