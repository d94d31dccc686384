//! Homework HTTP Clients
//!
//! Thin, typed clients for the two services the homework bot talks to:
//! - [`PracticumClient`]: fetches homework review statuses
//! - [`TelegramClient`]: delivers text messages to a single chat
//!
//! # Example
//!
//! ```no_run
//! use homework_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let practicum = PracticumClient::new("practicum-token");
//!     let telegram = TelegramClient::new("bot-token", "123456");
//!
//!     let response = practicum.fetch_since(0).await?;
//!     telegram
//!         .send_message(&format!("{} review record(s)", response.homeworks.len()))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, ErrorKind, Result};
pub use homework_core::dto::practicum::ApiResponse;
pub use practicum::{DEFAULT_ENDPOINT, PracticumClient};
pub use telegram::{DEFAULT_API_URL, TelegramClient};

use reqwest::Client;
use std::time::Duration;

/// Build an HTTP client that gives up on any request after `timeout`
///
/// An elapsed request fails with a timeout [`reqwest::Error`].
pub fn http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Drain the body of a failed response for an error message
async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string())
}

/// Longest response excerpt that goes into an error message, in chars
const MAX_DETAIL_CHARS: usize = 200;

/// Cut an upstream body down to a short excerpt for error text
fn truncate_detail(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_DETAIL_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
