//! Notification channel

use async_trait::async_trait;
use homework_client::{Result, TelegramClient};

/// Best-effort delivery of text messages to the user
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message` once
    ///
    /// Failures are reported as delivery errors and never retried here.
    async fn notify(&self, message: &str) -> Result<()>;
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, message: &str) -> Result<()> {
        self.send_message(message).await
    }
}
