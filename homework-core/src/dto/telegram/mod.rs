//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// Body of a `sendMessage` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
}

/// Envelope every Bot API response is wrapped in
///
/// Only the delivery outcome is read; the sent message itself is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BotResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
