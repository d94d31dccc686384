//! Data Transfer Objects for the external APIs
//!
//! Wire representations of the Practicum homework API response and of the
//! Telegram Bot API `sendMessage` call.

pub mod practicum;
pub mod telegram;
