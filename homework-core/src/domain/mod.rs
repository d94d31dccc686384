//! Core domain types
//!
//! The homework review state as the bot understands it. These types are
//! produced from validated API data and consumed by the poll loop.

pub mod homework;

pub use homework::{HomeworkStatus, ReviewRecord};
