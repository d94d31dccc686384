//! Scheduler layer for the bot
//!
//! This layer owns the polling loop: it fetches new review statuses on a
//! fixed interval, turns them into notifications and contains every
//! failure so the loop never stops.

pub mod poller;

pub use poller::{CycleOutcome, StatusPoller};
