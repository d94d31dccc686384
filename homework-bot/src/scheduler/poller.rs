//! Homework status poller
//!
//! Each cycle fetches records changed since the cursor, announces the most
//! recent one and moves the cursor forward. Errors are reported to the chat
//! once per distinct message, then the poller sleeps and tries again.

use homework_client::{ClientError, Result};
use homework_core::domain::ReviewRecord;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::repository::{HomeworkRepository, Notifier};

/// Prefix of every error notification
pub const ERROR_PREFIX: &str = "Сбой в работе программы";

/// What a single poll cycle ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No records changed since the cursor
    NoChanges,
    /// A status change was announced
    StatusSent { message: String },
    /// A status change could not be delivered
    DeliveryFailed { reason: String },
    /// A new failure was reported to the chat
    ErrorReported { message: String, delivered: bool },
    /// The failure repeats the last reported one and was only logged
    ErrorSuppressed { message: String },
}

/// Poller that checks homework statuses forever
pub struct StatusPoller {
    homeworks: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn Notifier>,
    retry_period: Duration,
    /// Lower bound of the next fetch, Unix seconds
    cursor: i64,
    /// Last error text sent to the chat
    last_error: Option<String>,
}

impl StatusPoller {
    /// Creates a new poller
    ///
    /// # Arguments
    /// * `homeworks` - Source of review records
    /// * `notifier` - Channel for status and error messages
    /// * `retry_period` - Pause between cycles
    /// * `start` - Initial cursor, normally the current time
    pub fn new(
        homeworks: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn Notifier>,
        retry_period: Duration,
        start: i64,
    ) -> Self {
        Self {
            homeworks,
            notifier,
            retry_period,
            cursor: start,
            last_error: None,
        }
    }

    /// Current lower bound for the next fetch
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Last error message reported to the chat
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Starts the polling loop
    ///
    /// Never returns. The sleep runs after every cycle, failed or not.
    pub async fn run(&mut self) {
        info!(
            "Starting homework poller (interval: {:?}, since: {})",
            self.retry_period, self.cursor
        );

        loop {
            let now = chrono::Utc::now().timestamp();
            let outcome = self.tick(now).await;
            debug!(
                "Cycle finished: {:?}, next fetch since {}",
                outcome,
                self.cursor()
            );

            time::sleep(self.retry_period).await;
        }
    }

    /// Performs a single poll cycle
    ///
    /// `now` is the time the cycle started; the cursor moves to it whatever
    /// the outcome, so a bad response is never fetched again.
    pub async fn tick(&mut self, now: i64) -> CycleOutcome {
        let outcome = match self.check_once().await {
            Ok(Some(message)) => {
                info!("Status update sent: {}", message);
                CycleOutcome::StatusSent { message }
            }
            Ok(None) => {
                debug!("No new homework statuses");
                CycleOutcome::NoChanges
            }
            Err(e) => self.contain(e).await,
        };

        self.cursor = now;
        outcome
    }

    /// Fetch, check and announce; returns the message that was sent
    async fn check_once(&self) -> Result<Option<String>> {
        let response = self.homeworks.fetch_since(self.cursor).await?;

        if let Some(current_date) = response.current_date {
            debug!("Review API time: {}", current_date);
        }

        let Some(latest) = response.latest() else {
            return Ok(None);
        };

        let record = ReviewRecord::try_from(latest)?;
        let message = record.status_message();
        self.notifier.notify(&message).await?;

        Ok(Some(message))
    }

    /// Turns a cycle error into at most one error notification
    async fn contain(&mut self, error: ClientError) -> CycleOutcome {
        if error.is_delivery() {
            error!("Failed to send status update: {}", error);
            return CycleOutcome::DeliveryFailed {
                reason: error.to_string(),
            };
        }

        let message = format!("{}: {}", ERROR_PREFIX, error);
        error!("{}", message);

        if self.last_error() == Some(message.as_str()) {
            warn!("Error already reported, not notifying again");
            return CycleOutcome::ErrorSuppressed { message };
        }

        let delivered = match self.notifier.notify(&message).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to send error notification: {}", e);
                false
            }
        };

        self.last_error = Some(message.clone());
        CycleOutcome::ErrorReported { message, delivered }
    }
}
