//! Homework status repository

use async_trait::async_trait;
use homework_client::{ApiResponse, PracticumClient, Result};

/// Source of homework review records
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches review records changed after `timestamp`
    ///
    /// Implementations validate the response envelope; the records
    /// themselves are checked by the caller.
    ///
    /// # Arguments
    /// * `timestamp` - Lower bound, in Unix seconds
    async fn fetch_since(&self, timestamp: i64) -> Result<ApiResponse>;
}

#[async_trait]
impl HomeworkRepository for PracticumClient {
    async fn fetch_since(&self, timestamp: i64) -> Result<ApiResponse> {
        PracticumClient::fetch_since(self, timestamp).await
    }
}
