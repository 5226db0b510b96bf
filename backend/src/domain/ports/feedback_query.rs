//! Driving port for feedback reads.

use async_trait::async_trait;

use crate::domain::{Error, FeedbackId, FeedbackRecord};

/// Domain use-case port for reading stored feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackQuery: Send + Sync {
    /// Fetch one submission, failing with `not_found` when it is absent.
    async fn get(&self, id: FeedbackId) -> Result<FeedbackRecord, Error>;

    /// Fetch the newest submissions. `None` uses the service default.
    async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<FeedbackRecord>, Error>;
}
