//! Driving port for feedback mutations.
//!
//! Inbound adapters submit, replace, and delete feedback through this port
//! without touching storage types.

use async_trait::async_trait;

use crate::domain::{Error, FeedbackId, FeedbackRecord};

/// Caller-supplied text fields for a submission or replacement.
///
/// The draft never carries an identifier; storage assigns one on submit and
/// the path identifies the row on replace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FeedbackDraft {
    /// Build the record to hand to storage.
    #[must_use]
    pub fn into_record(self, id: Option<FeedbackId>) -> FeedbackRecord {
        FeedbackRecord::new(id, self.name, self.email, self.message)
    }
}

/// Domain use-case port for changing stored feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackCommand: Send + Sync {
    /// Store a new submission and return it with its assigned id.
    async fn submit(&self, draft: FeedbackDraft) -> Result<FeedbackRecord, Error>;

    /// Replace every text field of an existing submission.
    async fn replace(&self, id: FeedbackId, draft: FeedbackDraft)
    -> Result<FeedbackRecord, Error>;

    /// Remove a submission.
    async fn delete(&self, id: FeedbackId) -> Result<(), Error>;
}
