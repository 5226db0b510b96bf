//! Storage port for feedback records.
//!
//! The storage layer owns two rules the record type deliberately leaves out:
//! it assigns identifiers on first save, and it caps `message` at
//! [`FEEDBACK_MESSAGE_MAX_CHARS`] characters. Adapters reject over-long
//! messages with [`FeedbackRepositoryError::MessageTooLong`]; nothing is
//! truncated.

use async_trait::async_trait;

use crate::domain::{FeedbackId, FeedbackRecord};

use super::define_port_error;

/// Declared length of the `feedback.message` column, in characters.
pub const FEEDBACK_MESSAGE_MAX_CHARS: usize = 1000;

define_port_error! {
    /// Errors raised by feedback repository adapters.
    pub enum FeedbackRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "feedback repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "feedback repository query failed: {message}",
        /// The message exceeds the storage column length.
        MessageTooLong { length: usize, max: usize } =>
            "feedback message has {length} characters, storage accepts at most {max}",
        /// An update targeted an identifier with no stored row.
        NotFound { id: i64 } =>
            "feedback {id} does not exist",
    }
}

/// Check a record against the `message` column length.
///
/// Length is counted in Unicode scalar values, matching how PostgreSQL
/// measures `varchar(n)`.
///
/// # Examples
/// ```
/// use backend::domain::FeedbackRecord;
/// use backend::domain::ports::{FEEDBACK_MESSAGE_MAX_CHARS, ensure_message_fits};
///
/// let fits = FeedbackRecord::empty().with_message("é".repeat(FEEDBACK_MESSAGE_MAX_CHARS));
/// assert!(ensure_message_fits(&fits).is_ok());
///
/// let overflow = FeedbackRecord::empty().with_message("a".repeat(FEEDBACK_MESSAGE_MAX_CHARS + 1));
/// assert!(ensure_message_fits(&overflow).is_err());
/// ```
pub fn ensure_message_fits(record: &FeedbackRecord) -> Result<(), FeedbackRepositoryError> {
    let length = record
        .message()
        .map_or(0, |message| message.chars().count());
    if length > FEEDBACK_MESSAGE_MAX_CHARS {
        return Err(FeedbackRepositoryError::message_too_long(
            length,
            FEEDBACK_MESSAGE_MAX_CHARS,
        ));
    }
    Ok(())
}

/// Port for feedback storage and retrieval.
///
/// # Identity
///
/// - Saving a record without an id inserts it and returns the stored copy
///   carrying a freshly assigned id. Ids increase monotonically.
/// - Saving a record with an id replaces the stored row with that id and
///   never changes the id. A missing row yields
///   [`FeedbackRepositoryError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Insert or replace a record, returning the stored copy.
    async fn save(&self, record: &FeedbackRecord)
    -> Result<FeedbackRecord, FeedbackRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(
        &self,
        id: FeedbackId,
    ) -> Result<Option<FeedbackRecord>, FeedbackRepositoryError>;

    /// Fetch up to `limit` records, newest first.
    async fn list_recent(&self, limit: usize)
    -> Result<Vec<FeedbackRecord>, FeedbackRepositoryError>;

    /// Remove a record. Returns `true` when a row was deleted.
    async fn delete(&self, id: FeedbackId) -> Result<bool, FeedbackRepositoryError>;
}
