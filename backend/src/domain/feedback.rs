//! Feedback submission record.
//!
//! A [`FeedbackRecord`] holds one user-provided message together with an
//! optional contact name and email. The record is a plain value: it never
//! assigns its own identifier and never validates or truncates its fields.
//! Identity generation and the `message` length cap are owned by the storage
//! adapters behind [`FeedbackRepository`](crate::domain::ports::FeedbackRepository).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage-assigned feedback identifier.
///
/// # Examples
/// ```
/// use backend::domain::FeedbackId;
///
/// let id = FeedbackId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(i64);

impl FeedbackId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Return the raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One feedback submission.
///
/// ## Invariants
/// - `id` is `None` until a storage adapter persists the record. No method on
///   the record changes it implicitly.
/// - Every field is optional and no field is checked. Empty strings are kept
///   as given.
///
/// ## Serialisation
/// Keys are camelCase. Unset fields are omitted from JSON output.
///
/// # Examples
/// ```
/// use backend::domain::FeedbackRecord;
///
/// let record = FeedbackRecord::new(
///     None,
///     Some("Ada".to_owned()),
///     Some("ada@example.com".to_owned()),
///     Some("Great tool!".to_owned()),
/// );
/// assert_eq!(record.name(), Some("Ada"));
/// assert!(record.id().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>, example = 42)]
    id: Option<FeedbackId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ada")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "ada@example.com")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Great tool!")]
    message: Option<String>,
}

impl FeedbackRecord {
    /// Create a record with every field unset.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a record with all four fields supplied.
    ///
    /// Used both for new submissions (`id` is `None`) and when rebuilding a
    /// stored row (`id` is `Some`).
    #[must_use]
    pub fn new(
        id: Option<FeedbackId>,
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            message,
        }
    }

    /// Storage-assigned identifier, if the record has been persisted.
    #[must_use]
    pub fn id(&self) -> Option<FeedbackId> {
        self.id
    }

    /// Replace the identifier.
    pub fn set_id(&mut self, id: Option<FeedbackId>) {
        self.id = id;
    }

    /// Contact name supplied with the submission.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the contact name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Contact email supplied with the submission.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Replace the contact email.
    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    /// Feedback message body.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace the message body.
    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Set the contact name while building a new record.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::FeedbackRecord;
    ///
    /// let record = FeedbackRecord::empty()
    ///     .with_name("Ada")
    ///     .with_message("hello");
    /// assert_eq!(record.message(), Some("hello"));
    /// assert!(record.email().is_none());
    /// ```
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the contact email while building a new record.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the message body while building a new record.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
