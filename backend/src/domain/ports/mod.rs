//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod feedback_command;
mod feedback_query;
mod feedback_repository;

#[cfg(test)]
pub use feedback_command::MockFeedbackCommand;
pub use feedback_command::{FeedbackCommand, FeedbackDraft};
#[cfg(test)]
pub use feedback_query::MockFeedbackQuery;
pub use feedback_query::FeedbackQuery;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
pub use feedback_repository::{
    FEEDBACK_MESSAGE_MAX_CHARS, FeedbackRepository, FeedbackRepositoryError, ensure_message_fits,
};
