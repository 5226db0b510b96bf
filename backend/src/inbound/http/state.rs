//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be tested against mocks without any storage.

use std::sync::Arc;

use crate::domain::FeedbackService;
use crate::domain::ports::{FeedbackCommand, FeedbackQuery, FeedbackRepository};

/// Port implementations used by the feedback handlers.
#[derive(Clone)]
pub struct HttpState {
    pub feedback: Arc<dyn FeedbackCommand>,
    pub feedback_query: Arc<dyn FeedbackQuery>,
}

impl HttpState {
    pub fn new(feedback: Arc<dyn FeedbackCommand>, feedback_query: Arc<dyn FeedbackQuery>) -> Self {
        Self {
            feedback,
            feedback_query,
        }
    }

    /// Serve both ports from one [`FeedbackService`] over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::InMemoryFeedbackRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryFeedbackRepository::new()));
    /// # let _ = state;
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: FeedbackRepository + 'static,
    {
        let service = Arc::new(FeedbackService::new(repository));
        Self::new(service.clone(), service)
    }
}
