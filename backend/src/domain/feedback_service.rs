//! Feedback domain service.
//!
//! Implements the feedback driving ports on top of a [`FeedbackRepository`].
//! The service adds no validation of its own; storage faults are surfaced to
//! callers as domain [`Error`]s without being retried or recovered.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    FeedbackCommand, FeedbackDraft, FeedbackQuery, FeedbackRepository, FeedbackRepositoryError,
};
use crate::domain::{Error, FeedbackId, FeedbackRecord};

/// Page size used when a caller does not ask for one.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Largest page a caller may request.
pub const MAX_LIST_LIMIT: usize = 200;

/// Feedback service implementing [`FeedbackCommand`] and [`FeedbackQuery`].
#[derive(Clone)]
pub struct FeedbackService<R> {
    repository: Arc<R>,
}

impl<R> FeedbackService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn missing(id: i64) -> Error {
    Error::not_found(format!("feedback {id} not found")).with_details(json!({ "id": id }))
}

fn map_repository_error(error: FeedbackRepositoryError) -> Error {
    match error {
        FeedbackRepositoryError::Connection { message } => {
            warn!(%message, "feedback repository unavailable");
            Error::service_unavailable("feedback storage is unavailable")
        }
        FeedbackRepositoryError::Query { message } => {
            Error::internal(format!("feedback repository error: {message}"))
        }
        FeedbackRepositoryError::MessageTooLong { length, max } => {
            Error::invalid_request(format!("message must be at most {max} characters"))
                .with_details(json!({
                    "field": "message",
                    "code": "message_too_long",
                    "length": length,
                    "max": max,
                }))
        }
        FeedbackRepositoryError::NotFound { id } => missing(id),
    }
}

#[async_trait]
impl<R> FeedbackCommand for FeedbackService<R>
where
    R: FeedbackRepository,
{
    async fn submit(&self, draft: FeedbackDraft) -> Result<FeedbackRecord, Error> {
        let stored = self
            .repository
            .save(&draft.into_record(None))
            .await
            .map_err(map_repository_error)?;
        info!(id = ?stored.id().map(FeedbackId::get), "feedback stored");
        Ok(stored)
    }

    async fn replace(
        &self,
        id: FeedbackId,
        draft: FeedbackDraft,
    ) -> Result<FeedbackRecord, Error> {
        let stored = self
            .repository
            .save(&draft.into_record(Some(id)))
            .await
            .map_err(map_repository_error)?;
        info!(id = id.get(), "feedback replaced");
        Ok(stored)
    }

    async fn delete(&self, id: FeedbackId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(missing(id.get()));
        }
        info!(id = id.get(), "feedback deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> FeedbackQuery for FeedbackService<R>
where
    R: FeedbackRepository,
{
    async fn get(&self, id: FeedbackId) -> Result<FeedbackRecord, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| missing(id.get()))
    }

    async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<FeedbackRecord>, Error> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
        self.repository
            .list_recent(limit)
            .await
            .map_err(map_repository_error)
    }
}
