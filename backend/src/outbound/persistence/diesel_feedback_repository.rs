//! PostgreSQL-backed `FeedbackRepository` using Diesel.
//!
//! Identifiers come from the `feedback.id` identity column. The message
//! length check runs before any round trip so an over-long message never
//! reaches the database.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{FeedbackRepository, FeedbackRepositoryError, ensure_message_fits};
use crate::domain::{FeedbackId, FeedbackRecord};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FeedbackRow, FeedbackUpdate, NewFeedbackRow};
use super::pool::DbPool;
use super::schema::feedback;

/// Diesel implementation of [`FeedbackRepository`].
#[derive(Clone)]
pub struct DieselFeedbackRepository {
    pool: DbPool,
}

impl DieselFeedbackRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for DieselFeedbackRepository {
    async fn save(
        &self,
        record: &FeedbackRecord,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError> {
        ensure_message_fits(record)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = match record.id() {
            None => diesel::insert_into(feedback::table)
                .values(NewFeedbackRow::from(record))
                .returning(FeedbackRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
            Some(id) => diesel::update(feedback::table.find(id.get()))
                .set(FeedbackUpdate::from(record))
                .returning(FeedbackRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?
                .ok_or_else(|| FeedbackRepositoryError::not_found(id.get()))?,
        };

        debug!(id = row.id, "feedback row written");
        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: FeedbackId,
    ) -> Result<Option<FeedbackRecord>, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = feedback::table
            .find(id.get())
            .select(FeedbackRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(FeedbackRecord::from))
    }

    async fn list_recent(
        &self,
        limit: usize,
    ) -> Result<Vec<FeedbackRecord>, FeedbackRepositoryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FeedbackRow> = feedback::table
            .order(feedback::id.desc())
            .limit(limit)
            .select(FeedbackRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(FeedbackRecord::from).collect())
    }

    async fn delete(&self, id: FeedbackId) -> Result<bool, FeedbackRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(feedback::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
