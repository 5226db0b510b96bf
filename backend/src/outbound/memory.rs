//! In-process `FeedbackRepository` used when no database is configured.
//!
//! Follows the same storage contract as the PostgreSQL adapter: ids start at
//! 1 and increase on every insert, messages longer than the column limit are
//! rejected, and replacing an unknown id fails. Contents are lost on restart.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{FeedbackRepository, FeedbackRepositoryError, ensure_message_fits};
use crate::domain::{FeedbackId, FeedbackRecord};

#[derive(Debug, Default)]
struct Rows {
    last_id: i64,
    by_id: BTreeMap<FeedbackId, FeedbackRecord>,
}

/// Mutex-guarded map of stored feedback.
///
/// # Examples
/// ```
/// use backend::domain::FeedbackRecord;
/// use backend::domain::ports::FeedbackRepository;
/// use backend::outbound::InMemoryFeedbackRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryFeedbackRepository::new();
/// let stored = repo
///     .save(&FeedbackRecord::empty().with_message("hi"))
///     .await
///     .expect("save succeeds");
/// assert_eq!(stored.id().map(|id| id.get()), Some(1));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryFeedbackRepository {
    rows: Mutex<Rows>,
}

impl InMemoryFeedbackRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave `Rows` half-written: every
    // mutation is a single insert or remove.
    fn rows(&self) -> MutexGuard<'_, Rows> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn save(
        &self,
        record: &FeedbackRecord,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError> {
        ensure_message_fits(record)?;
        let mut rows = self.rows();
        let stored = match record.id() {
            None => {
                let next = rows
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| FeedbackRepositoryError::query("feedback id space exhausted"))?;
                rows.last_id = next;
                let mut stored = record.clone();
                stored.set_id(Some(FeedbackId::new(next)));
                stored
            }
            Some(id) if rows.by_id.contains_key(&id) => record.clone(),
            Some(id) => return Err(FeedbackRepositoryError::not_found(id.get())),
        };
        if let Some(id) = stored.id() {
            rows.by_id.insert(id, stored.clone());
            debug!(id = id.get(), "feedback written to memory store");
        }
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: FeedbackId,
    ) -> Result<Option<FeedbackRecord>, FeedbackRepositoryError> {
        Ok(self.rows().by_id.get(&id).cloned())
    }

    async fn list_recent(
        &self,
        limit: usize,
    ) -> Result<Vec<FeedbackRecord>, FeedbackRepositoryError> {
        Ok(self
            .rows()
            .by_id
            .values()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: FeedbackId) -> Result<bool, FeedbackRepositoryError> {
        Ok(self.rows().by_id.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FEEDBACK_MESSAGE_MAX_CHARS;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryFeedbackRepository {
        InMemoryFeedbackRepository::new()
    }

    async fn insert(repo: &InMemoryFeedbackRepository, message: &str) -> FeedbackRecord {
        repo.save(&FeedbackRecord::empty().with_message(message))
            .await
            .expect("insert succeeds")
    }

    #[rstest]
    #[tokio::test]
    async fn inserts_receive_increasing_ids(repo: InMemoryFeedbackRepository) {
        let first = insert(&repo, "one").await;
        let second = insert(&repo, "two").await;

        assert_eq!(first.id(), Some(FeedbackId::new(1)));
        assert_eq!(second.id(), Some(FeedbackId::new(2)));
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repo: InMemoryFeedbackRepository) {
        let first = insert(&repo, "one").await;
        let id = first.id().expect("stored id");
        assert!(repo.delete(id).await.expect("delete succeeds"));

        let next = insert(&repo, "two").await;

        assert_eq!(next.id(), Some(FeedbackId::new(2)));
    }

    #[rstest]
    #[tokio::test]
    async fn replace_overwrites_fields_but_not_id(repo: InMemoryFeedbackRepository) {
        let stored = insert(&repo, "draft").await;
        let mut edited = stored.clone();
        edited.set_message(Some("final".to_owned()));
        edited.set_email(Some("ada@example.com".to_owned()));

        let replaced = repo.save(&edited).await.expect("replace succeeds");
        let fetched = repo
            .find_by_id(stored.id().expect("stored id"))
            .await
            .expect("lookup succeeds");

        assert_eq!(replaced.id(), stored.id());
        assert_eq!(fetched, Some(edited));
    }

    #[rstest]
    #[tokio::test]
    async fn replacing_unknown_id_fails(repo: InMemoryFeedbackRepository) {
        let ghost = FeedbackRecord::new(Some(FeedbackId::new(99)), None, None, None);

        let err = repo.save(&ghost).await.expect_err("id is unknown");

        assert_eq!(err, FeedbackRepositoryError::not_found(99_i64));
    }

    #[rstest]
    #[tokio::test]
    async fn overlong_message_is_rejected_and_nothing_stored(repo: InMemoryFeedbackRepository) {
        let record =
            FeedbackRecord::empty().with_message("a".repeat(FEEDBACK_MESSAGE_MAX_CHARS + 1));

        let err = repo.save(&record).await.expect_err("message too long");

        assert!(matches!(err, FeedbackRepositoryError::MessageTooLong { .. }));
        assert!(repo.list_recent(10).await.expect("list succeeds").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn list_recent_is_newest_first_and_limited(repo: InMemoryFeedbackRepository) {
        for message in ["a", "b", "c"] {
            insert(&repo, message).await;
        }

        let listed = repo.list_recent(2).await.expect("list succeeds");
        let messages: Vec<_> = listed.iter().filter_map(FeedbackRecord::message).collect();

        assert_eq!(messages, ["c", "b"]);
    }

    #[tokio::test]
    async fn exhausted_id_space_is_a_query_error() {
        let repo = InMemoryFeedbackRepository {
            rows: Mutex::new(Rows {
                last_id: i64::MAX,
                by_id: BTreeMap::new(),
            }),
        };

        let err = repo
            .save(&FeedbackRecord::empty())
            .await
            .expect_err("no id left to assign");

        assert_eq!(err, FeedbackRepositoryError::query("feedback id space exhausted"));
        assert!(repo.list_recent(1).await.expect("list succeeds").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_of_unknown_id_reports_false(repo: InMemoryFeedbackRepository) {
        assert!(!repo.delete(FeedbackId::new(1)).await.expect("delete succeeds"));
    }
}
