//! Diesel row structs for the `feedback` table.
//!
//! Internal to the persistence adapter; the domain only sees
//! [`FeedbackRecord`].

use diesel::prelude::*;

use crate::domain::{FeedbackId, FeedbackRecord};

use super::schema::feedback;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = feedback)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FeedbackRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl From<FeedbackRow> for FeedbackRecord {
    fn from(row: FeedbackRow) -> Self {
        FeedbackRecord::new(
            Some(FeedbackId::new(row.id)),
            row.name,
            row.email,
            row.message,
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feedback)]
pub(crate) struct NewFeedbackRow<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub message: Option<&'a str>,
}

impl<'a> From<&'a FeedbackRecord> for NewFeedbackRow<'a> {
    fn from(record: &'a FeedbackRecord) -> Self {
        Self {
            name: record.name(),
            email: record.email(),
            message: record.message(),
        }
    }
}

/// Full replacement of the mutable columns. `None` writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = feedback)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct FeedbackUpdate<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub message: Option<&'a str>,
}

impl<'a> From<&'a FeedbackRecord> for FeedbackUpdate<'a> {
    fn from(record: &'a FeedbackRecord) -> Self {
        Self {
            name: record.name(),
            email: record.email(),
            message: record.message(),
        }
    }
}
