//! Domain primitives, ports, and services.
//!
//! Purpose: define the feedback record and the use-cases around it without
//! depending on HTTP or database frameworks.
//!
//! Public surface:
//! - FeedbackRecord / FeedbackId: one feedback submission and its
//!   storage-assigned identifier.
//! - FeedbackService: implementation of the feedback driving ports.
//! - Error / ErrorCode: transport agnostic error payload.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod feedback;
pub mod feedback_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::feedback::{FeedbackId, FeedbackRecord};
pub use self::feedback_service::{DEFAULT_LIST_LIMIT, FeedbackService, MAX_LIST_LIMIT};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
