//! PostgreSQL persistence for feedback using Diesel and `diesel-async`.
//!
//! Row structs and the `table!` schema stay private to this module; only the
//! repository adapter and the pool types are exported.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselFeedbackRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/feedback")).await?;
//! let repo = DieselFeedbackRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_feedback_repository;
mod models;
mod pool;
mod schema;

pub use diesel_feedback_repository::DieselFeedbackRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
