//! Outbound adapters implementing the feedback storage port.
//!
//! - **persistence**: PostgreSQL via Diesel, used when a database URL is
//!   configured.
//! - **memory**: process-local store for development and tests.

mod memory;
pub mod persistence;

pub use memory::InMemoryFeedbackRepository;
