//! Selects the feedback storage adapter for the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use backend::inbound::http::state::HttpState;
use backend::outbound::InMemoryFeedbackRepository;
use backend::outbound::persistence::{DbPool, DieselFeedbackRepository};

pub(super) fn build_http_state(db_pool: Option<DbPool>) -> web::Data<HttpState> {
    let state = match db_pool {
        Some(pool) => {
            info!("storing feedback in PostgreSQL");
            HttpState::from_repository(Arc::new(DieselFeedbackRepository::new(pool)))
        }
        None => {
            warn!("no database configured; feedback is kept in memory and lost on restart");
            HttpState::from_repository(Arc::new(InMemoryFeedbackRepository::new()))
        }
    };
    web::Data::new(state)
}
