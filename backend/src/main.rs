//! Backend entry-point: loads settings, selects storage, and serves the
//! feedback API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::FeedbackSettings;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::DbPool;
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = FeedbackSettings::load_from_iter(std::env::args_os()).map_err(|e| {
        std::io::Error::other(format!("failed to load configuration: {e}"))
    })?;

    let mut config = ServerConfig::new(settings.host(), settings.port());
    if let Some(pool_config) = settings.pool_config() {
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
        config = config.with_db_pool(pool);
    }

    info!(host = settings.host(), port = settings.port(), "starting feedback backend");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
