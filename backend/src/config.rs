//! Server configuration loaded via OrthoConfig.
//!
//! Values come from `FEEDBACK_*` environment variables, an optional
//! configuration file, or command-line flags, in OrthoConfig's usual
//! precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings for the feedback server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FEEDBACK")]
pub struct FeedbackSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL URL. Without it, feedback is kept in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl FeedbackSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Pool settings when a database is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?.trim();
        if url.is_empty() {
            return None;
        }
        let config = PoolConfig::new(url);
        Some(match self.pool_max_size {
            Some(max_size) => config.with_max_size(max_size),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "FEEDBACK_HOST",
        "FEEDBACK_PORT",
        "FEEDBACK_DATABASE_URL",
        "FEEDBACK_POOL_MAX_SIZE",
    ];

    fn load(overrides: &[(&str, &str)]) -> FeedbackSettings {
        let _guard = lock_env(VARS.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned());
            (name, value)
        }));
        FeedbackSettings::load_from_iter([OsString::from("feedback-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let settings = load(&[]);

        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), 8080);
        assert!(settings.pool_config().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load(&[
            ("FEEDBACK_HOST", "127.0.0.1"),
            ("FEEDBACK_PORT", "9090"),
            ("FEEDBACK_DATABASE_URL", "postgres://localhost/feedback"),
            ("FEEDBACK_POOL_MAX_SIZE", "3"),
        ]);

        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
        let pool = settings.pool_config().expect("database configured");
        assert_eq!(pool.database_url(), "postgres://localhost/feedback");
        assert_eq!(pool.max_size(), 3);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_database_url_means_in_memory(#[case] url: &str) {
        let settings = load(&[("FEEDBACK_DATABASE_URL", url)]);
        assert!(settings.pool_config().is_none());
    }
}
