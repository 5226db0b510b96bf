//! HTTP inbound adapter exposing the feedback REST endpoints.

pub mod error;
pub mod feedback;
pub mod health;
pub mod state;

use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

pub use error::ApiResult;

fn rejected(source: &str, detail: impl std::fmt::Display) -> actix_web::Error {
    Error::invalid_request(format!("invalid {source}"))
        .with_details(json!({ "source": source, "reason": detail.to_string() }))
        .into()
}

/// Register the `/api` scope and extractor error handling.
///
/// Extraction failures (malformed JSON, non-numeric ids, bad query strings)
/// become `invalid_request` errors with the usual JSON body.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req: &HttpRequest| rejected("body", err)),
    )
    .app_data(
        web::PathConfig::default().error_handler(|err, _req: &HttpRequest| rejected("path", err)),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req: &HttpRequest| rejected("query", err)),
    )
    .service(
        web::scope("/api")
            .service(feedback::submit_feedback)
            .service(feedback::list_feedback)
            .service(feedback::get_feedback)
            .service(feedback::replace_feedback)
            .service(feedback::delete_feedback),
    );
}
