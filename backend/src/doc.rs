//! OpenAPI document for the feedback API.
//!
//! Served through Swagger UI in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, FeedbackRecord};
use crate::inbound::http::feedback::FeedbackRequest;

/// OpenAPI document covering the feedback and health endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Feedback backend API",
        description = "Collects free-form feedback submissions and exposes them for review."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::feedback::submit_feedback,
        crate::inbound::http::feedback::list_feedback,
        crate::inbound::http::feedback::get_feedback,
        crate::inbound::http::feedback::replace_feedback,
        crate::inbound::http::feedback::delete_feedback,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(FeedbackRecord, FeedbackRequest, Error, ErrorCode)),
    tags(
        (name = "feedback", description = "Feedback submissions"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
