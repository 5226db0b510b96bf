//! Feedback HTTP handlers.
//!
//! ```text
//! POST   /api/feedback          {"name":"Ada","email":"ada@example.com","message":"Great tool!"}
//! GET    /api/feedback?limit=20
//! GET    /api/feedback/{id}
//! PUT    /api/feedback/{id}     {"message":"Edited"}
//! DELETE /api/feedback/{id}
//! ```
//!
//! Bodies are accepted as-is: every field is optional and no format checks
//! run. The only rejection comes from storage when `message` is longer than
//! the column allows.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::FeedbackDraft;
use crate::domain::{Error, FeedbackId, FeedbackRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for submitting or replacing feedback.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// At most 1000 characters.
    #[schema(example = "Great tool!")]
    pub message: Option<String>,
}

impl From<FeedbackRequest> for FeedbackDraft {
    fn from(value: FeedbackRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

/// Query parameters for listing feedback.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFeedbackParams {
    /// Page size; defaults to 50 and is capped at 200.
    pub limit: Option<usize>,
}

fn location_of(record: &FeedbackRecord) -> Option<String> {
    record.id().map(|id| format!("/api/feedback/{id}"))
}

/// Submit new feedback.
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackRequest,
    responses(
        (
            status = 201,
            description = "Feedback stored",
            headers(("Location" = String, description = "URL of the stored feedback")),
            body = FeedbackRecord
        ),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Storage unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "submitFeedback"
)]
#[post("/feedback")]
pub async fn submit_feedback(
    state: web::Data<HttpState>,
    payload: web::Json<FeedbackRequest>,
) -> ApiResult<HttpResponse> {
    let stored = state.feedback.submit(payload.into_inner().into()).await?;
    let mut response = HttpResponse::Created();
    if let Some(location) = location_of(&stored) {
        response.insert_header((header::LOCATION, location));
    }
    Ok(response.json(stored))
}

/// List the newest feedback first.
#[utoipa::path(
    get,
    path = "/api/feedback",
    params(ListFeedbackParams),
    responses(
        (status = 200, description = "Feedback, newest first", body = [FeedbackRecord]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Storage unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "listFeedback"
)]
#[get("/feedback")]
pub async fn list_feedback(
    state: web::Data<HttpState>,
    params: web::Query<ListFeedbackParams>,
) -> ApiResult<web::Json<Vec<FeedbackRecord>>> {
    let records = state.feedback_query.list_recent(params.limit).await?;
    Ok(web::Json(records))
}

/// Fetch one feedback entry.
#[utoipa::path(
    get,
    path = "/api/feedback/{id}",
    params(("id" = i64, Path, description = "Feedback identifier")),
    responses(
        (status = 200, description = "Feedback", body = FeedbackRecord),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "getFeedback"
)]
#[get("/feedback/{id}")]
pub async fn get_feedback(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<FeedbackRecord>> {
    let record = state
        .feedback_query
        .get(FeedbackId::new(path.into_inner()))
        .await?;
    Ok(web::Json(record))
}

/// Replace every text field of an existing entry.
///
/// Omitted fields are cleared.
#[utoipa::path(
    put,
    path = "/api/feedback/{id}",
    params(("id" = i64, Path, description = "Feedback identifier")),
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Feedback replaced", body = FeedbackRecord),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "replaceFeedback"
)]
#[put("/feedback/{id}")]
pub async fn replace_feedback(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<FeedbackRequest>,
) -> ApiResult<web::Json<FeedbackRecord>> {
    let record = state
        .feedback
        .replace(FeedbackId::new(path.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(record))
}

/// Delete an entry.
#[utoipa::path(
    delete,
    path = "/api/feedback/{id}",
    params(("id" = i64, Path, description = "Feedback identifier")),
    responses(
        (status = 204, description = "Feedback deleted"),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["feedback"],
    operation_id = "deleteFeedback"
)]
#[delete("/feedback/{id}")]
pub async fn delete_feedback(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .feedback
        .delete(FeedbackId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
