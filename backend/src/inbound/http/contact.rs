//! Contact message intake.
//!
//! ```text
//! POST /contact {"name":"Sam","email":"sam@example.com","message":"Hi"}
//! ```

use actix_web::{post, web};
use serde::Serialize;
use serde_json::Value;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MessageSchema};
use crate::inbound::http::state::HttpState;

/// Acknowledgement body for accepted writes.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct StatusResponse {
    /// Always `ok`.
    #[schema(example = "ok")]
    pub status: &'static str,
}

impl StatusResponse {
    /// The `{"status":"ok"}` acknowledgement.
    #[must_use]
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Store a contact message.
///
/// The body is validated against the message schema; undeclared fields are
/// rejected.
#[utoipa::path(
    post,
    path = "/contact",
    request_body = MessageSchema,
    responses(
        (status = 200, description = "Message stored", body = StatusResponse),
        (status = 400, description = "Invalid message", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Database not configured", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<StatusResponse>> {
    state.portfolio.submit_contact(&payload.into_inner()).await?;
    Ok(web::Json(StatusResponse::ok()))
}
