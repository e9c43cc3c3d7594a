//! Sample data bootstrap.
//!
//! ```text
//! POST /seed
//! ```

use actix_web::{post, web};
use serde::Serialize;

use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Seed result body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SeedResponse {
    /// Always `ok`.
    #[schema(example = "ok")]
    pub status: &'static str,
    /// What the seed did.
    #[schema(example = "Seeded profile and projects")]
    pub message: &'static str,
}

/// Insert the sample profile and projects unless a profile exists.
///
/// Not transactional: concurrent calls may both insert.
#[utoipa::path(
    post,
    path = "/seed",
    responses(
        (status = 200, description = "Seed applied or skipped", body = SeedResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Database not configured", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "seedPortfolio"
)]
#[post("/seed")]
pub async fn seed_portfolio(state: web::Data<HttpState>) -> ApiResult<web::Json<SeedResponse>> {
    let outcome = state.portfolio.seed().await?;
    Ok(web::Json(SeedResponse {
        status: "ok",
        message: outcome.message(),
    }))
}
