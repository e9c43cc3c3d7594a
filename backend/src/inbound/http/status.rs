//! Greeting and diagnostics endpoints.
//!
//! ```text
//! GET /
//! GET /test
//! ```

use actix_web::{get, web};
use serde::Serialize;

use crate::domain::DiagnosticsReport;
use crate::inbound::http::schemas::DiagnosticsReportSchema;
use crate::inbound::http::state::HttpState;

/// Greeting body for the root route.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct Greeting {
    /// Service name.
    #[schema(example = "Django Developer Portfolio API")]
    pub message: &'static str,
}

/// Static greeting.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service greeting", body = Greeting)),
    tags = ["status"],
    operation_id = "root"
)]
#[get("/")]
pub async fn root() -> web::Json<Greeting> {
    web::Json(Greeting {
        message: "Django Developer Portfolio API",
    })
}

/// Report backend and document store status. Store failures are folded into
/// the report instead of failing the request.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Diagnostic status", body = DiagnosticsReportSchema)),
    tags = ["status"],
    operation_id = "diagnostics"
)]
#[get("/test")]
pub async fn diagnostics(state: web::Data<HttpState>) -> web::Json<DiagnosticsReport> {
    web::Json(state.portfolio.diagnostics().await)
}
