//! Profile and project read endpoints.
//!
//! ```text
//! GET /profile
//! GET /projects
//! ```

use actix_web::{get, web};

use crate::domain::schema::Document;
use crate::domain::ProfileView;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DeveloperSchema, ErrorSchema, ProjectSchema};
use crate::inbound::http::state::HttpState;

/// Return the developer profile.
///
/// Falls back to a placeholder profile when the store is disabled or holds no
/// profile yet; the placeholder bio says which.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Developer profile", body = DeveloperSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unreachable", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn get_profile(state: web::Data<HttpState>) -> ApiResult<web::Json<ProfileView>> {
    Ok(web::Json(state.portfolio.profile().await?))
}

/// List up to fifty projects in store order.
#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "Projects", body = [ProjectSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Document store unreachable", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Document>>> {
    Ok(web::Json(state.portfolio.projects().await?))
}
