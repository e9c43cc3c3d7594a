//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers in [`crate::inbound::http::schemas`], so domain
//! types never depend on utoipa. The document backs Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::inbound::http::contact::StatusResponse;
use crate::inbound::http::schemas::{
    DeveloperSchema, DiagnosticsReportSchema, ErrorCodeSchema, ErrorSchema, MessageSchema,
    ProjectSchema, SocialLinksSchema,
};
use crate::inbound::http::seed::SeedResponse;
use crate::inbound::http::status::Greeting;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio content API",
        description = "Developer profile, projects, contact intake, seeding, and store diagnostics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::status::root,
        crate::inbound::http::status::diagnostics,
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::profile::list_projects,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::seed::seed_portfolio,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        SocialLinksSchema,
        DeveloperSchema,
        ProjectSchema,
        MessageSchema,
        DiagnosticsReportSchema,
        StatusResponse,
        SeedResponse,
        Greeting,
    )),
    tags(
        (name = "portfolio", description = "Profile, projects, contact, and seeding"),
        (name = "status", description = "Service greeting and store diagnostics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
