//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their shape and register under the domain type name
//! via `#[schema(as = ...)]`.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The document store is not configured or unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "email must be a valid email address")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending field path and validation code, when applicable.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::SocialLinks`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SocialLinks)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SocialLinksSchema {
    /// GitHub profile URL.
    #[schema(example = "https://github.com/example")]
    github: Option<String>,
    /// LinkedIn profile URL.
    linkedin: Option<String>,
    /// Twitter profile URL.
    twitter: Option<String>,
    /// Personal website URL.
    website: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Developer`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Developer)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DeveloperSchema {
    /// Display name.
    #[schema(example = "Alex Carter")]
    name: String,
    /// Job title.
    #[schema(example = "Senior Django Developer")]
    title: String,
    /// Short biography.
    bio: String,
    /// Free-form location.
    location: Option<String>,
    /// Years of professional experience.
    #[schema(minimum = 0, maximum = 60)]
    years_experience: Option<u8>,
    /// Ordered skill list.
    skills: Vec<String>,
    /// Social links.
    social: SocialLinksSchema,
    /// Public contact email.
    email: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Project`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Project)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ProjectSchema {
    /// Project name.
    #[schema(example = "Headless CMS")]
    name: String,
    /// Project summary.
    description: String,
    /// Technologies used.
    tech_stack: Vec<String>,
    /// Source repository URL.
    repo_url: Option<String>,
    /// Deployed site URL.
    live_url: Option<String>,
    /// Screenshot URL.
    image_url: Option<String>,
    /// Notable achievements.
    highlights: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::Message`], the contact request body.
#[derive(ToSchema)]
#[schema(as = crate::domain::Message)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MessageSchema {
    /// Sender name.
    #[schema(example = "Sam")]
    name: String,
    /// Sender email.
    #[schema(example = "sam@example.com")]
    email: String,
    /// Message body.
    #[schema(example = "Are you available for a contract?")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::DiagnosticsReport`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DiagnosticsReport)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DiagnosticsReportSchema {
    /// Always `Running`.
    #[schema(example = "Running")]
    backend: String,
    /// Store status text.
    #[schema(example = "Connected & Working")]
    database: String,
    /// `Set` or `Not Set`.
    #[schema(example = "Set")]
    database_url: String,
    /// `Set` or `Not Set`.
    #[schema(example = "Set")]
    database_name: String,
    /// `Connected` or `Not Connected`.
    #[schema(example = "Connected")]
    connection_status: String,
    /// Up to ten collection names.
    collections: Vec<String>,
}
