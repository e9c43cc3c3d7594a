//! Portfolio content API library.
//!
//! Layout follows ports and adapters: `domain` holds validation, the
//! persistence-mapping layer, and the portfolio use cases; `inbound::http`
//! exposes them over actix-web; `outbound` implements the document store
//! port for PostgreSQL and for in-process use.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
