//! Domain primitives and use cases.
//!
//! Purpose: validate portfolio records against static schema tables, map
//! them to and from schema-flexible documents, and expose the portfolio use
//! cases. Nothing here depends on actix or on a concrete store.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error envelope.
//! - RecordKind: record kind to collection mapping.
//! - schema: field tables and the generic validator.
//! - Developer / Project / Message: typed records.
//! - RecordMapper / StoreConnection: persistence-mapping layer.
//! - PortfolioService: use cases consumed by the HTTP adapter.

pub mod diagnostics;
pub mod error;
pub mod persistence;
pub mod portfolio;
pub mod ports;
pub mod record_kind;
pub mod records;
pub mod schema;
pub mod seed;
pub mod trace_id;

pub use self::diagnostics::{DiagnosticsReport, MAX_REPORTED_COLLECTIONS, StoreConfigPresence};
pub use self::error::{Error, ErrorCode};
pub use self::persistence::{
    PersistenceError, RecordMapper, STORE_NOT_CONFIGURED, STORE_UNREACHABLE, StoreConnection,
};
pub use self::portfolio::{PROJECT_LIST_LIMIT, PortfolioService, ProfileView};
pub use self::record_kind::RecordKind;
pub use self::records::{
    Developer, Message, Project, Record, SocialLinks, ValidatedRecord, validate_input,
};
pub use self::seed::{SeedContent, SeedContentError, SeedOutcome};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
