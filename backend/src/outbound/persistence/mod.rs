//! PostgreSQL persistence adapter using Diesel.
//!
//! Documents live in JSONB columns, one table per collection, reached through
//! `diesel-async` with `bb8` pooling. The adapter only translates between
//! rows and documents; validation stays in the domain.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{PgDocumentStore, PoolConfig};
//!
//! let store = PgDocumentStore::connect(PoolConfig::new("postgres://localhost/portfolio")).await?;
//! ```

mod bootstrap;
mod error_mapping;
mod pg_document_store;
mod pool;

pub use bootstrap::connect_store;
pub use pg_document_store::PgDocumentStore;
pub use pool::{DbPool, PoolConfig, PoolError, PoolStage};
