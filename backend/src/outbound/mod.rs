//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed document store using Diesel
//! - **memory**: in-process document store for tests and local runs
//!
//! Adapters are thin translators between domain documents and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
