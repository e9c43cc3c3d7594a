//! Domain ports and supporting types for the hexagonal boundary.

mod document_store;
mod filter;

#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::{
    DocumentId, DocumentStore, DocumentStoreError, INTERNAL_ID_FIELD, StoredDocument,
};
pub use filter::{Filter, FilterValue};
