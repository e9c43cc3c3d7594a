//! Port for schema-flexible document storage.
//!
//! A document store holds self-describing JSON documents in named
//! collections, one per [`RecordKind`]. The store assigns every inserted
//! document an internal identifier which it reports back through
//! [`StoredDocument::id`]; the identifier never appears inside the body.

use std::fmt;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::RecordKind;
use crate::domain::schema::Document;

use super::Filter;

/// Name the store uses for its internal identifier.
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Errors raised by document store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentStoreError {
    /// The store could not be reached or a connection could not be checked
    /// out.
    #[error("document store connection failed: {message}")]
    Connection {
        /// Adapter-supplied description.
        message: String,
    },
    /// A statement failed or its result could not be read.
    #[error("document store query failed: {message}")]
    Query {
        /// Adapter-supplied description.
        message: String,
    },
}

impl DocumentStoreError {
    /// The store is unreachable.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// A statement against a reachable store failed.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Whether retrying later might succeed without operator action.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Store-assigned identifier of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Wrap a raw identifier produced by an adapter.
    #[must_use]
    pub const fn new(raw: Uuid) -> Self {
        Self(raw)
    }

    /// Mint a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A document as returned by the store: identifier plus body.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Store-assigned identifier.
    pub id: DocumentId,
    /// Document body, which may still carry an `_id` key if another writer
    /// put one there.
    pub body: Document,
}

impl StoredDocument {
    /// Discard the identifier and any `_id` key left in the body.
    #[must_use]
    pub fn into_body(self) -> Document {
        let mut body = self.body;
        body.remove(INTERNAL_ID_FIELD);
        body
    }
}

/// Raw access to the collections backing each record kind.
///
/// Adapters insert unconditionally and return documents in store-native
/// order; they never validate bodies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into the collection for `kind`.
    async fn insert_one(
        &self,
        kind: RecordKind,
        document: Document,
    ) -> Result<DocumentId, DocumentStoreError>;

    /// Return the first document matching `filter`, if any.
    async fn find_one(
        &self,
        kind: RecordKind,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, DocumentStoreError>;

    /// Return at most `limit` documents matching `filter`.
    async fn find_many(
        &self,
        kind: RecordKind,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, DocumentStoreError>;

    /// Names of the collections currently present, sorted.
    async fn list_collection_names(&self) -> Result<Vec<String>, DocumentStoreError>;

    /// Name of the database the store is bound to.
    fn database_name(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn into_body_strips_internal_identifier() {
        let body = json!({ "_id": "stale", "name": "Ada" })
            .as_object()
            .cloned()
            .expect("object literal");
        let stored = StoredDocument {
            id: DocumentId::random(),
            body,
        };
        let stripped = stored.into_body();
        assert!(!stripped.contains_key(INTERNAL_ID_FIELD));
        assert_eq!(stripped.get("name"), Some(&json!("Ada")));
    }

    #[rstest]
    fn error_constructors_format_messages() {
        assert_eq!(
            DocumentStoreError::query("syntax error").to_string(),
            "document store query failed: syntax error"
        );
        assert_eq!(
            DocumentStoreError::connection("refused").to_string(),
            "document store connection failed: refused"
        );
    }

    #[rstest]
    #[case(DocumentStoreError::connection("pool timed out"), true)]
    #[case(DocumentStoreError::query("relation missing"), false)]
    fn only_connection_failures_are_transient(
        #[case] err: DocumentStoreError,
        #[case] transient: bool,
    ) {
        assert_eq!(err.is_transient(), transient);
    }
}
