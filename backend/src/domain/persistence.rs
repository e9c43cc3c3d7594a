//! Persistence-mapping layer between typed records and stored documents.
//!
//! [`RecordMapper`] owns the [`StoreConnection`] opened at startup. When the
//! connection is disabled every operation fails with
//! [`PersistenceError::StoreUnavailable`] before touching any store. Store
//! failures propagate unchanged; nothing is retried.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{DocumentId, DocumentStore, DocumentStoreError, Filter, StoredDocument};
use super::records::{Record, ValidatedRecord};
use super::schema::{Document, ValidationError};
use super::{Error, RecordKind};

/// Message reported whenever the store was never connected.
pub const STORE_NOT_CONFIGURED: &str = "Database not configured";

/// Message reported when a connected store cannot be reached. Driver text
/// names hosts and addresses, so it is logged and never returned.
pub const STORE_UNREACHABLE: &str = "Document store unavailable";

/// Handle to the document store, established once at startup.
#[derive(Clone)]
pub enum StoreConnection {
    /// No store: configuration absent or the connection attempt failed.
    Disabled,
    /// A live store shared by every request.
    Connected(Arc<dyn DocumentStore>),
}

impl StoreConnection {
    /// Wrap a connected store.
    #[must_use]
    pub fn connected(store: impl DocumentStore + 'static) -> Self {
        Self::Connected(Arc::new(store))
    }

    /// Whether a store is available.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// The connected store, if any.
    #[must_use]
    pub const fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            Self::Connected(store) => Some(store),
            Self::Disabled => None,
        }
    }
}

impl std::fmt::Debug for StoreConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => f.write_str("StoreConnection::Disabled"),
            Self::Connected(store) => f
                .debug_tuple("StoreConnection::Connected")
                .field(&store.database_name())
                .finish(),
        }
    }
}

/// Failures raised by the mapping layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PersistenceError {
    /// The store was never connected.
    #[error("Database not configured")]
    StoreUnavailable,
    /// The store reported a failure.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
    /// A record could not be encoded, or a stored document did not decode.
    #[error("{kind} document could not be mapped: {source}")]
    Mapping {
        /// Collection involved.
        kind: RecordKind,
        /// Underlying mapping failure.
        source: ValidationError,
    },
}

impl From<PersistenceError> for Error {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::StoreUnavailable => Self::service_unavailable(STORE_NOT_CONFIGURED),
            PersistenceError::Store(store) if store.is_transient() => {
                warn!(error = %store, "document store unreachable");
                Self::service_unavailable(STORE_UNREACHABLE)
            }
            PersistenceError::Store(store) => Self::internal(store.to_string()),
            PersistenceError::Mapping { kind, source } => {
                Self::internal(format!("{kind} document could not be mapped: {source}"))
            }
        }
    }
}

/// Maps validated records to stored documents and back.
///
/// # Examples
/// ```
/// use backend::domain::{RecordMapper, StoreConnection, PersistenceError, RecordKind};
/// use backend::domain::ports::Filter;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mapper = RecordMapper::new(StoreConnection::Disabled);
/// let err = mapper
///     .read_one(RecordKind::Developer, &Filter::empty())
///     .await
///     .expect_err("store is disabled");
/// assert_eq!(err, PersistenceError::StoreUnavailable);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct RecordMapper {
    connection: StoreConnection,
}

impl RecordMapper {
    /// Create a mapper over an established connection.
    #[must_use]
    pub const fn new(connection: StoreConnection) -> Self {
        Self { connection }
    }

    /// The underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &StoreConnection {
        &self.connection
    }

    fn store(&self) -> Result<&Arc<dyn DocumentStore>, PersistenceError> {
        self.connection
            .store()
            .ok_or(PersistenceError::StoreUnavailable)
    }

    /// Persist a validated record. Inserts unconditionally.
    ///
    /// # Errors
    ///
    /// [`PersistenceError::StoreUnavailable`] when disabled, or the store's
    /// own failure.
    pub async fn write<R: Record + Sync>(&self, record: &R) -> Result<DocumentId, PersistenceError> {
        let store = self.store()?;
        let document = record.to_document().map_err(|source| PersistenceError::Mapping {
            kind: R::KIND,
            source,
        })?;
        insert(store.as_ref(), R::KIND, document).await
    }

    /// Persist a record validated through [`crate::domain::validate_input`].
    ///
    /// # Errors
    ///
    /// See [`RecordMapper::write`].
    pub async fn write_validated(
        &self,
        record: &ValidatedRecord,
    ) -> Result<DocumentId, PersistenceError> {
        let store = self.store()?;
        let kind = record.kind();
        let document = record
            .to_document()
            .map_err(|source| PersistenceError::Mapping { kind, source })?;
        insert(store.as_ref(), kind, document).await
    }

    /// First document matching `filter`, with `_id` stripped.
    ///
    /// # Errors
    ///
    /// [`PersistenceError::StoreUnavailable`] when disabled, or the store's
    /// own failure.
    pub async fn read_one(
        &self,
        kind: RecordKind,
        filter: &Filter,
    ) -> Result<Option<Document>, PersistenceError> {
        let store = self.store()?;
        let found = store.find_one(kind, filter).await.inspect_err(|err| {
            warn!(collection = kind.collection(), error = %err, "document lookup failed");
        })?;
        Ok(found.map(StoredDocument::into_body))
    }

    /// Up to `limit` documents matching `filter` in store order, each with
    /// `_id` stripped.
    ///
    /// # Errors
    ///
    /// [`PersistenceError::StoreUnavailable`] when disabled, or the store's
    /// own failure.
    pub async fn read_many(
        &self,
        kind: RecordKind,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, PersistenceError> {
        let store = self.store()?;
        let found = store
            .find_many(kind, filter, limit)
            .await
            .inspect_err(|err| {
                warn!(collection = kind.collection(), error = %err, "document listing failed");
            })?;
        debug!(
            collection = kind.collection(),
            count = found.len(),
            limit,
            "documents listed"
        );
        Ok(found.into_iter().map(StoredDocument::into_body).collect())
    }

    /// Typed variant of [`RecordMapper::read_one`].
    ///
    /// # Errors
    ///
    /// As [`RecordMapper::read_one`], plus [`PersistenceError::Mapping`] when
    /// the stored document does not decode.
    pub async fn read_one_as<R: Record>(
        &self,
        filter: &Filter,
    ) -> Result<Option<R>, PersistenceError> {
        self.read_one(R::KIND, filter)
            .await?
            .map(decode::<R>)
            .transpose()
    }

    /// Typed variant of [`RecordMapper::read_many`].
    ///
    /// # Errors
    ///
    /// As [`RecordMapper::read_many`], plus [`PersistenceError::Mapping`] for
    /// the first document that does not decode.
    pub async fn read_many_as<R: Record>(
        &self,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<R>, PersistenceError> {
        self.read_many(R::KIND, filter, limit)
            .await?
            .into_iter()
            .map(decode::<R>)
            .collect()
    }

    /// Collection names present in the store.
    ///
    /// # Errors
    ///
    /// [`PersistenceError::StoreUnavailable`] when disabled, or the store's
    /// own failure.
    pub async fn collection_names(&self) -> Result<Vec<String>, PersistenceError> {
        let store = self.store()?;
        Ok(store.list_collection_names().await?)
    }
}

async fn insert(
    store: &dyn DocumentStore,
    kind: RecordKind,
    document: Document,
) -> Result<DocumentId, PersistenceError> {
    let id = store.insert_one(kind, document).await.inspect_err(|err| {
        warn!(collection = kind.collection(), error = %err, "document insert failed");
    })?;
    debug!(collection = kind.collection(), id = %id, "document inserted");
    Ok(id)
}

fn decode<R: Record>(document: Document) -> Result<R, PersistenceError> {
    R::from_document(document).map_err(|source| PersistenceError::Mapping {
        kind: R::KIND,
        source,
    })
}
