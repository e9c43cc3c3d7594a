//! In-process document store.
//!
//! Keeps documents in insertion order behind a lock. Clones share the same
//! collections, so a test can hold one handle while the service owns another.
//! A collection exists once something has been inserted into it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::RecordKind;
use crate::domain::ports::{
    DocumentId, DocumentStore, DocumentStoreError, Filter, StoredDocument,
};
use crate::domain::schema::Document;

type Collections = HashMap<RecordKind, Vec<StoredDocument>>;

/// Document store held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryDocumentStore {
    database_name: String,
    collections: Arc<RwLock<Collections>>,
}

impl MemoryDocumentStore {
    /// Create an empty store reporting `database_name`.
    #[must_use]
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of documents in the collection for `kind`.
    #[must_use]
    pub fn count(&self, kind: RecordKind) -> usize {
        self.collections
            .read()
            .map_or(0, |guard| guard.get(&kind).map_or(0, Vec::len))
    }

    fn poisoned() -> DocumentStoreError {
        DocumentStoreError::query("memory store lock poisoned")
    }

    fn matching(
        &self,
        kind: RecordKind,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        let guard = self.collections.read().map_err(|_| Self::poisoned())?;
        Ok(guard
            .get(&kind)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|doc| filter.matches(&doc.body))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(
        &self,
        kind: RecordKind,
        document: Document,
    ) -> Result<DocumentId, DocumentStoreError> {
        let id = DocumentId::random();
        let mut guard = self.collections.write().map_err(|_| Self::poisoned())?;
        guard.entry(kind).or_default().push(StoredDocument { id, body: document });
        Ok(id)
    }

    async fn find_one(
        &self,
        kind: RecordKind,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, DocumentStoreError> {
        Ok(self.matching(kind, filter, 1)?.into_iter().next())
    }

    async fn find_many(
        &self,
        kind: RecordKind,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        self.matching(kind, filter, limit)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, DocumentStoreError> {
        let guard = self.collections.read().map_err(|_| Self::poisoned())?;
        let mut names: Vec<String> = guard
            .iter()
            .filter(|(_, documents)| !documents.is_empty())
            .map(|(kind, _)| kind.collection().to_owned())
            .collect();
        names.sort_unstable();
        Ok(names)
    }

    fn database_name(&self) -> String {
        self.database_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn store() -> MemoryDocumentStore {
        MemoryDocumentStore::new("portfolio")
    }

    fn doc(name: &str) -> Document {
        json!({ "name": name }).as_object().cloned().expect("object literal")
    }

    #[rstest]
    #[tokio::test]
    async fn inserted_documents_are_found_in_order(store: MemoryDocumentStore) {
        for name in ["a", "b", "c"] {
            store
                .insert_one(RecordKind::Project, doc(name))
                .await
                .expect("insert");
        }
        let found = store
            .find_many(RecordKind::Project, &Filter::empty(), 2)
            .await
            .expect("find");
        let names: Vec<_> = found.iter().map(|d| d.body.get("name").cloned()).collect();
        assert_eq!(names, [Some(json!("a")), Some(json!("b"))]);
    }

    #[rstest]
    #[tokio::test]
    async fn filters_select_matching_documents(store: MemoryDocumentStore) {
        store.insert_one(RecordKind::Project, doc("a")).await.expect("insert");
        store.insert_one(RecordKind::Project, doc("b")).await.expect("insert");

        let found = store
            .find_one(RecordKind::Project, &Filter::empty().field_eq("name", "b"))
            .await
            .expect("find")
            .expect("match");
        assert_eq!(found.body, doc("b"));
    }

    #[rstest]
    #[tokio::test]
    async fn collections_are_isolated(store: MemoryDocumentStore) {
        store.insert_one(RecordKind::Message, doc("m")).await.expect("insert");
        let found = store
            .find_one(RecordKind::Developer, &Filter::empty())
            .await
            .expect("find");
        assert!(found.is_none());
        assert_eq!(store.count(RecordKind::Message), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn collection_names_list_non_empty_collections_sorted(store: MemoryDocumentStore) {
        assert!(store.list_collection_names().await.expect("names").is_empty());
        store.insert_one(RecordKind::Project, doc("p")).await.expect("insert");
        store.insert_one(RecordKind::Developer, doc("d")).await.expect("insert");
        assert_eq!(
            store.list_collection_names().await.expect("names"),
            ["developer", "project"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn clones_share_state(store: MemoryDocumentStore) {
        let other = store.clone();
        other.insert_one(RecordKind::Project, doc("p")).await.expect("insert");
        assert_eq!(store.count(RecordKind::Project), 1);
        assert_eq!(store.database_name(), "portfolio");
    }
}
