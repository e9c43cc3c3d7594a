//! PostgreSQL-backed document store.
//!
//! Each collection is a table holding one JSONB document per row plus a
//! store-assigned `_id`. Tables are created on connect when missing. Equality
//! filters become JSONB containment (`document @> $1`). No ordering clause is
//! applied, so listings come back in heap order.

use async_trait::async_trait;
use diesel::QueryableByName;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Jsonb, Text};
use diesel_async::RunQueryDsl;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::domain::RecordKind;
use crate::domain::ports::{
    DocumentId, DocumentStore, DocumentStoreError, Filter, StoredDocument,
};
use crate::domain::schema::Document;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::pool::{DbPool, PoolConfig};

const LIST_COLLECTIONS_SQL: &str = r"
SELECT table_name::text AS name
FROM information_schema.tables
WHERE table_schema = current_schema() AND table_type = 'BASE TABLE'
ORDER BY table_name
";

const CURRENT_DATABASE_SQL: &str = "SELECT current_database()::text AS name";

#[derive(QueryableByName)]
struct DocumentRow {
    #[diesel(sql_type = diesel::sql_types::Uuid, column_name = _id)]
    id: Uuid,
    #[diesel(sql_type = Jsonb)]
    document: Value,
}

#[derive(QueryableByName)]
struct IdRow {
    #[diesel(sql_type = diesel::sql_types::Uuid, column_name = _id)]
    id: Uuid,
}

#[derive(QueryableByName)]
struct NameRow {
    #[diesel(sql_type = Text)]
    name: String,
}

fn create_table_sql(kind: RecordKind) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (\
         _id UUID PRIMARY KEY DEFAULT gen_random_uuid(), \
         document JSONB NOT NULL)",
        table = kind.collection()
    )
}

fn insert_sql(kind: RecordKind) -> String {
    format!(
        "INSERT INTO {table} (document) VALUES ($1) RETURNING _id",
        table = kind.collection()
    )
}

fn select_sql(kind: RecordKind) -> String {
    format!(
        "SELECT _id, document FROM {table} WHERE document @> $1 LIMIT $2",
        table = kind.collection()
    )
}

fn into_stored(kind: RecordKind, row: DocumentRow) -> Result<StoredDocument, DocumentStoreError> {
    match row.document {
        Value::Object(body) => Ok(StoredDocument {
            id: DocumentId::new(row.id),
            body,
        }),
        other => Err(DocumentStoreError::query(format!(
            "{kind} row {} holds a non-object document: {other}",
            row.id
        ))),
    }
}

/// Document store over a Diesel connection pool.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
    database_name: String,
}

impl PgDocumentStore {
    /// Open the pool, create missing collection tables, and record the
    /// database name.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Connection`] when the server cannot be
    /// reached and [`DocumentStoreError::Query`] when table creation fails.
    pub async fn connect(config: PoolConfig) -> Result<Self, DocumentStoreError> {
        let pool = DbPool::new(config).await.map_err(map_pool_error)?;
        let store = Self {
            database_name: current_database(&pool).await?,
            pool,
        };
        store.ensure_collections().await?;
        info!(database = %store.database_name, "document store connected");
        Ok(store)
    }

    async fn ensure_collections(&self) -> Result<(), DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        for kind in RecordKind::ALL {
            sql_query(create_table_sql(kind))
                .execute(&mut conn)
                .await
                .map_err(|err| map_diesel_error(err, "create collection"))?;
        }
        Ok(())
    }

    async fn select(
        &self,
        kind: RecordKind,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        let row_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<DocumentRow> = sql_query(select_sql(kind))
            .bind::<Jsonb, _>(filter.to_json())
            .bind::<BigInt, _>(row_limit)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "select documents"))?;
        rows.into_iter().map(|row| into_stored(kind, row)).collect()
    }
}

async fn current_database(pool: &DbPool) -> Result<String, DocumentStoreError> {
    let mut conn = pool.get().await.map_err(map_pool_error)?;
    let row: NameRow = sql_query(CURRENT_DATABASE_SQL)
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, "read database name"))?;
    Ok(row.name)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(
        &self,
        kind: RecordKind,
        document: Document,
    ) -> Result<DocumentId, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: IdRow = sql_query(insert_sql(kind))
            .bind::<Jsonb, _>(Value::Object(document))
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "insert document"))?;
        Ok(DocumentId::new(row.id))
    }

    async fn find_one(
        &self,
        kind: RecordKind,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, DocumentStoreError> {
        Ok(self.select(kind, filter, 1).await?.into_iter().next())
    }

    async fn find_many(
        &self,
        kind: RecordKind,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        self.select(kind, filter, limit).await
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<NameRow> = sql_query(LIST_COLLECTIONS_SQL)
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list collections"))?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }

    fn database_name(&self) -> String {
        self.database_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(RecordKind::Developer, "developer")]
    #[case(RecordKind::Project, "project")]
    #[case(RecordKind::Message, "message")]
    fn statements_target_the_mapped_table(#[case] kind: RecordKind, #[case] table: &str) {
        assert!(create_table_sql(kind).contains(&format!("EXISTS {table} (")));
        assert!(insert_sql(kind).starts_with(&format!("INSERT INTO {table} ")));
        assert!(select_sql(kind).contains(&format!("FROM {table} WHERE document @> $1")));
    }

    #[rstest]
    fn object_rows_become_stored_documents() {
        let id = Uuid::new_v4();
        let stored = into_stored(
            RecordKind::Project,
            DocumentRow {
                id,
                document: json!({ "name": "P" }),
            },
        )
        .expect("object row");
        assert_eq!(stored.id, DocumentId::new(id));
        assert_eq!(stored.body.get("name"), Some(&json!("P")));
    }

    #[rstest]
    fn non_object_rows_are_query_errors() {
        let err = into_stored(
            RecordKind::Project,
            DocumentRow {
                id: Uuid::nil(),
                document: json!([1, 2]),
            },
        )
        .expect_err("array row");
        assert!(matches!(err, DocumentStoreError::Query { .. }));
    }
}
