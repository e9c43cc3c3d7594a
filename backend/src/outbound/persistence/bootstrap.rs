//! Startup wiring for the document store connection.

use tracing::{info, warn};

use crate::config::StoreSettings;
use crate::domain::StoreConnection;

use super::pg_document_store::PgDocumentStore;
use super::pool::PoolConfig;

/// Open the store described by `settings`.
///
/// Missing settings or a failed connection leave the store disabled; the
/// service still starts and reports the condition through diagnostics.
pub async fn connect_store(settings: &StoreSettings) -> StoreConnection {
    let target = match settings.target() {
        Ok(target) => target,
        Err(err) => {
            warn!(error = %err, "document store disabled");
            return StoreConnection::Disabled;
        }
    };

    let pool = PoolConfig::new(target).with_max_size(settings.pool_size);
    let store = match PgDocumentStore::connect(pool).await {
        Ok(store) => store,
        Err(err) => {
            warn!(error = %err, "document store connection failed; persistence disabled");
            return StoreConnection::Disabled;
        }
    };
    info!("document store enabled");
    StoreConnection::connected(store)
}
