//! Connectivity report backing the `/test` route.
//!
//! Diagnostics never fail: store errors are folded into the status text.

use serde::Serialize;
use tracing::warn;

use super::persistence::RecordMapper;

/// Most collection names included in a report.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

const ERROR_EXCERPT_CHARS: usize = 50;

/// Which store settings were supplied, independent of connection success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfigPresence {
    /// `DATABASE_URL` was set.
    pub url: bool,
    /// `DATABASE_NAME` was set.
    pub name: bool,
}

/// Diagnostic status returned by the `/test` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    backend: &'static str,
    database: String,
    database_url: &'static str,
    database_name: &'static str,
    connection_status: &'static str,
    collections: Vec<String>,
}

impl DiagnosticsReport {
    /// Store status text.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// `Connected` or `Not Connected`.
    #[must_use]
    pub const fn connection_status(&self) -> &str {
        self.connection_status
    }

    /// Up to ten collection names.
    #[must_use]
    pub fn collections(&self) -> &[String] {
        &self.collections
    }
}

const fn set_label(present: bool) -> &'static str {
    if present { "Set" } else { "Not Set" }
}

/// Check the store and summarise its state.
pub async fn diagnose(mapper: &RecordMapper, presence: StoreConfigPresence) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "Running",
        database: "Available but not initialized".to_owned(),
        database_url: set_label(presence.url),
        database_name: set_label(presence.name),
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    if !mapper.connection().is_connected() {
        return report;
    }

    report.connection_status = "Connected";
    let mut names = match mapper.collection_names().await {
        Ok(names) => names,
        Err(err) => {
            warn!(error = %err, "collection listing failed during diagnostics");
            let excerpt: String = err.to_string().chars().take(ERROR_EXCERPT_CHARS).collect();
            report.database = format!("Connected but Error: {excerpt}");
            return report;
        }
    };
    names.truncate(MAX_REPORTED_COLLECTIONS);
    report.collections = names;
    report.database = "Connected & Working".to_owned();
    report
}
