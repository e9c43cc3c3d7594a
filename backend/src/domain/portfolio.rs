//! Portfolio use cases consumed by inbound adapters.
//!
//! Every operation is a pass-through to the mapping layer; the service holds
//! no mutable state between calls.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::diagnostics::{DiagnosticsReport, StoreConfigPresence, diagnose};
use super::persistence::{PersistenceError, RecordMapper};
use super::ports::Filter;
use super::records::{Developer, Message, Record};
use super::schema::Document;
use super::seed::{SeedContent, SeedOutcome, seed};
use super::{Error, RecordKind};

/// Most projects returned by a listing.
pub const PROJECT_LIST_LIMIT: usize = 50;

const DISABLED_PROFILE_BIO: &str = "Update database to enable persistence.";
const EMPTY_PROFILE_BIO: &str = "Use /seed to insert sample data.";

/// Profile returned to clients: the stored document, or a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileView {
    /// Document read from the developer collection.
    Stored(Document),
    /// Stand-in shown when no stored profile is available.
    Placeholder(Developer),
}

/// Portfolio application service.
#[derive(Debug, Clone)]
pub struct PortfolioService {
    mapper: RecordMapper,
    seed_content: SeedContent,
    config_presence: StoreConfigPresence,
}

impl PortfolioService {
    /// Build the service over an established mapper.
    #[must_use]
    pub const fn new(
        mapper: RecordMapper,
        seed_content: SeedContent,
        config_presence: StoreConfigPresence,
    ) -> Self {
        Self {
            mapper,
            seed_content,
            config_presence,
        }
    }

    /// Whether the store is connected.
    #[must_use]
    pub fn store_connected(&self) -> bool {
        self.mapper.connection().is_connected()
    }

    /// The developer profile, or a placeholder when the store is disabled or
    /// holds no profile.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the store fails.
    pub async fn profile(&self) -> Result<ProfileView, Error> {
        match self
            .mapper
            .read_one(RecordKind::Developer, &Filter::empty())
            .await
        {
            Ok(Some(document)) => Ok(ProfileView::Stored(document)),
            Ok(None) => Ok(ProfileView::Placeholder(Developer::placeholder(
                EMPTY_PROFILE_BIO,
            ))),
            Err(PersistenceError::StoreUnavailable) => Ok(ProfileView::Placeholder(
                Developer::placeholder(DISABLED_PROFILE_BIO),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Up to [`PROJECT_LIST_LIMIT`] projects in store order; empty when the
    /// store is disabled.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the store fails.
    pub async fn projects(&self) -> Result<Vec<Document>, Error> {
        match self
            .mapper
            .read_many(RecordKind::Project, &Filter::empty(), PROJECT_LIST_LIMIT)
            .await
        {
            Ok(projects) => Ok(projects),
            Err(PersistenceError::StoreUnavailable) => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Validate and store a contact message.
    ///
    /// A disabled store is reported before the body is looked at.
    ///
    /// # Errors
    ///
    /// Returns `service_unavailable` when the store is disabled and
    /// `invalid_request` when `input` is not a valid message.
    pub async fn submit_contact(&self, input: &Value) -> Result<(), Error> {
        if !self.store_connected() {
            return Err(PersistenceError::StoreUnavailable.into());
        }
        let message = Message::validate(input)?;
        let id = self.mapper.write(&message).await?;
        info!(id = %id, "contact message stored");
        Ok(())
    }

    /// Insert the sample profile and projects unless a profile exists.
    ///
    /// # Errors
    ///
    /// Returns `service_unavailable` when the store is disabled, or an
    /// [`Error`] when the store fails.
    pub async fn seed(&self) -> Result<SeedOutcome, Error> {
        Ok(seed(&self.mapper, &self.seed_content).await?)
    }

    /// Connectivity report; never fails.
    pub async fn diagnostics(&self) -> DiagnosticsReport {
        diagnose(&self.mapper, self.config_presence).await
    }
}
