//! One-time bootstrap of the sample profile and projects.
//!
//! Seeding is not transactional. Two concurrent seeds can both observe an
//! empty developer collection and insert duplicate profiles, and a failure
//! midway leaves earlier inserts in place.

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use super::persistence::{PersistenceError, RecordMapper};
use super::ports::Filter;
use super::records::{Developer, Project, Record};
use super::schema::ValidationError;
use super::RecordKind;

const BUNDLED_SEED: &str = include_str!("../../fixtures/seed/portfolio.json");

/// Errors raised while loading seed content.
#[derive(Debug, Error)]
pub enum SeedContentError {
    /// The fixture is not valid JSON.
    #[error("seed content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A top-level section is missing or has the wrong shape.
    #[error("seed content must contain {section}")]
    MissingSection {
        /// Expected section.
        section: &'static str,
    },
    /// A record failed validation.
    #[error("seed {kind} record is invalid: {source}")]
    Invalid {
        /// Kind of the offending record.
        kind: RecordKind,
        /// Validation failure.
        source: ValidationError,
    },
}

/// Validated sample content inserted by the seed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedContent {
    developer: Developer,
    projects: Vec<Project>,
}

impl SeedContent {
    /// Parse and validate seed content from a JSON document of the form
    /// `{"developer": {...}, "projects": [{...}, ...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedContentError`] if the JSON is malformed, a section is
    /// missing, or any record fails validation.
    pub fn from_json(raw: &str) -> Result<Self, SeedContentError> {
        let root: Value = serde_json::from_str(raw)?;
        let developer_input = root
            .get("developer")
            .ok_or(SeedContentError::MissingSection {
                section: "a developer object",
            })?;
        let project_inputs = root
            .get("projects")
            .and_then(Value::as_array)
            .ok_or(SeedContentError::MissingSection {
                section: "a projects array",
            })?;

        let developer =
            Developer::validate(developer_input).map_err(|source| SeedContentError::Invalid {
                kind: RecordKind::Developer,
                source,
            })?;
        let projects = project_inputs
            .iter()
            .map(|input| {
                Project::validate(input).map_err(|source| SeedContentError::Invalid {
                    kind: RecordKind::Project,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            developer,
            projects,
        })
    }

    /// Content compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`SeedContentError`] if the bundled fixture is invalid.
    pub fn bundled() -> Result<Self, SeedContentError> {
        Self::from_json(BUNDLED_SEED)
    }

    /// Sample developer profile.
    #[must_use]
    pub const fn developer(&self) -> &Developer {
        &self.developer
    }

    /// Sample projects in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

/// Result of a seed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Profile and projects were inserted.
    Applied {
        /// Number of projects inserted.
        projects: usize,
    },
    /// A profile already existed; nothing was written.
    AlreadySeeded,
}

impl SeedOutcome {
    /// Human-readable summary returned to callers.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Applied { .. } => "Seeded profile and projects",
            Self::AlreadySeeded => "Profile already exists",
        }
    }
}

/// Insert `content` unless a developer profile already exists.
///
/// # Errors
///
/// Returns [`PersistenceError`] when the store is disabled or fails. Records
/// inserted before the failure stay in place.
pub async fn seed(
    mapper: &RecordMapper,
    content: &SeedContent,
) -> Result<SeedOutcome, PersistenceError> {
    if mapper
        .read_one(RecordKind::Developer, &Filter::empty())
        .await?
        .is_some()
    {
        info!("developer profile present; skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    mapper.write(content.developer()).await?;
    for project in content.projects() {
        mapper.write(project).await?;
    }

    let outcome = SeedOutcome::Applied {
        projects: content.projects().len(),
    };
    info!(projects = content.projects().len(), "seeded profile and projects");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreConnection;
    use crate::outbound::memory::MemoryDocumentStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn content() -> SeedContent {
        SeedContent::bundled().expect("bundled seed validates")
    }

    #[fixture]
    fn mapper() -> RecordMapper {
        RecordMapper::new(StoreConnection::connected(MemoryDocumentStore::new("portfolio")))
    }

    #[rstest]
    fn bundled_content_has_profile_and_three_projects(content: SeedContent) {
        assert_eq!(content.developer().name(), "Alex Carter");
        assert_eq!(content.developer().years_experience(), Some(7));
        assert_eq!(content.developer().social().twitter(), None);
        let names: Vec<&str> = content.projects().iter().map(Project::name).collect();
        assert_eq!(
            names,
            [
                "SaaS Subscription Platform",
                "Real-time Analytics Dashboard",
                "Headless CMS"
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn seeding_twice_inserts_once(mapper: RecordMapper, content: SeedContent) {
        let first = seed(&mapper, &content).await.expect("first seed");
        let second = seed(&mapper, &content).await.expect("second seed");

        assert_eq!(first, SeedOutcome::Applied { projects: 3 });
        assert_eq!(second, SeedOutcome::AlreadySeeded);

        let developers = mapper
            .read_many(RecordKind::Developer, &Filter::empty(), 10)
            .await
            .expect("list developers");
        let projects = mapper
            .read_many(RecordKind::Project, &Filter::empty(), 10)
            .await
            .expect("list projects");
        assert_eq!(developers.len(), 1);
        assert_eq!(projects.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn seeding_a_disabled_store_fails(content: SeedContent) {
        let mapper = RecordMapper::new(StoreConnection::Disabled);
        let err = seed(&mapper, &content).await.expect_err("store disabled");
        assert_eq!(err, PersistenceError::StoreUnavailable);
    }

    #[rstest]
    #[case(r#"{"projects": []}"#, "a developer object")]
    #[case(r#"{"developer": {"name": "N", "title": "T", "bio": "B"}}"#, "a projects array")]
    fn missing_sections_are_reported(#[case] raw: &str, #[case] section: &str) {
        match SeedContent::from_json(raw) {
            Err(SeedContentError::MissingSection { section: found }) => assert_eq!(found, section),
            other => panic!("expected missing section, got {other:?}"),
        }
    }

    #[rstest]
    fn invalid_project_is_reported_with_its_kind() {
        let raw = r#"{
            "developer": {"name": "N", "title": "T", "bio": "B"},
            "projects": [{"name": "P", "description": "D", "repo_url": "nope"}]
        }"#;
        match SeedContent::from_json(raw) {
            Err(SeedContentError::Invalid { kind, source }) => {
                assert_eq!(kind, RecordKind::Project);
                assert_eq!(source.field(), Some("repo_url"));
            }
            other => panic!("expected invalid project, got {other:?}"),
        }
    }

    #[rstest]
    #[case(SeedOutcome::Applied { projects: 3 }, "Seeded profile and projects")]
    #[case(SeedOutcome::AlreadySeeded, "Profile already exists")]
    fn outcome_messages(#[case] outcome: SeedOutcome, #[case] message: &str) {
        assert_eq!(outcome.message(), message);
    }
}
