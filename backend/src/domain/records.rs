//! Typed views over validated documents.
//!
//! Records are only constructed from documents that passed [`validate`], so
//! their fields always satisfy the schema table for their kind. Fields are
//! private; read them through accessors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RecordKind;
use super::schema::{Document, Schema, ValidationError, schema_for, validate};

/// Behaviour shared by every persisted record type.
pub trait Record: Serialize + DeserializeOwned + Sized {
    /// Record kind, which selects both the schema and the collection.
    const KIND: RecordKind;

    /// Schema table for this record.
    #[must_use]
    fn schema() -> &'static Schema {
        schema_for(Self::KIND)
    }

    /// Validate raw input and build the typed record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `input` violates the schema.
    fn validate(input: &Value) -> Result<Self, ValidationError> {
        let document = validate(Self::schema(), input)?;
        Self::from_document(document)
    }

    /// Decode a stored document (without `_id`).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Malformed`] when the document does not fit
    /// the record shape.
    fn from_document(document: Document) -> Result<Self, ValidationError> {
        serde_json::from_value(Value::Object(document)).map_err(|err| {
            ValidationError::Malformed {
                schema: Self::schema().name,
                message: err.to_string(),
            }
        })
    }

    /// Encode the record as a document with every declared field present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Malformed`] if serialisation does not yield
    /// a JSON object.
    fn to_document(&self) -> Result<Document, ValidationError> {
        let malformed = |message: String| ValidationError::Malformed {
            schema: Self::schema().name,
            message,
        };
        match serde_json::to_value(self) {
            Ok(Value::Object(document)) => Ok(document),
            Ok(other) => Err(malformed(format!("expected an object, found {other}"))),
            Err(err) => Err(malformed(err.to_string())),
        }
    }
}

/// Optional social profile links; every entry is an http(s) URL or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    github: Option<String>,
    #[serde(default)]
    linkedin: Option<String>,
    #[serde(default)]
    twitter: Option<String>,
    #[serde(default)]
    website: Option<String>,
}

impl SocialLinks {
    /// GitHub profile URL.
    #[must_use]
    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    /// LinkedIn profile URL.
    #[must_use]
    pub fn linkedin(&self) -> Option<&str> {
        self.linkedin.as_deref()
    }

    /// Twitter profile URL.
    #[must_use]
    pub fn twitter(&self) -> Option<&str> {
        self.twitter.as_deref()
    }

    /// Personal website URL.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }
}

/// The developer profile.
///
/// # Examples
/// ```
/// use backend::domain::{Developer, Record};
/// use serde_json::json;
///
/// let developer = Developer::validate(&json!({
///     "name": "Ada",
///     "title": "Engineer",
///     "bio": "Writes compilers."
/// }))
/// .expect("valid developer");
/// assert_eq!(developer.years_experience(), Some(0));
/// assert!(developer.skills().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    name: String,
    title: String,
    bio: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    years_experience: Option<u8>,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    social: SocialLinks,
    #[serde(default)]
    email: Option<String>,
}

impl Developer {
    /// Stand-in profile returned when no stored profile can be shown.
    #[must_use]
    pub fn placeholder(bio: impl Into<String>) -> Self {
        Self {
            name: "Your Name".to_owned(),
            title: "Django Developer".to_owned(),
            bio: bio.into(),
            location: None,
            years_experience: Some(0),
            skills: Vec::new(),
            social: SocialLinks::default(),
            email: None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short biography.
    #[must_use]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Free-form location.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Years of professional experience, between 0 and 60.
    #[must_use]
    pub const fn years_experience(&self) -> Option<u8> {
        self.years_experience
    }

    /// Ordered skill list.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Social links.
    #[must_use]
    pub const fn social(&self) -> &SocialLinks {
        &self.social
    }

    /// Public contact email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Record for Developer {
    const KIND: RecordKind = RecordKind::Developer;
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    name: String,
    description: String,
    #[serde(default)]
    tech_stack: Vec<String>,
    #[serde(default)]
    repo_url: Option<String>,
    #[serde(default)]
    live_url: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    highlights: Vec<String>,
}

impl Project {
    /// Project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project summary.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Technologies used, in display order.
    #[must_use]
    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    /// Source repository URL.
    #[must_use]
    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref()
    }

    /// Deployed site URL.
    #[must_use]
    pub fn live_url(&self) -> Option<&str> {
        self.live_url.as_deref()
    }

    /// Screenshot URL.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Notable achievements, in display order.
    #[must_use]
    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }
}

impl Record for Project {
    const KIND: RecordKind = RecordKind::Project;
}

/// A contact message left by a visitor. Write-only: never read back through
/// the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    name: String,
    email: String,
    message: String,
}

impl Message {
    /// Sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sender email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.message
    }
}

impl Record for Message {
    const KIND: RecordKind = RecordKind::Message;
}

/// A validated record of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedRecord {
    /// Developer profile.
    Developer(Developer),
    /// Project.
    Project(Project),
    /// Contact message.
    Message(Message),
}

impl ValidatedRecord {
    /// Kind of the wrapped record.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Developer(_) => RecordKind::Developer,
            Self::Project(_) => RecordKind::Project,
            Self::Message(_) => RecordKind::Message,
        }
    }

    /// Encode the wrapped record as a document.
    ///
    /// # Errors
    ///
    /// See [`Record::to_document`].
    pub fn to_document(&self) -> Result<Document, ValidationError> {
        match self {
            Self::Developer(record) => record.to_document(),
            Self::Project(record) => record.to_document(),
            Self::Message(record) => record.to_document(),
        }
    }
}

/// Validate raw input as a record of `kind`.
///
/// # Errors
///
/// Returns [`ValidationError`] when `input` violates the schema for `kind`.
pub fn validate_input(kind: RecordKind, input: &Value) -> Result<ValidatedRecord, ValidationError> {
    Ok(match kind {
        RecordKind::Developer => ValidatedRecord::Developer(Developer::validate(input)?),
        RecordKind::Project => ValidatedRecord::Project(Project::validate(input)?),
        RecordKind::Message => ValidatedRecord::Message(Message::validate(input)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(RecordKind::Developer, json!({
        "name": "Ada",
        "title": "Engineer",
        "bio": "Compilers.",
        "years_experience": 12,
        "skills": ["Rust"],
        "social": { "github": "https://github.com/ada" },
    }))]
    #[case(RecordKind::Project, json!({
        "name": "Analytical Engine",
        "description": "Mechanical computer.",
        "repo_url": "https://example.com/engine",
        "highlights": ["First program"],
    }))]
    #[case(RecordKind::Message, json!({
        "name": "Sam",
        "email": "sam@example.com",
        "message": "Hello",
    }))]
    fn typed_document_equals_validated_document(#[case] kind: RecordKind, #[case] input: Value) {
        let validated = validate(schema_for(kind), &input).expect("input validates");
        let record = validate_input(kind, &input).expect("record builds");
        assert_eq!(record.kind(), kind);
        assert_eq!(record.to_document().expect("record encodes"), validated);
    }

    #[rstest]
    fn placeholder_satisfies_developer_schema() {
        let placeholder = Developer::placeholder("Use /seed to insert sample data.");
        let document = placeholder.to_document().expect("placeholder encodes");
        let revalidated = Developer::validate(&Value::Object(document)).expect("schema holds");
        assert_eq!(revalidated, placeholder);
        assert_eq!(revalidated.name(), "Your Name");
        assert_eq!(revalidated.title(), "Django Developer");
    }

    #[rstest]
    fn from_document_reports_malformed_shape() {
        let document = json!({ "name": 1 }).as_object().cloned().expect("object");
        let err = Project::from_document(document).expect_err("shape mismatch");
        assert_eq!(err.code(), "malformed_record");
    }

    #[rstest]
    fn validate_propagates_schema_errors() {
        let err = Message::validate(&json!({ "name": "Sam", "email": "nope", "message": "Hi" }))
            .expect_err("bad email");
        assert_eq!(err.field(), Some("email"));
    }

    #[rstest]
    fn accessors_expose_validated_values() {
        let project = Project::validate(&json!({
            "name": "P",
            "description": "D",
            "tech_stack": ["Rust", "Postgres"],
            "live_url": "https://p.example",
        }))
        .expect("valid project");
        assert_eq!(project.tech_stack(), ["Rust", "Postgres"]);
        assert_eq!(project.live_url(), Some("https://p.example"));
        assert_eq!(project.repo_url(), None);
        assert!(project.highlights().is_empty());
    }
}
