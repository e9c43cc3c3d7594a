//! Validation failures raised by the schema layer.

use serde_json::json;

use crate::domain::Error;

/// Why an input failed to match its schema.
///
/// Field paths use dots for nesting and brackets for list positions, for
/// example `social.github` or `skills[2]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The top-level input is not a JSON object.
    #[error("{schema} input must be a JSON object")]
    NotAnObject {
        /// Schema the input was checked against.
        schema: &'static str,
    },
    /// A required field is absent.
    #[error("missing required field: {field}")]
    MissingField {
        /// Offending field path.
        field: String,
    },
    /// A field is not declared by the schema.
    #[error("unknown field: {field}")]
    UnknownField {
        /// Offending field path.
        field: String,
    },
    /// A field holds the wrong JSON type (including a forbidden `null`).
    #[error("{field} must be {expected}")]
    TypeMismatch {
        /// Offending field path.
        field: String,
        /// Description of the expected type.
        expected: &'static str,
    },
    /// An integer lies outside its inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Offending field path.
        field: String,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// A URL field is not an absolute http(s) URL.
    #[error("{field} must be a valid http or https URL")]
    InvalidUrl {
        /// Offending field path.
        field: String,
    },
    /// An email field is not a well-formed address.
    #[error("{field} must be a valid email address")]
    InvalidEmail {
        /// Offending field path.
        field: String,
    },
    /// A validated document could not be converted to or from its typed record.
    #[error("{schema} record could not be converted: {message}")]
    Malformed {
        /// Schema the record belongs to.
        schema: &'static str,
        /// Underlying serde message.
        message: String,
    },
}

impl ValidationError {
    /// Stable machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotAnObject { .. } => "not_an_object",
            Self::MissingField { .. } => "missing_field",
            Self::UnknownField { .. } => "unknown_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::Malformed { .. } => "malformed_record",
        }
    }

    /// Path of the offending field, when the failure concerns one field.
    #[must_use]
    pub const fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::UnknownField { field }
            | Self::TypeMismatch { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidUrl { field }
            | Self::InvalidEmail { field } => Some(field.as_str()),
            Self::NotAnObject { .. } | Self::Malformed { .. } => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        let details = err.field().map_or_else(
            || json!({ "code": err.code() }),
            |field| json!({ "field": field, "code": err.code() }),
        );
        Self::invalid_request(err.to_string()).with_details(details)
    }
}
