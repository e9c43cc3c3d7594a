//! Declarative field descriptions used by the schema tables.

use serde_json::{Map, Value};

/// Untyped document as stored in, or read from, a collection.
pub type Document = Map<String, Value>;

/// Semantic type of a field; each carries the predicate applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Any JSON string.
    Text,
    /// Whole number within an inclusive range.
    Integer {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// Ordered list of strings.
    TextList,
    /// Absolute `http` or `https` URL.
    Url,
    /// Email address in `local@domain` form.
    Email,
    /// Nested object validated against its own table.
    Object(&'static Schema),
}

impl FieldType {
    /// Phrase used in "must be ..." messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::Integer { .. } => "an integer",
            Self::TextList => "a list of strings",
            Self::Url => "a URL string",
            Self::Email => "an email string",
            Self::Object(_) => "an object",
        }
    }
}

/// Value substituted when an optional field is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// JSON `null`.
    Null,
    /// The integer `0`.
    Zero,
    /// An empty list.
    EmptyList,
    /// An empty object, itself defaulted by the nested table.
    EmptyObject,
}

impl FieldDefault {
    /// Raw JSON form of the default before nested defaulting.
    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Zero => Value::from(0),
            Self::EmptyList => Value::Array(Vec::new()),
            Self::EmptyObject => Value::Object(Map::new()),
        }
    }
}

/// Whether a field must be supplied, and what happens when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be present and non-null.
    Required,
    /// May be absent (takes the default) or explicitly `null`.
    Nullable(FieldDefault),
    /// May be absent (takes the default) but never `null`.
    Defaulted(FieldDefault),
}

/// One row of a schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in documents.
    pub name: &'static str,
    /// Semantic type and constraint.
    pub field_type: FieldType,
    /// Required/optional policy.
    pub presence: Presence,
}

impl FieldSpec {
    /// A field that must always be supplied.
    #[must_use]
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            presence: Presence::Required,
        }
    }

    /// An optional field that also accepts explicit `null`.
    #[must_use]
    pub const fn nullable(name: &'static str, field_type: FieldType, default: FieldDefault) -> Self {
        Self {
            name,
            field_type,
            presence: Presence::Nullable(default),
        }
    }

    /// An optional field that rejects explicit `null`.
    #[must_use]
    pub const fn defaulted(
        name: &'static str,
        field_type: FieldType,
        default: FieldDefault,
    ) -> Self {
        Self {
            name,
            field_type,
            presence: Presence::Defaulted(default),
        }
    }
}

/// Static description of a record shape.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    /// Schema name used in error messages.
    pub name: &'static str,
    /// Declared fields in document order.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a declared field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}
