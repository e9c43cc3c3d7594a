//! Equality filters understood by every document store adapter.

use serde_json::{Map, Value};

use crate::domain::schema::Document;

/// Scalar value a filter condition compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// JSON string.
    Text(String),
    /// JSON integer.
    Integer(i64),
    /// JSON boolean.
    Bool(bool),
}

impl FilterValue {
    fn to_json(&self) -> Value {
        match self {
            Self::Text(text) => Value::from(text.as_str()),
            Self::Integer(n) => Value::from(*n),
            Self::Bool(flag) => Value::from(*flag),
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Text(expected), Value::String(actual)) => expected == actual,
            (Self::Integer(expected), Value::Number(actual)) => actual.as_i64() == Some(*expected),
            (Self::Bool(expected), Value::Bool(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Conjunction of top-level field equalities. The empty filter matches every
/// document.
///
/// # Examples
/// ```
/// use backend::domain::ports::Filter;
/// use serde_json::json;
///
/// let filter = Filter::empty().field_eq("name", "Headless CMS");
/// let document = json!({ "name": "Headless CMS", "tech_stack": [] });
/// assert!(filter.matches(document.as_object().expect("object")));
/// assert_eq!(filter.to_json(), json!({ "name": "Headless CMS" }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<(String, FilterValue)>,
}

impl Filter {
    /// Filter matching every document.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add an equality condition on a top-level field.
    #[must_use]
    pub fn field_eq(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    /// Whether the filter has no conditions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether `document` satisfies every condition.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().all(|(field, expected)| {
            document
                .get(field)
                .is_some_and(|actual| expected.matches(actual))
        })
    }

    /// JSON object form, suitable for a containment query.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .conditions
            .iter()
            .map(|(field, value)| (field.clone(), value.to_json()))
            .collect();
        Value::Object(object)
    }
}
