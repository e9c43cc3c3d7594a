//! Generic schema validator.
//!
//! One routine serves every record kind: it walks the schema table, rejects
//! undeclared fields, applies declared defaults, and checks each value against
//! the predicate of its semantic type. The output is a normalised document in
//! which every declared field is present.

use serde_json::Value;

use super::error::ValidationError;
use super::field::{Document, FieldType, Presence, Schema};
use super::formats::{is_valid_email, is_valid_http_url};

/// Validate `input` against `schema`, returning the defaulted document.
///
/// # Errors
///
/// Returns [`ValidationError`] for the first violation found: a non-object
/// input, an undeclared field, a missing required field, a type mismatch, an
/// out-of-range integer, or a malformed URL or email.
///
/// # Examples
/// ```
/// use backend::domain::schema::{validate, MESSAGE};
/// use serde_json::json;
///
/// let document = validate(
///     &MESSAGE,
///     &json!({ "name": "Sam", "email": "sam@example.com", "message": "Hi" }),
/// )
/// .expect("valid message");
/// assert_eq!(document.len(), 3);
/// ```
pub fn validate(schema: &Schema, input: &Value) -> Result<Document, ValidationError> {
    let Some(object) = input.as_object() else {
        return Err(ValidationError::NotAnObject {
            schema: schema.name,
        });
    };
    validate_object(schema, object, "")
}

fn validate_object(
    schema: &Schema,
    object: &Document,
    prefix: &str,
) -> Result<Document, ValidationError> {
    if let Some(unknown) = object.keys().find(|key| schema.field(key).is_none()) {
        return Err(ValidationError::UnknownField {
            field: join_path(prefix, unknown),
        });
    }

    let mut document = Document::new();
    for spec in schema.fields {
        let path = join_path(prefix, spec.name);
        let value = match (object.get(spec.name), spec.presence) {
            (None, Presence::Required) => {
                return Err(ValidationError::MissingField { field: path });
            }
            (None, Presence::Nullable(default) | Presence::Defaulted(default)) => {
                let raw = default.to_value();
                if raw.is_null() {
                    raw
                } else {
                    check_value(spec.field_type, &raw, &path)?
                }
            }
            (Some(Value::Null), Presence::Nullable(_)) => Value::Null,
            (Some(value), _) => check_value(spec.field_type, value, &path)?,
        };
        document.insert(spec.name.to_owned(), value);
    }
    Ok(document)
}

fn check_value(field_type: FieldType, value: &Value, path: &str) -> Result<Value, ValidationError> {
    let mismatch = || ValidationError::TypeMismatch {
        field: path.to_owned(),
        expected: field_type.describe(),
    };

    match field_type {
        FieldType::Text => value.as_str().map(Value::from).ok_or_else(mismatch),
        FieldType::Integer { min, max } => {
            if !(value.is_i64() || value.is_u64()) {
                return Err(mismatch());
            }
            match value.as_i64() {
                Some(n) if (min..=max).contains(&n) => Ok(Value::from(n)),
                _ => Err(ValidationError::OutOfRange {
                    field: path.to_owned(),
                    min,
                    max,
                }),
            }
        }
        FieldType::TextList => {
            let items = value.as_array().ok_or_else(mismatch)?;
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_str()
                        .map(Value::from)
                        .ok_or_else(|| ValidationError::TypeMismatch {
                            field: format!("{path}[{index}]"),
                            expected: FieldType::Text.describe(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        FieldType::Url => {
            let raw = value.as_str().ok_or_else(mismatch)?;
            if is_valid_http_url(raw) {
                Ok(Value::from(raw))
            } else {
                Err(ValidationError::InvalidUrl {
                    field: path.to_owned(),
                })
            }
        }
        FieldType::Email => {
            let raw = value.as_str().ok_or_else(mismatch)?;
            if is_valid_email(raw) {
                Ok(Value::from(raw))
            } else {
                Err(ValidationError::InvalidEmail {
                    field: path.to_owned(),
                })
            }
        }
        FieldType::Object(nested) => {
            let object = value.as_object().ok_or_else(mismatch)?;
            validate_object(nested, object, path).map(Value::Object)
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_owned()
    } else {
        format!("{prefix}.{field}")
    }
}
