//! Validation layer: static schema tables and the generic validator.
//!
//! Each record kind is described by a table of [`FieldSpec`] rows naming the
//! field, its semantic type, and whether it is required or defaulted. The
//! single [`validate`] routine applies any table, so adding a field is a
//! one-line change with no bespoke code.

mod error;
mod field;
mod formats;
mod tables;
mod validator;

pub use error::ValidationError;
pub use field::{Document, FieldDefault, FieldSpec, FieldType, Presence, Schema};
pub use formats::{MAX_URL_LENGTH, is_valid_email, is_valid_http_url};
pub use tables::{
    DEVELOPER, MESSAGE, PROJECT, SOCIAL_LINKS, YEARS_EXPERIENCE_MAX, YEARS_EXPERIENCE_MIN,
    schema_for,
};
pub use validator::validate;

#[cfg(test)]
mod tests;
