//! Schema tables for every persisted record kind.

use super::field::{FieldDefault, FieldSpec, FieldType, Schema};
use crate::domain::RecordKind;

/// Inclusive bounds for `years_experience`.
pub const YEARS_EXPERIENCE_MIN: i64 = 0;
/// Inclusive upper bound for `years_experience`.
pub const YEARS_EXPERIENCE_MAX: i64 = 60;

/// Nested link-set attached to the developer profile.
pub static SOCIAL_LINKS: Schema = Schema {
    name: "social",
    fields: &[
        FieldSpec::nullable("github", FieldType::Url, FieldDefault::Null),
        FieldSpec::nullable("linkedin", FieldType::Url, FieldDefault::Null),
        FieldSpec::nullable("twitter", FieldType::Url, FieldDefault::Null),
        FieldSpec::nullable("website", FieldType::Url, FieldDefault::Null),
    ],
};

/// Developer profile.
pub static DEVELOPER: Schema = Schema {
    name: "developer",
    fields: &[
        FieldSpec::required("name", FieldType::Text),
        FieldSpec::required("title", FieldType::Text),
        FieldSpec::required("bio", FieldType::Text),
        FieldSpec::nullable("location", FieldType::Text, FieldDefault::Null),
        FieldSpec::nullable(
            "years_experience",
            FieldType::Integer {
                min: YEARS_EXPERIENCE_MIN,
                max: YEARS_EXPERIENCE_MAX,
            },
            FieldDefault::Zero,
        ),
        FieldSpec::defaulted("skills", FieldType::TextList, FieldDefault::EmptyList),
        FieldSpec::defaulted(
            "social",
            FieldType::Object(&SOCIAL_LINKS),
            FieldDefault::EmptyObject,
        ),
        FieldSpec::nullable("email", FieldType::Email, FieldDefault::Null),
    ],
};

/// Showcased project.
pub static PROJECT: Schema = Schema {
    name: "project",
    fields: &[
        FieldSpec::required("name", FieldType::Text),
        FieldSpec::required("description", FieldType::Text),
        FieldSpec::defaulted("tech_stack", FieldType::TextList, FieldDefault::EmptyList),
        FieldSpec::nullable("repo_url", FieldType::Url, FieldDefault::Null),
        FieldSpec::nullable("live_url", FieldType::Url, FieldDefault::Null),
        FieldSpec::nullable("image_url", FieldType::Url, FieldDefault::Null),
        FieldSpec::defaulted("highlights", FieldType::TextList, FieldDefault::EmptyList),
    ],
};

/// Contact message.
pub static MESSAGE: Schema = Schema {
    name: "message",
    fields: &[
        FieldSpec::required("name", FieldType::Text),
        FieldSpec::required("email", FieldType::Email),
        FieldSpec::required("message", FieldType::Text),
    ],
};

/// Schema table for a record kind.
#[must_use]
pub const fn schema_for(kind: RecordKind) -> &'static Schema {
    match kind {
        RecordKind::Developer => &DEVELOPER,
        RecordKind::Project => &PROJECT,
        RecordKind::Message => &MESSAGE,
    }
}
