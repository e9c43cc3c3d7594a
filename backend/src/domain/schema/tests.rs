//! Tests for the schema tables and generic validator.

use super::*;
use crate::domain::RecordKind;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn full_developer() -> Value {
    json!({
        "name": "Alex Carter",
        "title": "Senior Django Developer",
        "bio": "Builds backends.",
        "location": "Remote",
        "years_experience": 7,
        "skills": ["Python", "Rust"],
        "social": {
            "github": "https://github.com/example",
            "linkedin": null,
            "twitter": "https://twitter.com/example",
            "website": "https://example.dev"
        },
        "email": "alex@example.dev"
    })
}

fn without(mut value: Value, field: &str) -> Value {
    if let Some(object) = value.as_object_mut() {
        object.remove(field);
    }
    value
}

fn with(mut value: Value, field: &str, replacement: Value) -> Value {
    if let Some(object) = value.as_object_mut() {
        object.insert(field.to_owned(), replacement);
    }
    value
}

#[rstest]
fn valid_developer_is_returned_unchanged(full_developer: Value) {
    let document = validate(&DEVELOPER, &full_developer).expect("developer validates");
    assert_eq!(Value::Object(document), full_developer);
}

#[rstest]
fn absent_optional_fields_take_declared_defaults() {
    let input = json!({ "name": "N", "title": "T", "bio": "B" });
    let document = validate(&DEVELOPER, &input).expect("minimal developer validates");
    assert_eq!(
        Value::Object(document),
        json!({
            "name": "N",
            "title": "T",
            "bio": "B",
            "location": null,
            "years_experience": 0,
            "skills": [],
            "social": {
                "github": null,
                "linkedin": null,
                "twitter": null,
                "website": null
            },
            "email": null
        })
    );
}

#[rstest]
fn project_defaults_lists_and_urls() {
    let input = json!({ "name": "P", "description": "D" });
    let document = validate(&PROJECT, &input).expect("minimal project validates");
    assert_eq!(document.get("tech_stack"), Some(&json!([])));
    assert_eq!(document.get("highlights"), Some(&json!([])));
    assert_eq!(document.get("repo_url"), Some(&Value::Null));
    assert_eq!(document.get("live_url"), Some(&Value::Null));
    assert_eq!(document.get("image_url"), Some(&Value::Null));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(30)]
#[case(60)]
fn years_experience_within_bounds_is_accepted(full_developer: Value, #[case] years: i64) {
    let input = with(full_developer, "years_experience", json!(years));
    let document = validate(&DEVELOPER, &input).expect("in-range years validate");
    assert_eq!(document.get("years_experience"), Some(&json!(years)));
}

#[rstest]
#[case(json!(-1))]
#[case(json!(61))]
#[case(json!(1000))]
#[case(json!(u64::MAX))]
fn years_experience_out_of_bounds_is_rejected(full_developer: Value, #[case] years: Value) {
    let input = with(full_developer, "years_experience", years);
    let err = validate(&DEVELOPER, &input).expect_err("out-of-range years fail");
    assert_eq!(
        err,
        ValidationError::OutOfRange {
            field: "years_experience".to_owned(),
            min: YEARS_EXPERIENCE_MIN,
            max: YEARS_EXPERIENCE_MAX,
        }
    );
}

#[rstest]
#[case(json!(7.5))]
#[case(json!("7"))]
#[case(json!(true))]
fn years_experience_must_be_an_integer(full_developer: Value, #[case] years: Value) {
    let input = with(full_developer, "years_experience", years);
    let err = validate(&DEVELOPER, &input).expect_err("non-integer years fail");
    assert_eq!(err.code(), "type_mismatch");
    assert_eq!(err.field(), Some("years_experience"));
}

#[rstest]
fn years_experience_accepts_explicit_null(full_developer: Value) {
    let input = with(full_developer, "years_experience", Value::Null);
    let document = validate(&DEVELOPER, &input).expect("null years validate");
    assert_eq!(document.get("years_experience"), Some(&Value::Null));
}

#[rstest]
#[case("name")]
#[case("title")]
#[case("bio")]
fn missing_required_developer_field_is_rejected(full_developer: Value, #[case] field: &str) {
    let err = validate(&DEVELOPER, &without(full_developer, field)).expect_err("missing field");
    assert_eq!(
        err,
        ValidationError::MissingField {
            field: field.to_owned()
        }
    );
}

#[rstest]
fn null_required_field_is_a_type_mismatch(full_developer: Value) {
    let err = validate(&DEVELOPER, &with(full_developer, "name", Value::Null))
        .expect_err("null name fails");
    assert_eq!(err.code(), "type_mismatch");
    assert_eq!(err.field(), Some("name"));
}

#[rstest]
#[case("skills")]
#[case("social")]
fn defaulted_fields_reject_null(full_developer: Value, #[case] field: &str) {
    let err = validate(&DEVELOPER, &with(full_developer, field, Value::Null))
        .expect_err("null defaulted field fails");
    assert_eq!(err.field(), Some(field));
}

#[rstest]
fn renamed_field_is_rejected_as_unknown(full_developer: Value) {
    let renamed = with(
        without(full_developer, "years_experience"),
        "yearsExperience",
        json!(3),
    );
    let err = validate(&DEVELOPER, &renamed).expect_err("renamed field fails");
    assert_eq!(
        err,
        ValidationError::UnknownField {
            field: "yearsExperience".to_owned()
        }
    );
}

#[rstest]
fn unknown_nested_field_reports_full_path(full_developer: Value) {
    let input = with(
        full_developer,
        "social",
        json!({ "github": "https://github.com/x", "mastodon": "https://m.example" }),
    );
    let err = validate(&DEVELOPER, &input).expect_err("unknown nested field fails");
    assert_eq!(err.field(), Some("social.mastodon"));
    assert_eq!(err.code(), "unknown_field");
}

#[rstest]
#[case("github")]
#[case("linkedin")]
#[case("twitter")]
#[case("website")]
fn malformed_social_url_is_rejected(full_developer: Value, #[case] link: &str) {
    let input = with(full_developer, "social", json!({ link: "not-a-url" }));
    let err = validate(&DEVELOPER, &input).expect_err("bad URL fails");
    assert_eq!(
        err,
        ValidationError::InvalidUrl {
            field: format!("social.{link}")
        }
    );
}

#[rstest]
fn partial_social_links_are_defaulted(full_developer: Value) {
    let input = with(
        full_developer,
        "social",
        json!({ "github": "https://github.com/x" }),
    );
    let document = validate(&DEVELOPER, &input).expect("partial social validates");
    assert_eq!(
        document.get("social"),
        Some(&json!({
            "github": "https://github.com/x",
            "linkedin": null,
            "twitter": null,
            "website": null
        }))
    );
}

#[rstest]
#[case("repo_url")]
#[case("live_url")]
#[case("image_url")]
fn malformed_project_url_is_rejected(#[case] field: &str) {
    let input = json!({ "name": "P", "description": "D", field: "ftp://example.com" });
    let err = validate(&PROJECT, &input).expect_err("bad project URL fails");
    assert_eq!(err.code(), "invalid_url");
    assert_eq!(err.field(), Some(field));
}

#[rstest]
fn non_string_list_item_reports_index(full_developer: Value) {
    let input = with(full_developer, "skills", json!(["Rust", 3, "Go"]));
    let err = validate(&DEVELOPER, &input).expect_err("non-string skill fails");
    assert_eq!(err.field(), Some("skills[1]"));
}

#[rstest]
#[case("not-an-email")]
#[case("sam@")]
#[case("")]
fn malformed_message_email_is_rejected(#[case] email: &str) {
    let input = json!({ "name": "Sam", "email": email, "message": "Hi" });
    let err = validate(&MESSAGE, &input).expect_err("bad email fails");
    assert_eq!(
        err,
        ValidationError::InvalidEmail {
            field: "email".to_owned()
        }
    );
}

#[rstest]
fn message_email_is_required() {
    let input = json!({ "name": "Sam", "message": "Hi" });
    let err = validate(&MESSAGE, &input).expect_err("missing email fails");
    assert_eq!(err.code(), "missing_field");
}

#[rstest]
#[case(json!([]))]
#[case(json!("text"))]
#[case(Value::Null)]
fn non_object_input_is_rejected(#[case] input: Value) {
    let err = validate(&MESSAGE, &input).expect_err("non-object input fails");
    assert_eq!(err, ValidationError::NotAnObject { schema: "message" });
}

#[rstest]
#[case(RecordKind::Developer, "developer")]
#[case(RecordKind::Project, "project")]
#[case(RecordKind::Message, "message")]
fn schema_lookup_matches_kind(#[case] kind: RecordKind, #[case] name: &str) {
    assert_eq!(schema_for(kind).name, name);
}

#[rstest]
fn validation_error_maps_to_invalid_request_with_details() {
    let err: crate::domain::Error = ValidationError::InvalidEmail {
        field: "email".to_owned(),
    }
    .into();
    assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
    assert_eq!(
        err.details(),
        Some(&json!({ "field": "email", "code": "invalid_email" }))
    );
}
