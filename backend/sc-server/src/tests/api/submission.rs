use crate::{ApiError, parse_submission};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "email",
    "phone",
    "projectName",
    "category",
    "description",
    "deadline",
];

fn valid_body() -> Value {
    json!({
        "name": "Asha",
        "email": "asha@example.com",
        "phone": "9876543210",
        "projectName": "Solar Tracker",
        "category": "Electronics",
        "description": "Arduino-based dual-axis solar tracker",
        "deadline": "2025-03-01",
    })
}

fn parse(value: &Value) -> crate::ApiResult<sc_core::NewProjectRequest> {
    parse_submission(value.to_string().as_bytes())
}

fn validation_field(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_parses_complete_submission() {
    let request = parse(&valid_body()).unwrap();

    assert_that!(request.name, eq("Asha"));
    assert_that!(request.project_name, eq("Solar Tracker"));
    assert_that!(request.category, eq("Electronics"));
    assert_that!(
        request.deadline,
        eq(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
    );
    assert_that!(request.budget, none());
}

#[test]
fn test_non_json_is_malformed() {
    let result = parse_submission(b"name=Asha&email=asha@example.com");

    assert!(matches!(result, Err(ApiError::MalformedBody { .. })));
}

#[test]
fn test_non_object_json_is_malformed() {
    for body in [json!([1, 2, 3]), json!("text"), json!(42), Value::Null] {
        let result = parse(&body);
        assert!(
            matches!(result, Err(ApiError::MalformedBody { .. })),
            "body {} should be malformed",
            body
        );
    }
}

#[test]
fn test_single_field_reports_first_missing_field() {
    let error = parse(&json!({ "name": "A" })).unwrap_err();

    assert_eq!(validation_field(error), Some("email".to_string()));
}

#[test]
fn test_message_lists_every_problem() {
    let error = parse(&json!({ "name": "A" })).unwrap_err();

    let message = error.to_string();
    for field in &REQUIRED_FIELDS[1..] {
        assert!(
            message.contains(&format!("{} is required", field)),
            "missing {} in {}",
            field,
            message
        );
    }
}

#[test]
fn test_numbers_and_booleans_are_cast_to_strings() {
    let mut body = valid_body();
    body["phone"] = json!(9876543210u64);
    body["category"] = json!(true);

    let request = parse(&body).unwrap();

    assert_that!(request.phone, eq("9876543210"));
    assert_that!(request.category, eq("true"));
}

#[test]
fn test_object_value_is_rejected() {
    let mut body = valid_body();
    body["description"] = json!({ "text": "nested" });

    let error = parse(&body).unwrap_err();

    assert!(error.to_string().contains("description must be a string"));
    assert_eq!(validation_field(error), Some("description".to_string()));
}

#[test]
fn test_whitespace_only_is_missing() {
    let mut body = valid_body();
    body["name"] = json!("   ");

    let error = parse(&body).unwrap_err();

    assert_eq!(validation_field(error), Some("name".to_string()));
}

#[test]
fn test_null_is_missing() {
    let mut body = valid_body();
    body["email"] = Value::Null;

    let error = parse(&body).unwrap_err();

    assert!(error.to_string().contains("email is required"));
}

#[test]
fn test_deadline_accepts_rfc3339_and_epoch_millis() {
    let mut body = valid_body();
    body["deadline"] = json!("2025-03-01T12:30:00Z");
    let request = parse(&body).unwrap();
    assert_that!(
        request.deadline,
        eq(Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap())
    );

    body["deadline"] = json!(1_740_787_200_000i64);
    let request = parse(&body).unwrap();
    assert_that!(
        request.deadline,
        eq(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_unparseable_deadline_is_rejected() {
    let mut body = valid_body();
    body["deadline"] = json!("next tuesday");

    let error = parse(&body).unwrap_err();

    assert!(error.to_string().contains("deadline must be a valid date"));
    assert_eq!(validation_field(error), Some("deadline".to_string()));
}

#[test]
fn test_budget_is_optional_and_blank_means_absent() {
    let mut body = valid_body();
    body["budget"] = json!("₹2000");
    assert_that!(parse(&body).unwrap().budget, some(eq("₹2000")));

    body["budget"] = json!("  ");
    assert_that!(parse(&body).unwrap().budget, none());

    body["budget"] = json!(2000);
    assert_that!(parse(&body).unwrap().budget, some(eq("2000")));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let mut body = valid_body();
    body["referral"] = json!("poster");
    body["id"] = json!("client-chosen");

    assert!(parse(&body).is_ok());
}

proptest! {
    #[test]
    fn prop_dropping_any_required_field_fails(index in 0usize..REQUIRED_FIELDS.len()) {
        let field = REQUIRED_FIELDS[index];
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove(field);

        let error = parse(&body).unwrap_err();

        prop_assert_eq!(validation_field(error), Some(field.to_string()));
    }
}
