use crate::{CoreError, NewProjectRequest};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

fn valid_request() -> NewProjectRequest {
    NewProjectRequest {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        phone: "123".to_string(),
        project_name: "X".to_string(),
        category: "Physics".to_string(),
        description: "d".to_string(),
        deadline: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        budget: None,
    }
}

#[test]
fn given_all_required_fields_when_validated_then_ok() {
    assert_that!(valid_request().validate(), ok(anything()));
}

#[test]
fn given_email_without_at_sign_when_validated_then_ok() {
    // Email format is a form concern, not a record rule
    let mut request = valid_request();
    request.email = "not-an-email".to_string();

    assert_that!(request.validate(), ok(anything()));
}

#[test]
fn given_blank_field_when_validated_then_names_field() {
    let mut request = valid_request();
    request.phone = "   ".to_string();

    match request.validate() {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_that!(field, some(eq("phone")));
            assert_that!(message, contains_substring("phone is required"));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn given_several_blank_fields_when_validated_then_all_are_named() {
    let mut request = valid_request();
    request.name = String::new();
    request.project_name = String::new();
    request.description = String::new();

    match request.validate() {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_that!(field, some(eq("name")));
            assert_that!(message, contains_substring("name is required"));
            assert_that!(message, contains_substring("projectName is required"));
            assert_that!(message, contains_substring("description is required"));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn given_request_when_serialized_then_uses_camel_case_and_skips_missing_budget() {
    let json = serde_json::to_value(valid_request()).unwrap();

    assert_that!(json["projectName"].as_str(), some(eq("X")));
    assert_that!(json.get("budget"), none());
}
