use crate::{ProjectRequestForm, validate_form};

use googletest::prelude::*;
use proptest::prelude::*;

fn valid_form() -> ProjectRequestForm {
    ProjectRequestForm {
        name: "Rahul Ahmed".to_string(),
        email: "rahul.ahmed@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        project_name: "Electromagnetic Levitation".to_string(),
        category: "Physics".to_string(),
        description: "A working maglev demonstration for the regional science fair.".to_string(),
        deadline: "2025-05-01".to_string(),
        budget: None,
    }
}

#[test]
fn given_valid_form_when_validated_then_no_errors() {
    let errors = validate_form(&valid_form());

    assert_that!(errors.is_empty(), is_true());
    assert_that!(valid_form().is_submittable(), is_true());
}

#[test]
fn given_empty_form_when_validated_then_every_required_field_reports() {
    let errors = ProjectRequestForm::default().errors();

    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(
        fields,
        vec![
            "category",
            "deadline",
            "description",
            "email",
            "name",
            "phone",
            "projectName",
        ]
    );
}

#[test]
fn given_short_name_when_validated_then_only_name_reports() {
    let mut form = valid_form();
    form.name = "A".to_string();

    let errors = form.errors();

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors.field("name").unwrap(), ["Name must be at least 2 characters."]);
    assert_that!(form.is_submittable(), is_false());
}

#[test]
fn given_invalid_email_when_validated_then_email_reports() {
    let mut form = valid_form();
    form.email = "rahul.example.com".to_string();

    let errors = form.errors();

    assert_that!(errors.len(), eq(1));
    assert_eq!(errors.field("email").unwrap(), ["Please enter a valid email address."]);
}

#[test]
fn given_short_phone_when_validated_then_phone_reports() {
    let mut form = valid_form();
    form.phone = "12345".to_string();

    assert_that!(form.errors().field("phone"), some(anything()));
}

#[test]
fn given_short_description_when_validated_then_description_reports() {
    let mut form = valid_form();
    form.description = "Too short".to_string();

    assert_eq!(form.errors().field("description").unwrap(), ["Description must be at least 20 characters."]);
}

#[test]
fn given_missing_deadline_when_validated_then_asks_to_select_one() {
    let mut form = valid_form();
    form.deadline = String::new();

    assert_eq!(form.errors().field("deadline").unwrap(), ["Please select a deadline."]);
}

#[test]
fn given_malformed_deadline_when_validated_then_date_error() {
    let mut form = valid_form();
    form.deadline = "01/05/2025".to_string();

    assert_eq!(form.errors().field("deadline").unwrap(), ["Deadline must be a date (YYYY-MM-DD)."]);
}

#[test]
fn given_any_category_text_when_validated_then_accepted() {
    let mut form = valid_form();
    form.category = "Astrophysics".to_string();

    assert_that!(form.errors().is_empty(), is_true());
}

#[test]
fn given_form_when_serialized_then_matches_submission_wire_shape() {
    let json = serde_json::to_value(valid_form()).unwrap();

    assert_that!(json["projectName"].as_str(), some(eq("Electromagnetic Levitation")));
    assert_that!(json.get("budget"), none());
}

proptest! {
    #[test]
    fn given_name_shorter_than_two_chars_when_validated_then_name_fails(name in "[a-zA-Z]{0,1}") {
        let mut form = valid_form();
        form.name = name;
        prop_assert!(form.errors().field("name").is_some());
    }

    #[test]
    fn given_long_enough_name_when_validated_then_name_passes(name in "[a-zA-Z ]{2,60}") {
        let mut form = valid_form();
        form.name = name;
        prop_assert!(form.errors().field("name").is_none());
    }

    #[test]
    fn given_any_calendar_date_when_validated_then_deadline_passes(
        year in 2000i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let mut form = valid_form();
        form.deadline = format!("{year:04}-{month:02}-{day:02}");
        prop_assert!(form.errors().is_empty());
    }
}
