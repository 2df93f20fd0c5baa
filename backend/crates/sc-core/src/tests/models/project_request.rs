use crate::{NewProjectRequest, ProjectRequest};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

fn new_request(name: &str) -> NewProjectRequest {
    NewProjectRequest {
        name: name.to_string(),
        email: "student@example.com".to_string(),
        phone: "9876543210".to_string(),
        project_name: "Solar Tracker".to_string(),
        category: "Electronics".to_string(),
        description: "Dual-axis tracker with LDR sensors".to_string(),
        deadline: Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap(),
        budget: Some("₹5,000".to_string()),
    }
}

#[test]
fn given_new_request_when_stored_form_created_then_timestamps_match() {
    let request = ProjectRequest::new(new_request("Priya"));

    assert_that!(request.created_at, eq(request.updated_at));
    assert_that!(request.name.as_str(), eq("Priya"));
    assert_that!(request.budget, some(eq("₹5,000")));
}

#[test]
fn given_two_new_requests_when_created_then_ids_differ() {
    let first = ProjectRequest::new(new_request("A"));
    let second = ProjectRequest::new(new_request("A"));

    assert_that!(first.id, not(eq(second.id)));
}

#[test]
fn given_request_when_serialized_then_timestamps_are_camel_case() {
    let json = serde_json::to_value(ProjectRequest::new(new_request("A"))).unwrap();

    assert_that!(json.get("createdAt"), some(anything()));
    assert_that!(json.get("updatedAt"), some(anything()));
    assert_that!(json.get("created_at"), none());
}
