//! ProjectRequest entity - one customer's submitted project requirements.

use crate::NewProjectRequest;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored project request. Created once, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_name: String,
    pub category: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub budget: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRequest {
    /// Assign an id and write timestamps to a new request.
    pub fn new(request: NewProjectRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            project_name: request.project_name,
            category: request.category,
            description: request.description,
            deadline: request.deadline,
            budget: request.budget,
            created_at: now,
            updated_at: now,
        }
    }
}
