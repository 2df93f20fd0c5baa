//! Project request repository.
//!
//! Records are written once and never updated or deleted. The read methods
//! exist for operators and tests; no HTTP route exposes them.

use crate::{DbError, Result as DbErrorResult};

use sc_core::{NewProjectRequest, ProjectRequest};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

pub struct ProjectRequestRepository {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct ProjectRequestRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    project_name: String,
    category: String,
    description: String,
    deadline: i64,
    budget: Option<String>,
    created_at: i64,
    updated_at: i64,
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, email, phone, project_name, category, description,
        deadline, budget, created_at, updated_at
    FROM project_requests
"#;

impl ProjectRequestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate and insert one request, assigning its id and timestamps.
    pub async fn create(&self, request: NewProjectRequest) -> DbErrorResult<ProjectRequest> {
        request.validate()?;

        let record = ProjectRequest::new(request);

        sqlx::query(
            r#"
                INSERT INTO project_requests (
                    id, name, email, phone, project_name, category, description,
                    deadline, budget, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.project_name)
        .bind(&record.category)
        .bind(&record.description)
        .bind(record.deadline.timestamp_millis())
        .bind(&record.budget)
        .bind(record.created_at.timestamp_millis())
        .bind(record.updated_at.timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<ProjectRequest>> {
        let row = sqlx::query_as::<_, ProjectRequestRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(ProjectRequestRow::into_record).transpose()
    }

    /// All requests, oldest first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<ProjectRequest>> {
        let rows = sqlx::query_as::<_, ProjectRequestRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProjectRequestRow::into_record).collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project_requests")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

impl ProjectRequestRow {
    fn into_record(self) -> DbErrorResult<ProjectRequest> {
        let id = Uuid::parse_str(&self.id).map_err(|e| {
            invalid_record(format!("Invalid UUID in project_requests.id: {}", e))
        })?;

        Ok(ProjectRequest {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            project_name: self.project_name,
            category: self.category,
            description: self.description,
            deadline: from_millis(self.deadline, "deadline")?,
            budget: self.budget,
            created_at: from_millis(self.created_at, "created_at")?,
            updated_at: from_millis(self.updated_at, "updated_at")?,
        })
    }
}

#[track_caller]
fn from_millis(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        invalid_record(format!(
            "Invalid timestamp in project_requests.{}: {}",
            column, millis
        ))
    })
}

#[track_caller]
fn invalid_record(message: String) -> DbError {
    DbError::InvalidRecord {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
