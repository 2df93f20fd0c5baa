use crate::{CliClientResult, ClientError};

use sc_core::ProjectRequestForm;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

const SUBMIT_PATH: &str = "/api/project-request";

/// HTTP client for the project request API
pub struct Client {
    pub base_url: String,
    pub timeout: Duration,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `timeout` - Bound on each HTTP call, connect through body
    pub fn new(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and turn error responses into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return if bytes.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(serde_json::from_slice(&bytes)?)
            };
        }

        // Error bodies are not always JSON (proxies, body limits); keep the status either way
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let text = |key: &str| body.get(key).and_then(|v| v.as_str()).map(String::from);

        let message = text("error").unwrap_or_else(|| {
            let raw = String::from_utf8_lossy(&bytes).trim().to_string();
            if raw.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                raw
            }
        });

        Err(ClientError::Api {
            status: status.as_u16(),
            code: text("code").unwrap_or_else(|| status.as_u16().to_string()),
            message,
            field: text("field"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Validate the form, then send it.
    ///
    /// Returns `ClientError::InvalidForm` without contacting the server when
    /// any field fails validation.
    pub async fn submit_project_request(
        &self,
        form: &ProjectRequestForm,
    ) -> CliClientResult<Value> {
        let errors = form.errors();
        if !errors.is_empty() {
            return Err(ClientError::invalid_form(errors));
        }

        let req = self.request(Method::POST, SUBMIT_PATH).json(form);
        self.execute(req).await
    }
}
