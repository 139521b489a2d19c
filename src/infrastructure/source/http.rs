use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::config::SourceConfig;
use crate::domain::{DomainError, User, UserSource};

/// Fetches the user list with a single `GET` against a JSON endpoint
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpUserSource {
    pub fn new(endpoint: &str) -> Result<Self, DomainError> {
        Self::build(endpoint, None)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, DomainError> {
        Self::build(endpoint, Some(timeout))
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, DomainError> {
        Self::build(&config.endpoint, config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn build(endpoint: &str, timeout: Option<Duration>) -> Result<Self, DomainError> {
        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| {
            DomainError::configuration(format!("Invalid users endpoint '{}': {}", endpoint, e))
        })?;

        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            DomainError::configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, DomainError> {
        debug!(endpoint = %self.endpoint, "Fetching users");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DomainError::load_failure(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::load_failure(format!(
                "HTTP {}: {}",
                status, error_body
            )));
        }

        let users: Vec<User> = response
            .json()
            .await
            .map_err(|e| DomainError::load_failure(format!("Failed to parse response: {}", e)))?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }
}
