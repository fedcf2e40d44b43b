//! Authenticated HTTP client for the tracker REST API

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{MembershipRecord, StoryRecord};

const TOKEN_HEADER: &str = "X-TrackerToken";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only client for one project. Every request carries the API token
/// in the `X-TrackerToken` header and is bounded by a 30 second timeout.
pub struct TrackerClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    project_id: u64,
}

impl TrackerClient {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        project_id: u64,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("storyline/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http,
            base_url,
            token: token.into(),
            project_id,
        })
    }

    /// Fetch the project's stories, filtered by the given query pairs
    /// (e.g. `updated_after`).
    pub async fn stories(&self, query: &[(&str, String)]) -> Result<Vec<StoryRecord>> {
        let url = format!("{}/projects/{}/stories", self.base_url, self.project_id);
        self.get(&url, query).await
    }

    /// Fetch all memberships of the project.
    pub async fn memberships(&self) -> Result<Vec<MembershipRecord>> {
        let url = format!("{}/projects/{}/memberships", self.base_url, self.project_id);
        self.get(&url, &[]).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let request = self
            .http
            .get(url)
            .query(query)
            .header(TOKEN_HEADER, &self.token)
            .build()?;

        debug!(url = %request.url(), "requesting");

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status,
                url: url.to_string(),
            });
        }

        // Decode from text rather than response.json() so a bad body
        // surfaces as a Decode error, distinct from transport failures.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
