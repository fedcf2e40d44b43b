//! Cached lookup of project members

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::debug;

use crate::client::TrackerClient;
use crate::error::{Error, Result};
use crate::types::Member;

/// Fetches the project's memberships at most once per process and answers
/// owner lookups from the cached list.
///
/// A failed fetch leaves the cache unpopulated, so the next lookup retries
/// the network call. A stale cache is an accepted tradeoff for a
/// short-lived CLI run.
pub struct UserDirectory {
    client: Arc<TrackerClient>,
    cache: OnceCell<Vec<Member>>,
}

impl UserDirectory {
    pub fn new(client: Arc<TrackerClient>) -> Self {
        Self {
            client,
            cache: OnceCell::new(),
        }
    }

    /// All project members, fetched on first use.
    pub async fn members(&self) -> Result<&[Member]> {
        let members = self
            .cache
            .get_or_try_init(|| async {
                let records = self.client.memberships().await?;
                debug!(count = records.len(), "cached project memberships");
                Ok::<_, Error>(records.into_iter().map(Member::from).collect())
            })
            .await?;
        Ok(members)
    }

    /// Look up a member by id. A miss is an expected "no owner" state, not
    /// an error.
    pub async fn find_by_id(&self, id: u64) -> Result<Option<&Member>> {
        let members = self.members().await?;
        Ok(members.iter().find(|member| member.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn memberships_body() -> serde_json::Value {
        json!([
            {"id": 300, "person": {"id": 9, "username": "alice"}},
            {"id": 301, "person": {"id": 12, "username": "bob"}}
        ])
    }

    fn directory(server: &MockServer) -> UserDirectory {
        let client = TrackerClient::new(server.uri(), "sekret", 7).unwrap();
        UserDirectory::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_memberships_fetched_at_most_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/7/memberships"))
            .respond_with(ResponseTemplate::new(200).set_body_json(memberships_body()))
            .expect(1)
            .mount(&server)
            .await;

        let directory = directory(&server);
        for _ in 0..5 {
            let member = directory.find_by_id(9).await.unwrap();
            assert_eq!(member.map(|m| m.username.as_str()), Some("alice"));
        }
        server.verify().await;
    }

    #[tokio::test]
    async fn test_missing_id_is_none_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/7/memberships"))
            .respond_with(ResponseTemplate::new(200).set_body_json(memberships_body()))
            .mount(&server)
            .await;

        let directory = directory(&server);
        assert!(directory.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cache_empty_for_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/7/memberships"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/projects/7/memberships"))
            .respond_with(ResponseTemplate::new(200).set_body_json(memberships_body()))
            .expect(1)
            .mount(&server)
            .await;

        let directory = directory(&server);
        assert!(directory.find_by_id(9).await.is_err());

        let member = directory.find_by_id(9).await.unwrap();
        assert_eq!(member.map(|m| m.username.as_str()), Some("alice"));
    }
}
