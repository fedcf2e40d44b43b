//! Report pipeline: compute the time window, fetch, classify, render

use std::sync::Arc;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use tracing::debug;

use crate::client::TrackerClient;
use crate::directory::UserDirectory;
use crate::error::Result;
use crate::render::render_story;
use crate::story::{Story, StoryType};

/// Orchestrates one report run. Owns the client and the member directory,
/// both constructed once per run.
pub struct Reporter {
    client: Arc<TrackerClient>,
    directory: UserDirectory,
}

impl Reporter {
    pub fn new(client: Arc<TrackerClient>) -> Self {
        let directory = UserDirectory::new(client.clone());
        Self { client, directory }
    }

    /// Render every story updated within the last `lookback_days` days, in
    /// the order the service returns them.
    ///
    /// The membership fetch happens lazily, the first time a story needs
    /// its owner resolved. A malformed story record aborts the whole run
    /// rather than being skipped, so a broken report is never silently
    /// missing lines.
    pub async fn run(&self, lookback_days: i64) -> Result<Vec<String>> {
        let cutoff = cutoff(Utc::now(), lookback_days);
        let query = [(
            "updated_after",
            cutoff.to_rfc3339_opts(SecondsFormat::Secs, true),
        )];

        let records = self.client.stories(&query).await?;
        debug!(count = records.len(), "fetched stories");

        let mut lines = Vec::with_capacity(records.len());
        for record in records {
            let story = Story::classify(record);
            let owner = self.resolve_owner(&story).await?;
            lines.push(render_story(&story, owner.as_deref()));
        }
        Ok(lines)
    }

    /// Username of the story's first owner, if the story has one and the
    /// directory knows them. Releases never show an owner, so they do not
    /// trigger the membership fetch.
    async fn resolve_owner(&self, story: &Story) -> Result<Option<String>> {
        if story.story_type() == StoryType::Release {
            return Ok(None);
        }
        let Some(id) = story.first_owner_id() else {
            return Ok(None);
        };
        let member = self.directory.find_by_id(id).await?;
        Ok(member.map(|m| m.username.clone()))
    }
}

/// Cutoff timestamp for a lookback window of whole days.
pub fn cutoff(now: DateTime<Utc>, lookback_days: i64) -> DateTime<Utc> {
    now - Duration::days(lookback_days)
}
