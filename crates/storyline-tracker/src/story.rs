//! Story classification

use std::fmt;

use chrono::{DateTime, Utc};

use crate::types::StoryRecord;

/// Story variant, fixed when the record is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryType {
    Bug,
    Feature,
    Chore,
    Release,
    Generic,
}

impl StoryType {
    /// Total mapping from the wire `story_type` field. Unknown or missing
    /// values fall back to `Generic` rather than failing the pipeline.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("bug") => Self::Bug,
            Some("feature") => Self::Feature,
            Some("chore") => Self::Chore,
            Some("release") => Self::Release,
            _ => Self::Generic,
        }
    }
}

/// Workflow state of a story. Unrecognized states keep their raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryState {
    Accepted,
    Finished,
    Started,
    Unstarted,
    Rejected,
    Other(String),
}

impl StoryState {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("accepted") => Self::Accepted,
            Some("finished") => Self::Finished,
            Some("started") => Self::Started,
            Some("unstarted") => Self::Unstarted,
            Some("rejected") => Self::Rejected,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Other(String::new()),
        }
    }
}

impl fmt::Display for StoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "accepted"),
            Self::Finished => write!(f, "finished"),
            Self::Started => write!(f, "started"),
            Self::Unstarted => write!(f, "unstarted"),
            Self::Rejected => write!(f, "rejected"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Immutable, classified view over one fetched story record.
#[derive(Debug, Clone)]
pub struct Story {
    record: StoryRecord,
    story_type: StoryType,
    state: StoryState,
}

impl Story {
    pub fn classify(record: StoryRecord) -> Self {
        let story_type = StoryType::from_raw(record.story_type.as_deref());
        let state = StoryState::from_raw(record.current_state.as_deref());
        Self {
            record,
            story_type,
            state,
        }
    }

    pub fn id(&self) -> u64 {
        self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn story_type(&self) -> StoryType {
        self.story_type
    }

    pub fn state(&self) -> &StoryState {
        &self.state
    }

    /// The raw type tag as the service sent it, rendered verbatim in the
    /// report even for unrecognized types.
    pub fn raw_type(&self) -> Option<&str> {
        self.record.story_type.as_deref()
    }

    pub fn estimate(&self) -> Option<u32> {
        self.record.estimate
    }

    pub fn accepted_at(&self) -> Option<DateTime<Utc>> {
        self.record.accepted_at
    }

    /// Only the first owner is shown in the report.
    pub fn first_owner_id(&self) -> Option<u64> {
        self.record.owner_ids.first().copied()
    }
}
