//! Wire types for the tracker REST API

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A story as returned by the stories endpoint.
///
/// Only the fields the report renders are decoded; everything else in the
/// response body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub story_type: Option<String>,
    #[serde(default)]
    pub estimate: Option<u32>,
    #[serde(default)]
    pub current_state: Option<String>,
    #[serde(default)]
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner_ids: Vec<u64>,
}

/// One entry from the memberships endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipRecord {
    pub person: PersonRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub id: u64,
    pub username: String,
}

/// A project member, as cached by the user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: u64,
    pub username: String,
}

impl From<MembershipRecord> for Member {
    fn from(record: MembershipRecord) -> Self {
        Self {
            id: record.person.id,
            username: record.person.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_record_decodes_sparse_payload() {
        let record: StoryRecord =
            serde_json::from_str(r#"{"id": 5, "name": "Minimal"}"#).unwrap();
        assert_eq!(record.id, 5);
        assert_eq!(record.name, "Minimal");
        assert!(record.story_type.is_none());
        assert!(record.estimate.is_none());
        assert!(record.accepted_at.is_none());
        assert!(record.owner_ids.is_empty());
    }

    #[test]
    fn test_member_from_membership_record() {
        let record: MembershipRecord = serde_json::from_str(
            r#"{"id": 300, "person": {"id": 9, "username": "alice", "name": "Alice"}}"#,
        )
        .unwrap();
        let member = Member::from(record);
        assert_eq!(member, Member { id: 9, username: "alice".to_string() });
    }
}
