//! Storyline tracker library
//!
//! Fetches stories and memberships from a Pivotal-Tracker-style REST API
//! and renders them as a colorized activity report.

pub mod client;
pub mod directory;
pub mod error;
pub mod render;
pub mod report;
pub mod story;
pub mod types;

pub use client::TrackerClient;
pub use directory::UserDirectory;
pub use error::{Error, Result};
pub use render::{colorize, render_story};
pub use report::{cutoff, Reporter};
pub use story::{Story, StoryState, StoryType};
pub use types::{Member, MembershipRecord, PersonRecord, StoryRecord};
