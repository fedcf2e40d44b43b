//! Colorized report rendering
//!
//! Stories render as a single `* id - [state] [type] name` line; releases
//! override the whole format with a banner. Whether the ANSI escapes are
//! actually emitted is controlled globally via `colored::control`, so
//! callers decide color policy once and rendering stays unconditional.

use colored::{Color, Colorize};

use crate::story::{Story, StoryState, StoryType};

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Fixed state -> color table; unrecognized states render white.
fn state_color(state: &StoryState) -> Color {
    match state {
        StoryState::Accepted => Color::Green,
        StoryState::Finished => Color::Blue,
        StoryState::Started => Color::Yellow,
        StoryState::Unstarted => Color::Magenta,
        StoryState::Rejected => Color::Red,
        StoryState::Other(_) => Color::White,
    }
}

/// Bug, feature and chore tags carry their own color; everything else is
/// left unstyled.
fn type_color(story_type: StoryType) -> Option<Color> {
    match story_type {
        StoryType::Bug => Some(Color::Red),
        StoryType::Feature => Some(Color::Green),
        StoryType::Chore => Some(Color::Magenta),
        StoryType::Release | StoryType::Generic => None,
    }
}

/// Apply a named color, honoring the global color override.
pub fn colorize(text: &str, color: Color) -> String {
    text.color(color).to_string()
}

/// Render one story to its report block.
///
/// `owner` is the already-resolved username of the story's first owner, if
/// any; a story with no resolvable owner simply has no owner suffix.
pub fn render_story(story: &Story, owner: Option<&str>) -> String {
    if story.story_type() == StoryType::Release {
        return render_release(story);
    }

    let mut out = format!(
        "* {} - {} {} {}",
        colorize(&story.id().to_string(), Color::Yellow),
        colorize(&format!("[{}]", story.state()), state_color(story.state())),
        type_tag(story),
        story.name(),
    );

    if let Some(accepted) = story.accepted_at() {
        out.push_str(&colorize(
            &format!(" ({})", accepted.format(DATE_FORMAT)),
            Color::Green,
        ));
    }

    if let Some(owner) = owner {
        out.push_str(&colorize(&format!(" <{owner}>"), Color::Blue));
    }

    out
}

fn type_tag(story: &Story) -> String {
    let raw = story.raw_type().unwrap_or("");
    let tag = match story.estimate() {
        Some(estimate) => format!("[{raw}:{estimate}]"),
        None => format!("[{raw}]"),
    };
    match type_color(story.story_type()) {
        Some(color) => colorize(&tag, color),
        None => tag,
    }
}

fn render_release(story: &Story) -> String {
    let banner = match story.accepted_at() {
        Some(accepted) => format!(
            "\n### Release {}: {} ###\n",
            accepted.format(DATE_FORMAT),
            story.name()
        ),
        None => format!("\n### Release: {} ###\n", story.name()),
    };
    colorize(&banner, Color::Blue)
}
