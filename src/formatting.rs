//! Text formatting shared by the terminal display and the share card.

use std::time::Duration;

use crate::clock::ClockState;
use crate::events::{EventKind, MatchEvent};

/// Formats elapsed time as `MM:SS`. Minutes keep counting past 99.
///
/// # Examples
///
/// ```
/// use live_scoreboard::formatting::format_clock;
/// use std::time::Duration;
///
/// assert_eq!(format_clock(Duration::from_secs(65)), "01:05");
/// assert_eq!(format_clock(Duration::from_secs(95 * 60)), "95:00");
/// ```
pub fn format_clock(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub fn status_label(state: ClockState) -> &'static str {
    match state {
        ClockState::Idle => "Waiting",
        ClockState::Running => "Live",
        ClockState::Paused => "Paused",
    }
}

pub fn event_icon(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Goal => "⚽",
        EventKind::YellowCard => "🟨",
        EventKind::RedCard => "🟥",
        EventKind::Substitution => "🔄",
    }
}

pub fn event_name(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Goal => "Goal",
        EventKind::YellowCard => "Yellow card",
        EventKind::RedCard => "Red card",
        EventKind::Substitution => "Substitution",
    }
}

pub fn format_score(score: (usize, usize)) -> String {
    format!("{} - {}", score.0, score.1)
}

/// One-line event description: `12' ⚽ Goal - Lyon (Lacazette)`.
pub fn format_event_line(event: &MatchEvent, team_name: &str) -> String {
    let mut line = format!(
        "{}' {} {} - {}",
        event.match_minute,
        event_icon(event.kind),
        event_name(event.kind),
        team_name
    );
    if let Some(detail) = event.detail_text() {
        line.push_str(&format!(" ({detail})"));
    }
    line
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
