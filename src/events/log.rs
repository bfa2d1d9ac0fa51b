use std::cmp::Reverse;

use super::models::{EventDetail, EventKind, MatchEvent, Side};
use crate::clock::{SystemTimeSource, TimeSource};
use crate::error::AppError;

/// Append-only, time-stamped record of match events for both sides.
///
/// Scores and card counts are always derived from the entries; the log keeps
/// no separate counters that could drift from what was recorded.
#[derive(Debug, Clone)]
pub struct EventLog<T: TimeSource = SystemTimeSource> {
    time: T,
    entries: Vec<MatchEvent>,
}

impl EventLog<SystemTimeSource> {
    pub fn new() -> Self {
        Self::with_time_source(SystemTimeSource)
    }
}

impl Default for EventLog<SystemTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> EventLog<T> {
    pub fn with_time_source(time: T) -> Self {
        Self {
            time,
            entries: Vec::new(),
        }
    }

    /// Rebuilds a log from previously recorded entries, keeping their order.
    pub fn from_entries(time: T, entries: Vec<MatchEvent>) -> Self {
        Self { time, entries }
    }

    /// Appends an event stamped with `clock_minute` and the current wall-clock instant.
    ///
    /// # Errors
    /// * `AppError::InvalidEvent` - a substitution without substitution detail
    pub fn append(
        &mut self,
        side: Side,
        kind: EventKind,
        detail: EventDetail,
        clock_minute: u32,
    ) -> Result<&MatchEvent, AppError> {
        if kind == EventKind::Substitution && detail.substitution.is_none() {
            return Err(AppError::invalid_event(
                "substitution requires both player out and player in",
            ));
        }

        let EventDetail {
            player,
            note,
            substitution,
        } = detail;
        self.entries.push(MatchEvent {
            side,
            kind,
            match_minute: clock_minute,
            recorded_at: self.time.now(),
            player,
            note,
            substitution,
        });
        tracing::info!("Recorded {kind} for {side} at minute {clock_minute}");

        let index = self.entries.len() - 1;
        Ok(&self.entries[index])
    }

    /// Removes every event for both sides.
    pub fn clear(&mut self) {
        tracing::info!("Clearing {} events from timeline", self.entries.len());
        self.entries.clear();
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[MatchEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events for one side, most recent minute first.
    /// Events sharing a minute are listed newest recorded first.
    pub fn entries_for(&self, side: Side) -> Vec<&MatchEvent> {
        let mut events: Vec<&MatchEvent> =
            self.entries.iter().rev().filter(|e| e.side == side).collect();
        events.sort_by_key(|e| Reverse(e.match_minute));
        events
    }

    /// Both sides merged in ascending minute order, insertion order on ties.
    pub fn timeline(&self) -> Vec<&MatchEvent> {
        let mut events: Vec<&MatchEvent> = self.entries.iter().collect();
        events.sort_by_key(|e| e.match_minute);
        events
    }

    /// The last `count` timeline events, newest first.
    pub fn recent(&self, count: usize) -> Vec<&MatchEvent> {
        let mut timeline = self.timeline();
        let skip = timeline.len().saturating_sub(count);
        let mut recent = timeline.split_off(skip);
        recent.reverse();
        recent
    }

    pub fn count_by_kind(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn count_for(&self, side: Side, kind: EventKind) -> usize {
        self.entries
            .iter()
            .filter(|e| e.side == side && e.kind == kind)
            .count()
    }

    pub fn goals_for(&self, side: Side) -> usize {
        self.count_for(side, EventKind::Goal)
    }

    /// Yellow and red cards shown to one side.
    pub fn cards_for(&self, side: Side) -> usize {
        self.entries
            .iter()
            .filter(|e| e.side == side && e.kind.is_card())
            .count()
    }
}
