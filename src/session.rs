//! One match session: the clock, the event log and both team identities.

use crate::clock::{
    ClockState, MatchClock, MinutePolicy, RestorePolicy, SystemTimeSource, TimeSource,
};
use crate::error::AppError;
use crate::events::{EventDetail, EventKind, EventLog, MatchEvent, Side};
use crate::persistence::SessionSnapshot;
use crate::team::TeamIdentity;
use std::time::Duration;

/// Minute rounding used for the clock display and for event stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinutePolicies {
    pub display: MinutePolicy,
    pub event: MinutePolicy,
}

impl Default for MinutePolicies {
    fn default() -> Self {
        Self {
            display: MinutePolicy::Raw,
            event: MinutePolicy::AtLeastOne,
        }
    }
}

/// Owns all state of a single match. Construct one per match.
#[derive(Debug, Clone)]
pub struct MatchSession<T: TimeSource + Clone = SystemTimeSource> {
    pub home: TeamIdentity,
    pub away: TeamIdentity,
    clock: MatchClock<T>,
    events: EventLog<T>,
    policies: MinutePolicies,
}

impl MatchSession<SystemTimeSource> {
    pub fn new(home: TeamIdentity, away: TeamIdentity) -> Self {
        Self::with_time_source(SystemTimeSource, home, away)
    }
}

impl<T: TimeSource + Clone> MatchSession<T> {
    pub fn with_time_source(time: T, home: TeamIdentity, away: TeamIdentity) -> Self {
        Self {
            home,
            away,
            clock: MatchClock::with_time_source(time.clone()),
            events: EventLog::with_time_source(time),
            policies: MinutePolicies::default(),
        }
    }

    /// Rebuilds a session from saved state.
    pub fn restore(time: T, snapshot: SessionSnapshot, restore: RestorePolicy) -> Self {
        let SessionSnapshot {
            home,
            away,
            clock,
            events,
            ..
        } = snapshot;
        Self {
            home,
            away,
            clock: MatchClock::restore(time.clone(), clock, restore),
            events: EventLog::from_entries(time, events),
            policies: MinutePolicies::default(),
        }
    }

    pub fn with_policies(mut self, policies: MinutePolicies) -> Self {
        self.policies = policies;
        self
    }

    pub fn policies(&self) -> MinutePolicies {
        self.policies
    }

    pub fn clock(&self) -> &MatchClock<T> {
        &self.clock
    }

    pub fn events(&self) -> &EventLog<T> {
        &self.events
    }

    pub fn team(&self, side: Side) -> &TeamIdentity {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut TeamIdentity {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    pub fn start(&mut self) {
        self.clock.start();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn reset(&mut self) {
        self.clock.reset();
    }

    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    pub fn display_minute(&self) -> u32 {
        self.clock.current_minute(self.policies.display)
    }

    /// Records an event stamped with the clock's current minute under the event policy.
    pub fn record(
        &mut self,
        side: Side,
        kind: EventKind,
        detail: EventDetail,
    ) -> Result<&MatchEvent, AppError> {
        let minute = self.clock.current_minute(self.policies.event);
        self.events.append(side, kind, detail, minute)
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Goals scored by each side as `(home, away)`.
    pub fn score(&self) -> (usize, usize) {
        (
            self.events.goals_for(Side::Home),
            self.events.goals_for(Side::Away),
        )
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(
            self.home.clone(),
            self.away.clone(),
            self.clock.snapshot(),
            self.events.entries().to_vec(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualTimeSource;

    fn session() -> (ManualTimeSource, MatchSession<ManualTimeSource>) {
        let time = ManualTimeSource::default();
        let session = MatchSession::with_time_source(
            time.clone(),
            TeamIdentity::named("Lens"),
            TeamIdentity::named("Lille"),
        );
        (time, session)
    }

    #[test]
    fn test_goals_stamped_against_clock() {
        let (time, mut session) = session();
        session.start();
        time.advance(Duration::from_secs(65));
        session
            .record(Side::Home, EventKind::Goal, EventDetail::none())
            .unwrap();
        time.advance(Duration::from_secs(60));
        session
            .record(Side::Away, EventKind::Goal, EventDetail::none())
            .unwrap();

        let timeline = session.events().timeline();
        assert_eq!(timeline.len(), 2);
        assert_eq!((timeline[0].side, timeline[0].match_minute), (Side::Home, 1));
        assert_eq!((timeline[1].side, timeline[1].match_minute), (Side::Away, 2));
        assert_eq!(session.score(), (1, 1));
    }

    #[test]
    fn test_event_before_kickoff_stamped_minute_one() {
        let (_time, mut session) = session();
        let event = session
            .record(Side::Away, EventKind::YellowCard, EventDetail::none())
            .unwrap();
        assert_eq!(event.match_minute, 1);
        assert_eq!(session.display_minute(), 0);
    }

    #[test]
    fn test_raw_event_policy() {
        let (_time, session) = session();
        let mut session = session.with_policies(MinutePolicies {
            display: MinutePolicy::Raw,
            event: MinutePolicy::Raw,
        });
        let event = session
            .record(Side::Home, EventKind::Goal, EventDetail::none())
            .unwrap();
        assert_eq!(event.match_minute, 0);
    }

    #[test]
    fn test_reset_does_not_restamp_existing_events() {
        let (time, mut session) = session();
        session.start();
        time.advance(Duration::from_secs(30 * 60));
        session
            .record(Side::Home, EventKind::RedCard, EventDetail::player("Ndiaye"))
            .unwrap();
        session.reset();
        assert_eq!(session.events().entries()[0].match_minute, 30);
        assert_eq!(session.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_team_accessors() {
        let (_time, mut session) = session();
        assert_eq!(session.team(Side::Away).name, "Lille");
        session.team_mut(Side::Home).name = "RC Lens".to_string();
        assert_eq!(session.home.name, "RC Lens");
    }
}
