//! Match clock anchored to wall-clock time.
//!
//! The clock never counts ticks. While running it stores the wall-clock instant
//! at which the elapsed time would have been zero, so the elapsed time can be
//! recomputed at any moment no matter how irregularly the display is refreshed
//! (or how long the process was suspended).

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use crate::constants::SECONDS_PER_MINUTE;

/// Source of the current wall-clock instant.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven time source for deterministic tests and replays.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and advance time for every clock and log built from the others.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    millis: Arc<AtomicI64>,
}

impl ManualTimeSource {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    /// Moves time forward by `by`.
    pub fn advance(&self, by: Duration) {
        let delta = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    /// Jumps to an absolute instant, which may lie in the past.
    pub fn set(&self, instant: DateTime<Utc>) {
        self.millis
            .store(instant.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Default for ManualTimeSource {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst)).unwrap_or_default()
    }
}

/// Running state of the match clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    #[default]
    Idle,
    Running,
    Paused,
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClockState::Idle => "idle",
            ClockState::Running => "running",
            ClockState::Paused => "paused",
        };
        f.write_str(name)
    }
}

/// Rounding policy for turning elapsed time into a match minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MinutePolicy {
    /// `floor(elapsed / 60s)`, zero before the first full minute. Used for display.
    #[default]
    Raw,
    /// `max(1, floor(elapsed / 60s))`. Used when stamping events so nothing lands on minute 0.
    AtLeastOne,
}

impl MinutePolicy {
    pub fn apply(self, elapsed: Duration) -> u32 {
        let raw = u32::try_from(elapsed.as_secs() / SECONDS_PER_MINUTE).unwrap_or(u32::MAX);
        match self {
            MinutePolicy::Raw => raw,
            MinutePolicy::AtLeastOne => raw.max(1),
        }
    }
}

/// Whether a clock saved while running comes back running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestorePolicy {
    /// Running clocks are restored paused at their saved elapsed time.
    #[default]
    PauseRunning,
    /// Running clocks resume, re-anchored to the current instant.
    ResumeRunning,
}

/// Persistable form of the clock. The wall-clock anchor is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClockSnapshot {
    #[serde(rename = "accumulatedElapsedMs", default)]
    pub accumulated_elapsed_ms: u64,
    #[serde(default)]
    pub state: ClockState,
}

/// Start/pause/reset match clock.
///
/// Invalid transitions (`start` while running, `pause` while not running) are
/// no-ops. None of the operations can fail.
#[derive(Debug, Clone)]
pub struct MatchClock<T: TimeSource = SystemTimeSource> {
    time: T,
    anchor: Option<DateTime<Utc>>,
    accumulated: Duration,
    state: ClockState,
}

impl MatchClock<SystemTimeSource> {
    pub fn new() -> Self {
        Self::with_time_source(SystemTimeSource)
    }
}

impl Default for MatchClock<SystemTimeSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> MatchClock<T> {
    pub fn with_time_source(time: T) -> Self {
        Self {
            time,
            anchor: None,
            accumulated: Duration::ZERO,
            state: ClockState::Idle,
        }
    }

    /// Rebuilds a clock from a snapshot.
    pub fn restore(time: T, snapshot: ClockSnapshot, policy: RestorePolicy) -> Self {
        let mut clock = Self::with_time_source(time);
        let saved = Duration::from_millis(snapshot.accumulated_elapsed_ms);

        match (snapshot.state, policy) {
            // An idle clock always reads zero, whatever was written.
            (ClockState::Idle, _) => {}
            (ClockState::Paused, _) | (ClockState::Running, RestorePolicy::PauseRunning) => {
                clock.accumulated = saved;
                clock.state = ClockState::Paused;
            }
            (ClockState::Running, RestorePolicy::ResumeRunning) => {
                clock.accumulated = saved;
                clock.start();
            }
        }

        tracing::debug!(
            "Restored clock from {} snapshot as {} at {:?}",
            snapshot.state,
            clock.state,
            clock.elapsed()
        );
        clock
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Starts or resumes the clock. No-op while already running.
    pub fn start(&mut self) {
        if self.state == ClockState::Running {
            tracing::debug!("Ignoring start: clock already running");
            return;
        }

        let offset = TimeDelta::from_std(self.accumulated).unwrap_or(TimeDelta::MAX);
        let now = self.time.now();
        self.anchor = Some(now.checked_sub_signed(offset).unwrap_or(DateTime::<Utc>::MIN_UTC));
        self.state = ClockState::Running;
        tracing::info!("Clock started at {:?} elapsed", self.accumulated);
    }

    /// Freezes the clock at the current elapsed time. No-op unless running.
    pub fn pause(&mut self) {
        if self.state != ClockState::Running {
            tracing::debug!("Ignoring pause: clock is {}", self.state);
            return;
        }

        self.accumulated = self.running_elapsed();
        self.anchor = None;
        self.state = ClockState::Paused;
        tracing::info!("Clock paused at {:?}", self.accumulated);
    }

    /// Returns the clock to idle at zero. Valid from any state.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.anchor = None;
        self.state = ClockState::Idle;
        tracing::info!("Clock reset");
    }

    /// Running time accumulated across all start/pause cycles.
    pub fn elapsed(&self) -> Duration {
        match self.state {
            ClockState::Running => self.running_elapsed(),
            ClockState::Idle | ClockState::Paused => self.accumulated,
        }
    }

    pub fn current_minute(&self, policy: MinutePolicy) -> u32 {
        policy.apply(self.elapsed())
    }

    /// Minute shown next to the running clock.
    pub fn display_minute(&self) -> u32 {
        self.current_minute(MinutePolicy::Raw)
    }

    /// Minute stamped onto newly recorded events.
    pub fn stamp_minute(&self) -> u32 {
        self.current_minute(MinutePolicy::AtLeastOne)
    }

    /// Captures the persistable state. A running clock is saved with its live elapsed time.
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            accumulated_elapsed_ms: u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
            state: self.state,
        }
    }

    fn running_elapsed(&self) -> Duration {
        let Some(anchor) = self.anchor else {
            return self.accumulated;
        };
        // A wall clock stepped backwards must not eat into time already played.
        (self.time.now() - anchor)
            .to_std()
            .unwrap_or(Duration::ZERO)
            .max(self.accumulated)
    }
}
