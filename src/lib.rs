//! Live Football Match Scoreboard Library
//!
//! This library keeps the state of one live football match: a wall-clock
//! anchored match clock, an append-only event timeline, and everything
//! derived from them (score, card counts, shareable summaries).
//!
//! # Examples
//!
//! ```rust
//! use live_scoreboard::clock::ManualTimeSource;
//! use live_scoreboard::events::{EventDetail, EventKind, Side};
//! use live_scoreboard::session::MatchSession;
//! use live_scoreboard::team::TeamIdentity;
//! use std::time::Duration;
//!
//! let time = ManualTimeSource::default();
//! let mut session = MatchSession::with_time_source(
//!     time.clone(),
//!     TeamIdentity::named("Lyon"),
//!     TeamIdentity::named("Lens"),
//! );
//!
//! session.start();
//! time.advance(Duration::from_secs(65));
//! let goal = session
//!     .record(Side::Home, EventKind::Goal, EventDetail::player("Lacazette"))
//!     .unwrap();
//! assert_eq!(goal.match_minute, 1);
//! assert_eq!(session.score(), (1, 0));
//! ```

pub mod app;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod events;
pub mod export;
pub mod formatting;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod session;
pub mod team;

// Re-export commonly used types for convenience
pub use clock::{ClockSnapshot, ClockState, MatchClock, MinutePolicy, RestorePolicy, TimeSource};
pub use config::Config;
pub use error::AppError;
pub use events::{EventDetail, EventKind, EventLog, MatchEvent, Side, Substitution};
pub use export::ShareCard;
pub use persistence::SessionSnapshot;
pub use session::MatchSession;
pub use team::{LogoSource, TeamIdentity};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
