//! Match events: the append-only event log and the records it stores.

pub mod log;
pub mod models;

pub use log::EventLog;
pub use models::{EventDetail, EventKind, MatchEvent, Side, Substitution};
