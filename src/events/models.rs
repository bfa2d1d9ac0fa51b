use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Which team an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

impl FromStr for Side {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "h" => Ok(Side::Home),
            "away" | "a" => Ok(Side::Away),
            other => Err(AppError::UnknownSide(other.to_string())),
        }
    }
}

/// The four kinds of match event the log understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "goal")]
    Goal,
    #[serde(rename = "yellow")]
    YellowCard,
    #[serde(rename = "red")]
    RedCard,
    #[serde(rename = "substitution")]
    Substitution,
}

impl EventKind {
    pub fn is_card(self) -> bool {
        matches!(self, EventKind::YellowCard | EventKind::RedCard)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Goal => "goal",
            EventKind::YellowCard => "yellow",
            EventKind::RedCard => "red",
            EventKind::Substitution => "substitution",
        };
        f.write_str(name)
    }
}

impl FromStr for EventKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goal" => Ok(EventKind::Goal),
            "yellow" | "yellow_card" | "yellowcard" => Ok(EventKind::YellowCard),
            "red" | "red_card" | "redcard" => Ok(EventKind::RedCard),
            "sub" | "substitution" => Ok(EventKind::Substitution),
            other => Err(AppError::UnknownEventKind(other.to_string())),
        }
    }
}

/// Players involved in a substitution. Empty names are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Substitution {
    #[serde(rename = "playerOut")]
    pub player_out: String,
    #[serde(rename = "playerIn")]
    pub player_in: String,
}

/// Optional details supplied alongside an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDetail {
    pub player: Option<String>,
    pub note: Option<String>,
    pub substitution: Option<Substitution>,
}

impl EventDetail {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn player(name: impl Into<String>) -> Self {
        Self {
            player: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn substitution(player_out: impl Into<String>, player_in: impl Into<String>) -> Self {
        Self {
            substitution: Some(Substitution {
                player_out: player_out.into(),
                player_in: player_in.into(),
            }),
            ..Self::default()
        }
    }
}

/// A recorded match event. Entries are immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub side: Side,
    pub kind: EventKind,
    #[serde(rename = "matchMinute")]
    pub match_minute: u32,
    #[serde(rename = "recordedAt")]
    pub recorded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution: Option<Substitution>,
}

impl MatchEvent {
    /// Player-facing detail text: `"out ⇄ in"` for substitutions, otherwise the player name.
    pub fn detail_text(&self) -> Option<String> {
        if let Some(sub) = &self.substitution {
            return Some(format!("{} ⇄ {}", sub.player_out, sub.player_in));
        }
        self.player.clone().filter(|p| !p.trim().is_empty())
    }
}
