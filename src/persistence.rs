//! Saved session state.
//!
//! The session is stored as a plain JSON record. New fields are only ever
//! added as optional, so older files keep loading and newer files load here
//! with unknown fields ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::clock::ClockSnapshot;
use crate::constants::persistence::SCHEMA_VERSION;
use crate::error::AppError;
use crate::events::MatchEvent;
use crate::team::TeamIdentity;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(rename = "schemaVersion", default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub home: TeamIdentity,
    #[serde(default)]
    pub away: TeamIdentity,
    #[serde(default)]
    pub clock: ClockSnapshot,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

impl SessionSnapshot {
    pub fn new(
        home: TeamIdentity,
        away: TeamIdentity,
        clock: ClockSnapshot,
        events: Vec<MatchEvent>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            home,
            away,
            clock,
            events,
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let snapshot: SessionSnapshot = serde_json::from_str(content)?;
        if snapshot.schema_version > SCHEMA_VERSION {
            tracing::warn!(
                "Session file has schema version {} (newer than {}), unknown fields are ignored",
                snapshot.schema_version,
                SCHEMA_VERSION
            );
        }
        Ok(snapshot)
    }
}

/// Writes the snapshot to `path`, creating the parent directory if needed.
///
/// The file is written next to its destination and renamed into place so an
/// interrupted save never leaves a truncated session behind.
pub async fn save_snapshot(path: &Path, snapshot: &SessionSnapshot) -> Result<(), AppError> {
    let parent = path.parent().ok_or_else(|| {
        AppError::persistence_error(format!("Path '{}' has no parent directory", path.display()))
    })?;
    if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent).await?;
    }

    let content = snapshot.to_json()?;
    let tmp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    drop(file);
    fs::rename(&tmp_path, path).await?;

    tracing::debug!(
        "Saved session with {} events to {}",
        snapshot.events.len(),
        path.display()
    );
    Ok(())
}

/// Loads a saved snapshot. Returns `Ok(None)` when no session has been saved yet.
pub async fn load_snapshot(path: &Path) -> Result<Option<SessionSnapshot>, AppError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).await?;
    let snapshot = SessionSnapshot::from_json(&content).map_err(|e| {
        AppError::persistence_error(format!(
            "Cannot read saved session '{}': {e}",
            path.display()
        ))
    })?;
    tracing::info!(
        "Loaded session with {} events from {}",
        snapshot.events.len(),
        path.display()
    );
    Ok(Some(snapshot))
}
