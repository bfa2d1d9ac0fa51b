//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and default values so the clock,
//! event log and terminal layer agree on them.

/// Default interval between display refreshes in milliseconds
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;

/// Allowed range for the display refresh interval in milliseconds
pub const MIN_REFRESH_INTERVAL_MS: u64 = 100;
pub const MAX_REFRESH_INTERVAL_MS: u64 = 60_000;

/// Number of seconds in one match minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Default display names used when a team name is left empty
pub mod teams {
    pub const DEFAULT_HOME_NAME: &str = "Home";
    pub const DEFAULT_AWAY_NAME: &str = "Away";
}

/// Logo input limits
pub mod logo {
    /// Maximum accepted logo file size (5 MiB)
    pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

    /// File extensions accepted as images
    pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp"];

    /// Shown in place of a missing home logo
    pub const HOME_PLACEHOLDER: &str = "🏠";
    /// Shown in place of a missing away logo
    pub const AWAY_PLACEHOLDER: &str = "✈️";
}

/// Share card (export) layout
pub mod export {
    /// Number of recent events shown on the share card
    pub const RECENT_EVENTS: usize = 3;

    /// Header line of the share card
    pub const TITLE: &str = "⚽ Match Live Score";

    /// Default export file name
    pub const DEFAULT_FILE_NAME: &str = "match-score.txt";
}

/// Persisted session layout
pub mod persistence {
    /// Current schema version of the saved session file
    pub const SCHEMA_VERSION: u32 = 1;

    /// Default session file name inside the config directory
    pub const DEFAULT_STATE_FILE_NAME: &str = "match.json";
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Width of the scoreboard block
    pub const BOARD_WIDTH: usize = 50;

    /// Maximum events listed per side panel
    pub const MAX_SIDE_EVENTS: usize = 5;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for session state file override
    pub const STATE_FILE: &str = "SCOREBOARD_STATE_FILE";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SCOREBOARD_LOG_FILE";

    /// Environment variable for refresh interval override in milliseconds
    pub const REFRESH_MS: &str = "SCOREBOARD_REFRESH_MS";
}
