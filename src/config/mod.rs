use crate::clock::{MinutePolicy, RestorePolicy};
use crate::constants::{DEFAULT_REFRESH_INTERVAL_MS, env_vars};
use crate::error::AppError;
use crate::session::MinutePolicies;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_default_state_file_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing scoreboard settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Default home team name for new sessions.
    #[serde(default)]
    pub home_team: String,
    /// Default away team name for new sessions.
    #[serde(default)]
    pub away_team: String,
    /// Where the current match session is saved. Defaults to the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file_path: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// How often the running clock is redrawn, in milliseconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_ms: u64,
    /// Minute rounding for the clock display.
    #[serde(default = "default_display_policy")]
    pub display_minute_policy: MinutePolicy,
    /// Minute rounding for event stamps.
    #[serde(default = "default_event_policy")]
    pub event_minute_policy: MinutePolicy,
    /// Resume a clock that was running when the session was saved.
    #[serde(default)]
    pub resume_running_on_restore: bool,
}

fn default_refresh_interval() -> u64 {
    DEFAULT_REFRESH_INTERVAL_MS
}

fn default_display_policy() -> MinutePolicy {
    MinutePolicy::Raw
}

fn default_event_policy() -> MinutePolicy {
    MinutePolicy::AtLeastOne
}

impl Default for Config {
    fn default() -> Self {
        Config {
            home_team: String::new(),
            away_team: String::new(),
            state_file_path: None,
            log_file_path: None,
            refresh_interval_ms: default_refresh_interval(),
            display_minute_policy: default_display_policy(),
            event_minute_policy: default_event_policy(),
            resume_running_on_restore: false,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `SCOREBOARD_STATE_FILE` - Override session state file path
    /// - `SCOREBOARD_LOG_FILE` - Override log file path
    /// - `SCOREBOARD_REFRESH_MS` - Override display refresh interval
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(state_file) = std::env::var(env_vars::STATE_FILE) {
            self.state_file_path = Some(state_file);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(refresh) = std::env::var(env_vars::REFRESH_MS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.refresh_interval_ms = refresh;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.refresh_interval_ms,
            &self.state_file_path,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Resolved location of the saved match session.
    pub fn state_file(&self) -> PathBuf {
        match &self.state_file_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(get_default_state_file_path()),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn minute_policies(&self) -> MinutePolicies {
        MinutePolicies {
            display: self.display_minute_policy,
            event: self.event_minute_policy,
        }
    }

    pub fn restore_policy(&self) -> RestorePolicy {
        if self.resume_running_on_restore {
            RestorePolicy::ResumeRunning
        } else {
            RestorePolicy::PauseRunning
        }
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Defaults are in use)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Default Teams:");
        println!(
            "{} vs {}",
            display_or_default(&config.home_team, "(unset)"),
            display_or_default(&config.away_team, "(unset)")
        );
        println!("────────────────────────────────────");
        println!("Session File:");
        println!("{}", config.state_file().display());
        println!("────────────────────────────────────");
        println!("Refresh Interval:");
        println!("{} ms", config.refresh_interval_ms);
        println!("────────────────────────────────────");
        println!("Minute Policies:");
        println!(
            "display = {:?}, events = {:?}",
            config.display_minute_policy, config.event_minute_policy
        );
        println!("Resume running clock on restore: {}", config.resume_running_on_restore);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/live_scoreboard.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn display_or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
