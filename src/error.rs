use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Event log contract violations
    #[error("Unknown event kind: {0}")]
    UnknownEventKind(String),

    #[error("Unknown side: {0} (expected 'home' or 'away')")]
    UnknownSide(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Invalid logo: {0}")]
    InvalidLogo(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Session state error: {0}")]
    Persistence(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid event error
    pub fn invalid_event(msg: impl Into<String>) -> Self {
        Self::InvalidEvent(msg.into())
    }

    /// Create an invalid logo error
    pub fn invalid_logo(msg: impl Into<String>) -> Self {
        Self::InvalidLogo(msg.into())
    }

    /// Create an invalid command error
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }

    /// Create a session state (persistence) error
    pub fn persistence_error(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Check if error was caused by user input rather than the environment.
    /// Input errors are reported back to the user and the session continues.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            AppError::UnknownEventKind(_)
                | AppError::UnknownSide(_)
                | AppError::InvalidEvent(_)
                | AppError::InvalidLogo(_)
                | AppError::InvalidCommand(_)
        )
    }
}
