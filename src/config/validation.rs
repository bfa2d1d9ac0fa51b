use crate::constants::{MAX_REFRESH_INTERVAL_MS, MIN_REFRESH_INTERVAL_MS};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Refresh interval must lie within 100..=60000 ms
/// - If a state file path is provided, it cannot be empty or a directory
/// - If a log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    refresh_interval_ms: u64,
    state_file_path: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if !(MIN_REFRESH_INTERVAL_MS..=MAX_REFRESH_INTERVAL_MS).contains(&refresh_interval_ms) {
        return Err(AppError::config_error(format!(
            "Refresh interval must be between {MIN_REFRESH_INTERVAL_MS} and {MAX_REFRESH_INTERVAL_MS} ms, got {refresh_interval_ms}"
        )));
    }

    if let Some(state_path) = state_file_path {
        if state_path.trim().is_empty() {
            return Err(AppError::config_error("State file path cannot be empty"));
        }
        if Path::new(state_path).is_dir() {
            return Err(AppError::config_error(format!(
                "State file path '{state_path}' is a directory"
            )));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_defaults() {
        assert!(validate_config(1000, &None, &None).is_ok());
    }

    #[test]
    fn test_refresh_interval_bounds() {
        assert!(validate_config(MIN_REFRESH_INTERVAL_MS, &None, &None).is_ok());
        assert!(validate_config(MAX_REFRESH_INTERVAL_MS, &None, &None).is_ok());
        assert!(matches!(
            validate_config(50, &None, &None),
            Err(AppError::Config(_))
        ));
        assert!(validate_config(MAX_REFRESH_INTERVAL_MS + 1, &None, &None).is_err());
    }

    #[test]
    fn test_state_file_path_rules() {
        let dir = tempdir().unwrap();
        assert!(validate_config(1000, &Some("  ".to_string()), &None).is_err());
        let as_dir = Some(dir.path().to_string_lossy().to_string());
        assert!(validate_config(1000, &as_dir, &None).is_err());
        let file = Some(dir.path().join("m.json").to_string_lossy().to_string());
        assert!(validate_config(1000, &file, &None).is_ok());
    }

    #[test]
    fn test_log_path_parent_created() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("deep").join("scoreboard.log");
        let log_path = Some(log.to_string_lossy().to_string());
        assert!(validate_config(1000, &None, &log_path).is_ok());
        assert!(dir.path().join("deep").exists());
        assert!(validate_config(1000, &None, &Some(String::new())).is_err());
    }
}
