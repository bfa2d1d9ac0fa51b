//! Team identity: display names and logo references.
//!
//! Logos are only referenced and validated here. Renderers receive the
//! reference through [`TeamIdentity::logo_label`] and decide how to show it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::logo::{
    AWAY_PLACEHOLDER, HOME_PLACEHOLDER, IMAGE_EXTENSIONS, MAX_FILE_SIZE_BYTES,
};
use crate::constants::teams::{DEFAULT_AWAY_NAME, DEFAULT_HOME_NAME};
use crate::error::AppError;
use crate::events::Side;

/// Where a team logo comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum LogoSource {
    File(PathBuf),
    Url(String),
}

impl LogoSource {
    /// Accepts a local image file no larger than 5 MiB.
    ///
    /// # Errors
    /// * `AppError::InvalidLogo` - the file is missing, not an image, or too large
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !has_image_extension(path) {
            return Err(AppError::invalid_logo(format!(
                "'{}' is not an image file (expected one of: {})",
                path.display(),
                IMAGE_EXTENSIONS.join(", ")
            )));
        }

        let metadata = std::fs::metadata(path).map_err(|e| {
            AppError::invalid_logo(format!("Cannot read '{}': {e}", path.display()))
        })?;
        if !metadata.is_file() {
            return Err(AppError::invalid_logo(format!(
                "'{}' is not a file",
                path.display()
            )));
        }
        if metadata.len() > MAX_FILE_SIZE_BYTES {
            return Err(AppError::invalid_logo(format!(
                "'{}' is too large ({} bytes, limit is {} bytes)",
                path.display(),
                metadata.len(),
                MAX_FILE_SIZE_BYTES
            )));
        }

        Ok(LogoSource::File(path.to_path_buf()))
    }

    /// The path or URL this logo points at.
    pub fn reference(&self) -> String {
        match self {
            LogoSource::File(path) => path.display().to_string(),
            LogoSource::Url(url) => url.clone(),
        }
    }

    /// Accepts an http(s) image URL.
    pub fn from_url(url: &str) -> Result<Self, AppError> {
        let url = url.trim();
        let host = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| AppError::invalid_logo(format!("'{url}' is not an http(s) URL")))?;
        if host.is_empty() || host.starts_with('/') {
            return Err(AppError::invalid_logo(format!("'{url}' has no host")));
        }
        Ok(LogoSource::Url(url.to_string()))
    }

    /// Treats anything that looks like a URL as one, otherwise as a file path.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::from_url(trimmed)
        } else {
            Self::from_file(trimmed)
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Name and optional logo of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamIdentity {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoSource>,
}

impl TeamIdentity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: None,
        }
    }

    /// The team name, or the side's default when the name is blank.
    pub fn display_name(&self, side: Side) -> &str {
        let name = self.name.trim();
        if !name.is_empty() {
            return name;
        }
        match side {
            Side::Home => DEFAULT_HOME_NAME,
            Side::Away => DEFAULT_AWAY_NAME,
        }
    }

    /// The logo reference, or the side's placeholder when no logo is set.
    pub fn logo_label(&self, side: Side) -> String {
        match (&self.logo, side) {
            (Some(logo), _) => logo.reference(),
            (None, Side::Home) => HOME_PLACEHOLDER.to_string(),
            (None, Side::Away) => AWAY_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_display_name_falls_back_per_side() {
        assert_eq!(TeamIdentity::default().display_name(Side::Home), "Home");
        assert_eq!(TeamIdentity::named("  ").display_name(Side::Away), "Away");
        assert_eq!(
            TeamIdentity::named(" Lyon ").display_name(Side::Home),
            "Lyon"
        );
    }

    #[test]
    fn test_logo_label_uses_reference_or_placeholder() {
        assert_eq!(TeamIdentity::default().logo_label(Side::Home), "🏠");
        assert_eq!(TeamIdentity::default().logo_label(Side::Away), "✈️");

        let team = TeamIdentity {
            name: "Lens".to_string(),
            logo: Some(LogoSource::File(PathBuf::from("/logos/lens.png"))),
        };
        assert_eq!(team.logo_label(Side::Away), "/logos/lens.png");
    }

    #[test]
    fn test_logo_from_file_accepts_small_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crest.PNG");
        std::fs::write(&path, [0u8; 64]).unwrap();
        assert_eq!(
            LogoSource::from_file(&path).unwrap(),
            LogoSource::File(path.clone())
        );
    }

    #[test]
    fn test_logo_from_file_rejects_non_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert!(matches!(
            LogoSource::from_file(&path),
            Err(AppError::InvalidLogo(_))
        ));
    }

    #[test]
    fn test_logo_from_file_rejects_missing_file() {
        let dir = tempdir().unwrap();
        let result = LogoSource::from_file(dir.path().join("missing.png"));
        assert!(matches!(result, Err(AppError::InvalidLogo(_))));
    }

    #[test]
    fn test_logo_from_file_rejects_oversized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.jpg");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![0u8; (MAX_FILE_SIZE_BYTES + 1) as usize])
            .unwrap();
        let err = LogoSource::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_logo_from_url() {
        assert_eq!(
            LogoSource::parse("https://example.com/crest.svg").unwrap(),
            LogoSource::Url("https://example.com/crest.svg".to_string())
        );
        assert!(LogoSource::from_url("ftp://example.com/a.png").is_err());
        assert!(LogoSource::from_url("https://").is_err());
    }

    #[test]
    fn test_team_identity_serialization() {
        let team = TeamIdentity {
            name: "Nantes".to_string(),
            logo: Some(LogoSource::Url("https://example.com/n.png".to_string())),
        };
        let json = serde_json::to_string(&team).unwrap();
        assert!(json.contains("\"type\":\"url\""));
        let back: TeamIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, team);

        let bare: TeamIdentity = serde_json::from_str("{}").unwrap();
        assert_eq!(bare, TeamIdentity::default());
    }
}
