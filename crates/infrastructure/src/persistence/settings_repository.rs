//! Host settings file and environment overrides.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use requestor_domain::RequestorSettings;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Overrides the service base URL.
pub const ENV_BASE_URL: &str = "REQUESTOR_BASE_URL";
/// Overrides where the session is saved.
pub const ENV_SESSION_FILE: &str = "REQUESTOR_SESSION_FILE";
/// Overrides the fallback log filter.
pub const ENV_LOG: &str = "REQUESTOR_LOG";

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Reads and writes `settings.json`.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Creates a repository at the default location in the config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: super::config_dir().map(|p| p.join(SETTINGS_FILE_NAME)),
        }
    }

    /// Creates a repository for an explicit file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the settings file path, if one could be determined.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings, returning defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<RequestorSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(RequestorSettings::default());
        };

        match fs::read(path).await {
            Ok(content) => Ok(from_json_bytes(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Ok(RequestorSettings::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Saves settings, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, settings: &RequestorSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

/// Applies `REQUESTOR_*` overrides read through `lookup`.
///
/// Blank values are ignored.
#[must_use]
pub fn apply_env_overrides<F>(mut settings: RequestorSettings, lookup: F) -> RequestorSettings
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(url) = read(ENV_BASE_URL) {
        settings.service_base_url = Some(url);
    }
    if let Some(file) = read(ENV_SESSION_FILE) {
        settings.session_file = Some(PathBuf::from(file));
    }
    if let Some(filter) = read(ENV_LOG) {
        settings.log_filter = filter;
    }
    settings
}

/// Applies overrides from the process environment.
#[must_use]
pub fn apply_process_env(settings: RequestorSettings) -> RequestorSettings {
    apply_env_overrides(settings, |name| std::env::var(name).ok())
}
