//! File-backed persistence for the saved session and host settings.
//!
//! Both files live in the platform config directory by default:
//! - Linux: ~/.config/requestor/
//! - macOS: ~/Library/Application Support/requestor/
//! - Windows: %APPDATA%/requestor/

mod session_repository;
mod settings_repository;

pub use session_repository::FileSessionStore;
pub use settings_repository::{
    ENV_BASE_URL, ENV_LOG, ENV_SESSION_FILE, SettingsError, SettingsRepository, apply_env_overrides,
    apply_process_env,
};

use std::path::PathBuf;

/// Returns the Requestor config directory, if the platform has one.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("requestor"))
}
