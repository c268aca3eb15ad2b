//! Saved session file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use requestor_application::ports::{SessionStore, SessionStoreError};
use requestor_domain::SavedRequestConfiguration;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

const SESSION_FILE_NAME: &str = "session.json";

/// Stores the saved session as one JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store in `dir` using the default file name.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    /// Creates a store at the default location in the config directory.
    #[must_use]
    pub fn default_location() -> Option<Self> {
        super::config_dir().map(|dir| Self::in_dir(&dir))
    }

    /// Returns the file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn to_store_error(error: SerializationError) -> SessionStoreError {
    SessionStoreError::Serialization(error.to_string())
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<SavedRequestConfiguration>, SessionStoreError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let saved = from_json_bytes(&content).map_err(to_store_error)?;
        Ok(Some(saved))
    }

    async fn save(&self, saved: &SavedRequestConfiguration) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(saved).map_err(to_store_error)?;

        // Write to a sibling file first so a crash never leaves half a session.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, content).await?;
        fs::rename(&staging, &self.path).await?;

        tracing::debug!(path = %self.path.display(), "session written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
