//! Session store port
//!
//! Defines the interface for durable storage of the saved session.

use async_trait::async_trait;

use requestor_domain::SavedRequestConfiguration;

/// Errors that can occur while reading or writing the saved session.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The stored session uses a schema this build cannot read.
    #[error("Unsupported session schema version: {0}")]
    UnsupportedVersion(u32),
}

/// Repository trait for the saved session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the saved session, if one exists.
    ///
    /// # Errors
    /// Returns an error if a stored session exists but cannot be read.
    async fn load(&self) -> Result<Option<SavedRequestConfiguration>, SessionStoreError>;

    /// Saves the session, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the session cannot be written.
    async fn save(&self, saved: &SavedRequestConfiguration) -> Result<(), SessionStoreError>;

    /// Removes the saved session. Clearing an empty store succeeds.
    ///
    /// # Errors
    /// Returns an error if an existing session cannot be removed.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for &T {
    async fn load(&self) -> Result<Option<SavedRequestConfiguration>, SessionStoreError> {
        (**self).load().await
    }

    async fn save(&self, saved: &SavedRequestConfiguration) -> Result<(), SessionStoreError> {
        (**self).save(saved).await
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        (**self).clear().await
    }
}
