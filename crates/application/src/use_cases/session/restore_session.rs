//! Restore session use case.

use requestor_domain::RequestConfiguration;
use requestor_domain::persistence::CURRENT_SCHEMA_VERSION;

use crate::ApplicationResult;
use crate::ports::{SessionStore, SessionStoreError};

/// Loads the saved session and rebuilds a snapshot from it.
pub struct RestoreSession<S> {
    store: S,
}

impl<S: SessionStore> RestoreSession<S> {
    /// Creates a new `RestoreSession` use case.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Executes the use case.
    ///
    /// Returns `None` when nothing was saved.
    ///
    /// # Errors
    /// Returns an error if the saved session cannot be read or was written
    /// by a newer schema.
    pub async fn execute(&self) -> ApplicationResult<Option<RequestConfiguration>> {
        let Some(saved) = self.store.load().await? else {
            return Ok(None);
        };
        if saved.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(SessionStoreError::UnsupportedVersion(saved.schema_version).into());
        }
        tracing::info!(path = %saved.path, saved_at = %saved.saved_at, "restoring session");
        Ok(Some(RequestConfiguration::restore(saved)))
    }
}
