//! Save session use case.

use requestor_domain::{RequestConfiguration, SavedRequestConfiguration};

use crate::ApplicationResult;
use crate::ports::{Clock, SessionStore};

/// Writes the persisted subset of a snapshot to the session store.
pub struct SaveSession<S, C> {
    store: S,
    clock: C,
}

impl<S: SessionStore, C: Clock> SaveSession<S, C> {
    /// Creates a new `SaveSession` use case.
    #[must_use]
    pub const fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Executes the use case, returning what was written.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub async fn execute(
        &self,
        snapshot: &RequestConfiguration,
    ) -> ApplicationResult<SavedRequestConfiguration> {
        let saved = SavedRequestConfiguration::from_snapshot(snapshot, self.clock.now());
        self.store.save(&saved).await?;
        Ok(saved)
    }
}
