//! Clear session use case.

use crate::ApplicationResult;
use crate::ports::SessionStore;

/// Forgets the saved session.
pub struct ClearSession<S> {
    store: S,
}

impl<S: SessionStore> ClearSession<S> {
    /// Creates a new `ClearSession` use case.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// Returns an error if an existing session cannot be removed.
    pub async fn execute(&self) -> ApplicationResult<()> {
        self.store.clear().await?;
        Ok(())
    }
}
