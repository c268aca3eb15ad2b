//! Session lifecycle callbacks invoked by the host.
//!
//! The host calls `on_session_end` with the final snapshot when the editor
//! goes away and `on_hard_navigate` when the user leaves for good. The
//! persistent implementation saves on the former and clears on the latter.

use async_trait::async_trait;

use requestor_domain::RequestConfiguration;

use crate::ApplicationResult;
use crate::ports::{Clock, SessionStore};
use crate::use_cases::{ClearSession, RestoreSession, SaveSession};

/// Callbacks the host fires at the edges of an editing session.
#[async_trait]
pub trait SessionLifecycle: Send + Sync {
    /// Restores a previous session, if any.
    ///
    /// # Errors
    /// Returns an error if a stored session exists but cannot be used.
    async fn on_session_start(&self) -> ApplicationResult<Option<RequestConfiguration>>;

    /// Called once with the final snapshot.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be persisted.
    async fn on_session_end(&self, snapshot: &RequestConfiguration) -> ApplicationResult<()>;

    /// Called when the user navigates away for good.
    ///
    /// # Errors
    /// Returns an error if persisted state cannot be cleared.
    async fn on_hard_navigate(&self) -> ApplicationResult<()>;
}

/// Saves the session through a [`SessionStore`].
pub struct PersistentSessionLifecycle<S, C> {
    store: S,
    clock: C,
}

impl<S: SessionStore, C: Clock> PersistentSessionLifecycle<S, C> {
    /// Creates a lifecycle over the given store and clock.
    #[must_use]
    pub const fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl<S: SessionStore, C: Clock> SessionLifecycle for PersistentSessionLifecycle<S, C> {
    async fn on_session_start(&self) -> ApplicationResult<Option<RequestConfiguration>> {
        RestoreSession::new(&self.store).execute().await
    }

    async fn on_session_end(&self, snapshot: &RequestConfiguration) -> ApplicationResult<()> {
        let saved = SaveSession::new(&self.store, &self.clock)
            .execute(snapshot)
            .await?;
        tracing::info!(path = %saved.path, method = %saved.method, "session saved");
        Ok(())
    }

    async fn on_hard_navigate(&self) -> ApplicationResult<()> {
        ClearSession::new(&self.store).execute().await?;
        tracing::info!("saved session cleared");
        Ok(())
    }
}

/// A lifecycle that persists nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemeralSessionLifecycle;

#[async_trait]
impl SessionLifecycle for EphemeralSessionLifecycle {
    async fn on_session_start(&self) -> ApplicationResult<Option<RequestConfiguration>> {
        Ok(None)
    }

    async fn on_session_end(&self, _snapshot: &RequestConfiguration) -> ApplicationResult<()> {
        Ok(())
    }

    async fn on_hard_navigate(&self) -> ApplicationResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use requestor_domain::persistence::CURRENT_SCHEMA_VERSION;
    use requestor_domain::{Action, HttpMethod, RequestKind, SavedRequestConfiguration, reduce};
    use std::sync::Mutex;

    use crate::ApplicationError;
    use crate::ports::SessionStoreError;

    #[derive(Default)]
    struct InMemoryStore {
        saved: Mutex<Option<SavedRequestConfiguration>>,
    }

    #[async_trait]
    impl SessionStore for InMemoryStore {
        async fn load(&self) -> Result<Option<SavedRequestConfiguration>, SessionStoreError> {
            Ok(self.saved.lock().unwrap().clone())
        }

        async fn save(&self, saved: &SavedRequestConfiguration) -> Result<(), SessionStoreError> {
            *self.saved.lock().unwrap() = Some(saved.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), SessionStoreError> {
            *self.saved.lock().unwrap() = None;
            Ok(())
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn lifecycle() -> PersistentSessionLifecycle<InMemoryStore, FixedClock> {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        PersistentSessionLifecycle::new(InMemoryStore::default(), FixedClock(now))
    }

    fn edited() -> RequestConfiguration {
        let state = reduce(
            &RequestConfiguration::new(),
            Action::UpdateMethod {
                method: HttpMethod::Post,
                request_kind: RequestKind::Http,
            },
        );
        reduce(
            &state,
            Action::UpdatePath {
                path: "/orders".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_session_end_then_start_restores() {
        let lifecycle = lifecycle();
        assert!(lifecycle.on_session_start().await.unwrap().is_none());

        let state = edited();
        lifecycle.on_session_end(&state).await.unwrap();

        let saved = lifecycle.store.saved.lock().unwrap().clone().unwrap();
        assert_eq!(saved.saved_at, lifecycle.clock.0);

        let restored = lifecycle.on_session_start().await.unwrap().unwrap();
        assert_eq!(restored.path, "/orders");
        assert_eq!(restored.method, HttpMethod::Post);
        assert_eq!(restored.request_headers, state.request_headers);
    }

    #[tokio::test]
    async fn test_hard_navigate_clears() {
        let lifecycle = lifecycle();
        lifecycle.on_session_end(&edited()).await.unwrap();
        lifecycle.on_hard_navigate().await.unwrap();
        assert!(lifecycle.on_session_start().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_newer_schema_is_rejected() {
        let lifecycle = lifecycle();
        let mut saved =
            SavedRequestConfiguration::from_snapshot(&RequestConfiguration::new(), lifecycle.clock.0);
        saved.schema_version = CURRENT_SCHEMA_VERSION + 1;
        lifecycle.store.save(&saved).await.unwrap();

        let error = lifecycle.on_session_start().await.unwrap_err();
        assert!(matches!(
            error,
            ApplicationError::Storage(SessionStoreError::UnsupportedVersion(2))
        ));
    }

    #[tokio::test]
    async fn test_ephemeral_lifecycle_is_inert() {
        let lifecycle: Box<dyn SessionLifecycle> = Box::new(EphemeralSessionLifecycle);
        lifecycle.on_session_end(&edited()).await.unwrap();
        assert!(lifecycle.on_session_start().await.unwrap().is_none());
    }
}
