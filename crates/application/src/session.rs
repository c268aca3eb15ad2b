//! The editing session: one snapshot threaded through the reducer.

use requestor_domain::{Action, OutgoingRequest, RequestConfiguration, reduce};

use crate::ApplicationResult;

/// Holds the current snapshot and applies actions to it in order.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: RequestConfiguration,
    dispatched: u64,
}

impl Session {
    /// Starts a session from the given snapshot.
    #[must_use]
    pub const fn new(state: RequestConfiguration) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    /// Applies one action and returns the new snapshot.
    pub fn dispatch(&mut self, action: Action) -> &RequestConfiguration {
        self.state = reduce(&self.state, action);
        self.dispatched += 1;
        &self.state
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &RequestConfiguration {
        &self.state
    }

    /// Number of actions applied so far.
    #[must_use]
    pub const fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Builds the request the transport would send for the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query parameters cannot be encoded.
    pub fn outgoing_request(&self) -> ApplicationResult<OutgoingRequest> {
        Ok(OutgoingRequest::from_configuration(&self.state)?)
    }

    /// Ends the session, handing back the final snapshot.
    #[must_use]
    pub fn into_snapshot(self) -> RequestConfiguration {
        self.state
    }
}
