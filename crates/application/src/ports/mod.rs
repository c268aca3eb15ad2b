//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod session_store;

pub use clock::Clock;
pub use session_store::{SessionStore, SessionStoreError};
