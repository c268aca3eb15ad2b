//! Requestor Application - ports, session and lifecycle
//!
//! This crate threads request configuration snapshots through the domain
//! reducer and defines the ports that persistence adapters implement.

pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod session;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use lifecycle::{EphemeralSessionLifecycle, PersistentSessionLifecycle, SessionLifecycle};
pub use session::Session;
