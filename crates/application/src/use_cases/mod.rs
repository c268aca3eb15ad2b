//! Application use cases (business logic orchestration).

pub mod session;

pub use session::{ClearSession, RestoreSession, SaveSession};
