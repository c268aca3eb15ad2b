//! Session persistence use cases.

mod clear_session;
mod restore_session;
mod save_session;

pub use clear_session::ClearSession;
pub use restore_session::RestoreSession;
pub use save_session::SaveSession;
