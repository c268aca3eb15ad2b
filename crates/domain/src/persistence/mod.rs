//! Persisted session format.

mod saved;

pub use saved::SavedRequestConfiguration;

/// Current schema version of the saved session file.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;
