//! Requestor Infrastructure - Adapters and implementations
//!
//! Concrete implementations of the application ports: the file-backed
//! session store, the settings file, the system clock, file-blob loading,
//! and the tracing setup used by the host.

pub mod adapters;
pub mod files;
pub mod logging;
pub mod persistence;
pub mod serialization;

pub use adapters::SystemClock;
pub use files::load_file_blob;
pub use logging::init_tracing;
pub use persistence::{
    FileSessionStore, SettingsError, SettingsRepository, apply_env_overrides, apply_process_env,
    config_dir,
};
pub use serialization::{
    SerializationError, from_json_bytes, to_json_line, to_json_stable, to_json_stable_bytes,
};
