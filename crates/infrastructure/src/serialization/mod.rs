//! JSON serialization for saved sessions and settings.
//!
//! Files are written with 2-space indentation and a trailing newline.

mod json;

pub use json::*;
