//! ID generation utilities.

use uuid::Uuid;

/// Generates a fresh identifier for an editable row.
///
/// UUID v7 includes timestamp information and is sortable, so rows
/// created later compare greater.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
