//! Editable key/value rows and the terminal draft invariant

use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// A row in an editable key/value list (query params, headers, path params).
///
/// Rows can be disabled without deletion. A disabled row with a blank key
/// and value is a *draft*: the empty row every list keeps at its end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueParameter {
    /// Stable row identity
    #[serde(default = "generate_id")]
    pub id: String,
    /// The parameter key
    #[serde(default)]
    pub key: String,
    /// The parameter value
    #[serde(default)]
    pub value: String,
    /// Whether this parameter is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl KeyValueParameter {
    /// Creates a new enabled parameter with a fresh id.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a fresh draft row.
    #[must_use]
    pub fn draft() -> Self {
        Self {
            id: generate_id(),
            key: String::new(),
            value: String::new(),
            enabled: false,
        }
    }

    /// Creates the default row for a freshly discovered path parameter.
    ///
    /// The parameter name doubles as the row id.
    #[must_use]
    pub fn path_param(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            key: name,
            value: String::new(),
            enabled: false,
        }
    }

    /// Creates a path parameter row carrying a matched value.
    #[must_use]
    pub fn matched_path_param(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut row = Self::path_param(name);
        row.enabled = !value.is_empty();
        row.value = value;
        row
    }

    /// Returns true if this row is disabled with a blank key and value.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        !self.enabled && self.key.is_empty() && self.value.is_empty()
    }
}

/// A row type that takes part in the terminal draft invariant.
pub trait DraftRow: Sized {
    /// Creates a fresh draft row with a new identity.
    fn draft() -> Self;

    /// Returns true when both key and value are blank.
    fn is_blank(&self) -> bool;

    /// Returns true if the row is enabled.
    fn is_enabled(&self) -> bool;

    /// Marks the row as disabled.
    fn disable(&mut self);

    /// Returns true if the row is a draft.
    fn is_draft_row(&self) -> bool {
        !self.is_enabled() && self.is_blank()
    }
}

impl DraftRow for KeyValueParameter {
    fn draft() -> Self {
        Self::draft()
    }

    fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn disable(&mut self) {
        self.enabled = false;
    }
}

/// Disables blank rows and makes sure the list ends with a draft row.
///
/// Applying this twice yields the same list as applying it once.
#[must_use]
pub fn enforce_terminal_draft<T: DraftRow>(rows: Vec<T>) -> Vec<T> {
    let mut rows: Vec<T> = rows
        .into_iter()
        .map(|mut row| {
            if row.is_blank() {
                row.disable();
            }
            row
        })
        .collect();

    if !rows.last().is_some_and(T::is_draft_row) {
        rows.push(T::draft());
    }
    rows
}

/// Counts the rows that are not drafts.
#[must_use]
pub fn count_parameters<T: DraftRow>(rows: &[T]) -> usize {
    rows.iter().filter(|row| !row.is_draft_row()).count()
}

/// Returns the key/value pairs of enabled, non-draft rows in list order.
#[must_use]
pub fn enabled_pairs(rows: &[KeyValueParameter]) -> Vec<(String, String)> {
    rows.iter()
        .filter(|row| row.enabled && !row.is_draft())
        .map(|row| (row.key.clone(), row.value.clone()))
        .collect()
}

/// Finds a row by key, ignoring ASCII case.
#[must_use]
pub fn find_by_key_ignore_case<'a>(
    rows: &'a [KeyValueParameter],
    key: &str,
) -> Option<&'a KeyValueParameter> {
    rows.iter().find(|row| row.key.eq_ignore_ascii_case(key))
}
