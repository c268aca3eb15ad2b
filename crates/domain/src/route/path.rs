//! Path pattern parameters

use regex::Regex;
use std::sync::LazyLock;

use crate::request::KeyValueParameter;

/// Matches one `/:name` or `/{name}` segment head.
#[allow(clippy::expect_used)]
pub(super) static PARAM_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?::([A-Za-z0-9_-]+)|\{([A-Za-z0-9_-]+)\})").expect("valid regex")
});

/// Matches a parameter token anywhere in a path, with its optional marker.
#[allow(clippy::expect_used)]
static PARAM_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":([A-Za-z0-9_-]+)\??|\{([A-Za-z0-9_-]+)\}").expect("valid regex")
});

/// Returns the parameter names of a path pattern in left-to-right order.
///
/// `/users/:id/comments/:commentId` yields `["id", "commentId"]`. Patterns
/// without parameters yield an empty list.
#[must_use]
pub fn extract_param_names(pattern: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut position = 0;

    while position <= pattern.len() {
        let Some(captures) = PARAM_SEGMENT.captures_at(pattern, position) else {
            break;
        };
        let Some(whole) = captures.get(0) else {
            break;
        };
        if whole.end() <= position {
            tracing::warn!(pattern, position, "path scan made no progress");
            break;
        }
        position = whole.end();

        if let Some(name) = captures.get(1).or_else(|| captures.get(2)) {
            names.push(name.as_str().to_string());
        }
    }

    names
}

/// Substitutes enabled rows into the parameter tokens of `pattern`.
///
/// Each token whose name matches an enabled row becomes the row's value,
/// or the bare name when the value is blank. Other tokens are left alone.
#[must_use]
pub fn resolve_path_params(pattern: &str, rows: &[KeyValueParameter]) -> String {
    PARAM_TOKEN
        .replace_all(pattern, |captures: &regex::Captures<'_>| {
            let token = captures.get(0).map_or("", |m| m.as_str());
            let Some(name) = captures.get(1).or_else(|| captures.get(2)) else {
                return token.to_string();
            };
            rows.iter()
                .find(|row| row.enabled && row.key == name.as_str())
                .map_or_else(
                    || token.to_string(),
                    |row| {
                        if row.value.is_empty() {
                            row.key.clone()
                        } else {
                            row.value.clone()
                        }
                    },
                )
        })
        .into_owned()
}
