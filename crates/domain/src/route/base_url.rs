//! Moving paths on and off the service base URL.
//!
//! Every helper here is total: when either side fails to parse as an
//! absolute URL the path comes back unchanged.

use url::Url;

use crate::request::RequestKind;

fn parse_absolute(value: &str) -> Option<Url> {
    Url::parse(value).ok().filter(Url::has_host)
}

/// Returns true if `value` is an absolute URL with a host.
#[must_use]
pub fn has_valid_base_url(value: &str) -> bool {
    parse_absolute(value).is_some()
}

/// Strips the service base URL from `path` when host and port agree.
///
/// `http://localhost:8787/users?page=2` with base `http://localhost:8787`
/// becomes `/users?page=2`. Paths on other hosts are returned as-is.
#[must_use]
pub fn remove_base_url(base_url: &str, path: &str) -> String {
    let (Some(base), Some(full)) = (parse_absolute(base_url), parse_absolute(path)) else {
        return path.to_string();
    };
    if base.host_str() != full.host_str() || base.port() != full.port() {
        return path.to_string();
    }
    match full.query() {
        Some(query) => format!("{}?{query}", full.path()),
        None => full.path().to_string(),
    }
}

/// Prefixes a relative `path` with the service base URL.
///
/// Absolute paths are left alone so a user can type a different host.
/// WebSocket requests get the `ws`/`wss` form of the base.
#[must_use]
pub fn add_base_url(base_url: &str, path: &str, request_kind: RequestKind) -> String {
    if has_valid_base_url(path) {
        return path.to_string();
    }
    let Some(base) = normalized_base(base_url, request_kind) else {
        return path.to_string();
    };
    if path.starts_with(&base) {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Moves `path` onto a new base URL.
///
/// Absolute paths keep their path and query but take the new host. Relative
/// paths are prefixed as in [`add_base_url`].
#[must_use]
pub fn rehost(base_url: &str, path: &str, request_kind: RequestKind) -> String {
    let Some(full) = parse_absolute(path) else {
        return add_base_url(base_url, path, request_kind);
    };
    let Some(base) = normalized_base(base_url, request_kind) else {
        return path.to_string();
    };
    match full.query() {
        Some(query) => format!("{base}{}?{query}", full.path()),
        None => format!("{base}{}", full.path()),
    }
}

fn normalized_base(base_url: &str, request_kind: RequestKind) -> Option<String> {
    let base = parse_absolute(base_url)?;
    let text = base.as_str().trim_end_matches('/');
    if !request_kind.is_websocket() {
        return Some(text.to_string());
    }
    let upgraded = if let Some(rest) = text.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = text.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        text.to_string()
    };
    Some(upgraded)
}
