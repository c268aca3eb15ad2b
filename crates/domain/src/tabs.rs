//! Which request/response panel tabs apply to the current request

use serde::{Deserialize, Serialize};

use crate::request::{HttpMethod, RequestKind};

/// A tab in the request panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestTab {
    /// Path and query parameters
    Params,
    /// Request headers
    Headers,
    /// Request body
    Body,
    /// WebSocket message composer
    Messages,
}

/// A tab in the response panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTab {
    /// Response body
    Body,
    /// Response headers
    Headers,
    /// Trace/debug view of the last response
    Debug,
    /// Previous responses
    History,
    /// WebSocket messages received
    Messages,
}

/// Returns the request tabs that apply to `method` and `request_kind`.
#[must_use]
pub fn visible_request_tabs(method: HttpMethod, request_kind: RequestKind) -> Vec<RequestTab> {
    if request_kind.is_websocket() {
        return vec![RequestTab::Params, RequestTab::Headers, RequestTab::Messages];
    }
    if method.can_have_body() {
        vec![RequestTab::Params, RequestTab::Headers, RequestTab::Body]
    } else {
        vec![RequestTab::Params, RequestTab::Headers]
    }
}

/// Returns the response tabs that apply to `request_kind`.
#[must_use]
pub fn visible_response_tabs(request_kind: RequestKind) -> Vec<ResponseTab> {
    let mut tabs = vec![
        ResponseTab::Body,
        ResponseTab::Headers,
        ResponseTab::Debug,
        ResponseTab::History,
    ];
    if request_kind.is_websocket() {
        tabs.push(ResponseTab::Messages);
    }
    tabs
}

/// Keeps `active` if it is still visible, else falls back to the first
/// visible tab.
#[must_use]
pub fn retain_active<T: Copy + PartialEq>(active: T, visible: &[T]) -> T {
    if visible.contains(&active) {
        active
    } else {
        visible.first().copied().unwrap_or(active)
    }
}
