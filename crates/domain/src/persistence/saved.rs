//! The subset of a request configuration that outlives a session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CURRENT_SCHEMA_VERSION;
use crate::request::{BodyVariant, HttpMethod, KeyValueParameter, RequestKind, enforce_terminal_draft};
use crate::state::RequestConfiguration;
use crate::tabs::{RequestTab, ResponseTab};

const fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

/// What is written to durable storage when a session ends.
///
/// Routes and the selected route are not saved; they are rediscovered and
/// matched again once the route list arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRequestConfiguration {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// The path as typed
    pub path: String,
    /// The HTTP method
    pub method: HttpMethod,
    /// HTTP or WebSocket
    #[serde(default)]
    pub request_kind: RequestKind,
    /// Path parameter rows
    #[serde(default)]
    pub path_params: Vec<KeyValueParameter>,
    /// Query rows
    #[serde(default)]
    pub query_params: Vec<KeyValueParameter>,
    /// Header rows
    #[serde(default)]
    pub request_headers: Vec<KeyValueParameter>,
    /// The body; files are stored inline as base64
    #[serde(default)]
    pub body: BodyVariant,
    /// Selected request panel tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_request_tab: Option<RequestTab>,
    /// Selected response panel tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_response_tab: Option<ResponseTab>,
    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,
}

impl SavedRequestConfiguration {
    /// Takes the persisted subset of `state`.
    #[must_use]
    pub fn from_snapshot(state: &RequestConfiguration, saved_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            path: state.path.clone(),
            method: state.method,
            request_kind: state.request_kind,
            path_params: state.path_params.clone(),
            query_params: state.query_params.clone(),
            request_headers: state.request_headers.clone(),
            body: state.body.clone(),
            active_request_tab: Some(state.active_request_tab),
            active_response_tab: Some(state.active_response_tab),
            saved_at,
        }
    }
}

impl RequestConfiguration {
    /// Rebuilds an initial snapshot from a saved subset.
    ///
    /// Editable lists are re-enforced and tab visibility is recomputed, so
    /// a hand-edited or older file still yields a consistent state.
    #[must_use]
    pub fn restore(saved: SavedRequestConfiguration) -> Self {
        let initial = Self::default();
        Self {
            path: saved.path,
            method: saved.method,
            request_kind: saved.request_kind,
            path_params: saved.path_params,
            query_params: enforce_terminal_draft(saved.query_params),
            request_headers: enforce_terminal_draft(saved.request_headers),
            body: saved.body.normalized(),
            active_request_tab: saved.active_request_tab.unwrap_or(initial.active_request_tab),
            active_response_tab: saved
                .active_response_tab
                .unwrap_or(initial.active_response_tab),
            ..initial
        }
        .with_refreshed_tabs()
    }
}
