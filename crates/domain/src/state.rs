//! The request configuration snapshot.
//!
//! One `RequestConfiguration` exists per editing session. It is never
//! edited in place by callers: every action goes through
//! [`crate::reducer::reduce`], which returns a fresh snapshot.

use serde::{Deserialize, Serialize};

use crate::request::{BodyVariant, HttpMethod, KeyValueParameter, RequestKind, enforce_terminal_draft};
use crate::route::Route;
use crate::tabs::{
    RequestTab, ResponseTab, retain_active, visible_request_tabs, visible_response_tabs,
};

/// The full editable state of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfiguration {
    /// Routes supplied by route discovery
    pub routes: Vec<Route>,
    /// The route the current path resolves to, or `None` in draft mode
    pub selected_route: Option<Route>,
    /// Base URL of the service under test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_base_url: Option<String>,
    /// The path as typed, possibly absolute
    pub path: String,
    /// The HTTP method
    pub method: HttpMethod,
    /// HTTP or WebSocket
    pub request_kind: RequestKind,
    /// One row per path parameter, in pattern order
    pub path_params: Vec<KeyValueParameter>,
    /// Query string rows
    pub query_params: Vec<KeyValueParameter>,
    /// Header rows
    pub request_headers: Vec<KeyValueParameter>,
    /// The request body
    pub body: BodyVariant,
    /// Text in the WebSocket message composer
    pub websocket_message: String,
    /// Selected request panel tab
    pub active_request_tab: RequestTab,
    /// Request panel tabs that apply
    pub visible_request_tabs: Vec<RequestTab>,
    /// Selected response panel tab
    pub active_response_tab: ResponseTab,
    /// Response panel tabs that apply
    pub visible_response_tabs: Vec<ResponseTab>,
}

impl Default for RequestConfiguration {
    fn default() -> Self {
        let method = HttpMethod::Get;
        let request_kind = RequestKind::Http;
        Self {
            routes: Vec::new(),
            selected_route: None,
            service_base_url: None,
            path: "/".to_string(),
            method,
            request_kind,
            path_params: Vec::new(),
            query_params: enforce_terminal_draft(Vec::new()),
            request_headers: enforce_terminal_draft(Vec::new()),
            body: BodyVariant::default(),
            websocket_message: String::new(),
            active_request_tab: RequestTab::Params,
            visible_request_tabs: visible_request_tabs(method, request_kind),
            active_response_tab: ResponseTab::Body,
            visible_response_tabs: visible_response_tabs(request_kind),
        }
    }
}

impl RequestConfiguration {
    /// Creates the initial snapshot for a session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the initial snapshot with a service base URL.
    #[must_use]
    pub fn with_service_base_url(base_url: impl Into<String>) -> Self {
        Self {
            service_base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    /// Recomputes visible tabs from method and kind, keeping the active
    /// tabs where they are still visible.
    #[must_use]
    pub fn with_refreshed_tabs(mut self) -> Self {
        self.visible_request_tabs = visible_request_tabs(self.method, self.request_kind);
        self.active_request_tab = retain_active(self.active_request_tab, &self.visible_request_tabs);
        self.visible_response_tabs = visible_response_tabs(self.request_kind);
        self.active_response_tab =
            retain_active(self.active_response_tab, &self.visible_response_tabs);
        self
    }

    /// Returns the path with the service base URL stripped, as the route
    /// matcher sees it.
    #[must_use]
    pub fn match_path(&self) -> String {
        match &self.service_base_url {
            Some(base) => crate::route::remove_base_url(base, &self.path),
            None => self.path.clone(),
        }
    }

    /// Returns true when no route is selected.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        self.selected_route.is_none()
    }
}
