//! Route definitions and matching.
//!
//! Routes are supplied by an external discovery collaborator and are
//! treated as immutable here. This module knows how to read parameter names
//! out of a path pattern, how to match an edited path back to a route, and
//! how to move a path on and off the service base URL.

mod base_url;
mod matcher;
mod path;

pub use base_url::{add_base_url, has_valid_base_url, rehost, remove_base_url};
pub use matcher::{RouteMatch, RoutePattern, match_route};
pub use path::{extract_param_names, resolve_path_params};

use serde::{Deserialize, Serialize};

use crate::request::{HttpMethod, RequestKind};

/// Route method reported for handlers that accept every method.
pub const ANY_METHOD: &str = "ALL";

/// Whether a discovered handler is an endpoint or a middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HandlerType {
    /// An endpoint handler
    #[default]
    Route,
    /// A middleware; never selected by the matcher
    Middleware,
}

/// A declared (method, path pattern, request kind) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// The path pattern, possibly containing `:name` segments
    pub path: String,
    /// The method as reported by route discovery
    pub method: String,
    /// HTTP or WebSocket
    #[serde(default)]
    pub request_kind: RequestKind,
    /// True for routes drafted by the user rather than discovered
    #[serde(default)]
    pub is_draft: bool,
    /// False for routes that were seen once but are no longer registered
    #[serde(default = "default_registered")]
    pub currently_registered: bool,
    /// Endpoint or middleware
    #[serde(default)]
    pub handler_type: HandlerType,
    /// Opaque reference to an OpenAPI operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_ref: Option<String>,
}

const fn default_registered() -> bool {
    true
}

impl Route {
    /// Creates a registered, non-draft HTTP route.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            request_kind: RequestKind::Http,
            is_draft: false,
            currently_registered: true,
            handler_type: HandlerType::Route,
            schema_ref: None,
        }
    }

    /// Sets the request kind.
    #[must_use]
    pub const fn with_kind(mut self, request_kind: RequestKind) -> Self {
        self.request_kind = request_kind;
        self
    }

    /// Marks the route as a user draft.
    #[must_use]
    pub const fn as_draft(mut self) -> Self {
        self.is_draft = true;
        self
    }

    /// Marks the route as no longer registered.
    #[must_use]
    pub const fn unregistered(mut self) -> Self {
        self.currently_registered = false;
        self
    }

    /// Sets the handler type.
    #[must_use]
    pub const fn with_handler_type(mut self, handler_type: HandlerType) -> Self {
        self.handler_type = handler_type;
        self
    }

    /// The editable method for this route, falling back to GET.
    #[must_use]
    pub fn input_method(&self) -> HttpMethod {
        HttpMethod::from_route_method(&self.method)
    }

    /// Returns true if the route was declared for every method (`ALL`).
    #[must_use]
    pub fn accepts_any_method(&self) -> bool {
        self.method.eq_ignore_ascii_case(ANY_METHOD)
    }

    /// Returns true if the route accepts the given method and kind.
    #[must_use]
    pub fn accepts(&self, method: HttpMethod, request_kind: RequestKind) -> bool {
        self.handler_type == HandlerType::Route
            && self.request_kind == request_kind
            && (self.accepts_any_method() || method.matches(&self.method))
    }
}
