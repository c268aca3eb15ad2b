//! User intents fed to the reducer

use serde::{Deserialize, Serialize};

use crate::request::{BodyType, BodyVariant, HttpMethod, KeyValueParameter, MethodInput, RequestKind};
use crate::route::Route;
use crate::tabs::{RequestTab, ResponseTab};

/// A new value for one named path parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParamValue {
    /// The parameter name
    pub key: String,
    /// The new value
    pub value: String,
}

impl PathParamValue {
    /// Creates a replacement value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One user intent, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Replace the known routes wholesale.
    SetRoutes {
        /// The new route set
        routes: Vec<Route>,
    },
    /// The user edited the path.
    UpdatePath {
        /// The new path
        path: String,
    },
    /// The user picked a method.
    UpdateMethod {
        /// The new method
        method: HttpMethod,
        /// The new request kind
        #[serde(default)]
        request_kind: RequestKind,
    },
    /// The user picked a route from the route list.
    SelectRoute {
        /// The picked route
        route: Route,
    },
    /// The user edited the path parameter rows.
    SetPathParams {
        /// The edited rows
        params: Vec<KeyValueParameter>,
    },
    /// Overwrite values of named path parameters.
    ReplacePathParamValues {
        /// The replacements
        values: Vec<PathParamValue>,
    },
    /// Blank and disable every path parameter.
    ClearPathParams,
    /// The user edited the query rows.
    SetQueryParams {
        /// The edited rows
        params: Vec<KeyValueParameter>,
    },
    /// The user edited the header rows.
    SetHeaders {
        /// The edited rows
        headers: Vec<KeyValueParameter>,
    },
    /// The user edited the body.
    SetBody {
        /// The new body
        body: BodyVariant,
    },
    /// Empty the body, keeping its variant.
    ClearBody,
    /// The user switched the body representation.
    SetBodyType {
        /// The representation to switch to
        body_type: BodyType,
        /// Multipart flag for form-data
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_multipart: Option<bool>,
    },
    /// The user edited the WebSocket message composer.
    SetWebsocketMessage {
        /// The composer text
        message: String,
    },
    /// Change or clear the service base URL.
    SetServiceBaseUrl {
        /// The new base URL
        #[serde(default)]
        url: Option<String>,
    },
    /// Select a request panel tab.
    SetActiveRequestTab {
        /// The tab
        tab: RequestTab,
    },
    /// Select a response panel tab.
    SetActiveResponseTab {
        /// The tab
        tab: ResponseTab,
    },
    /// Any action this reducer does not know.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Returns the `kind` tag, for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetRoutes { .. } => "set_routes",
            Self::UpdatePath { .. } => "update_path",
            Self::UpdateMethod { .. } => "update_method",
            Self::SelectRoute { .. } => "select_route",
            Self::SetPathParams { .. } => "set_path_params",
            Self::ReplacePathParamValues { .. } => "replace_path_param_values",
            Self::ClearPathParams => "clear_path_params",
            Self::SetQueryParams { .. } => "set_query_params",
            Self::SetHeaders { .. } => "set_headers",
            Self::SetBody { .. } => "set_body",
            Self::ClearBody => "clear_body",
            Self::SetBodyType { .. } => "set_body_type",
            Self::SetWebsocketMessage { .. } => "set_websocket_message",
            Self::SetServiceBaseUrl { .. } => "set_service_base_url",
            Self::SetActiveRequestTab { .. } => "set_active_request_tab",
            Self::SetActiveResponseTab { .. } => "set_active_response_tab",
            Self::Unknown => "unknown",
        }
    }
}

impl From<MethodInput> for Action {
    fn from(input: MethodInput) -> Self {
        Self::UpdateMethod {
            method: input.method,
            request_kind: input.request_kind,
        }
    }
}
