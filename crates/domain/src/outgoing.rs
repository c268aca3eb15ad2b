//! Projection of a configuration into the request the transport sends

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::{BodyVariant, HttpMethod, RequestKind, enabled_pairs};
use crate::route::{add_base_url, resolve_path_params};
use crate::state::RequestConfiguration;

/// Everything the network-submission collaborator needs to send a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingRequest {
    /// The HTTP method
    pub method: HttpMethod,
    /// HTTP or WebSocket
    pub request_kind: RequestKind,
    /// Absolute (or, without a base URL, as-typed) target URL
    pub url: String,
    /// Enabled headers in list order
    pub headers: Vec<(String, String)>,
    /// The body, absent for body-less methods and WebSockets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyVariant>,
}

impl OutgoingRequest {
    /// Builds the outgoing request for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuery`] if the query rows cannot be
    /// URL-encoded.
    pub fn from_configuration(state: &RequestConfiguration) -> DomainResult<Self> {
        let path = resolve_path_params(&state.path, &state.path_params);
        let mut url = match &state.service_base_url {
            Some(base) => add_base_url(base, &path, state.request_kind),
            None => path,
        };

        let query = enabled_pairs(&state.query_params);
        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(&query)
                .map_err(|e| DomainError::InvalidQuery(e.to_string()))?;
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encoded);
        }

        let body = (state.method.can_have_body() && !state.request_kind.is_websocket())
            .then(|| state.body.clone());

        Ok(Self {
            method: state.method,
            request_kind: state.request_kind,
            url,
            headers: enabled_pairs(&state.request_headers),
            body,
        })
    }
}
