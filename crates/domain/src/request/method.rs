//! HTTP method and request kind enumerations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
    /// HTTP HEAD method
    Head,
    /// HTTP OPTIONS method
    Options,
}

impl HttpMethod {
    /// Returns all available HTTP methods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Get,
            Self::Post,
            Self::Put,
            Self::Patch,
            Self::Delete,
            Self::Head,
            Self::Options,
        ]
    }

    /// Returns whether a request with this method may carry a body.
    ///
    /// Only GET and HEAD are body-less.
    #[must_use]
    pub const fn can_have_body(self) -> bool {
        !matches!(self, Self::Get | Self::Head)
    }

    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    /// Converts a route definition's method into an editable method.
    ///
    /// Route discovery may report methods outside the supported set
    /// (`ALL`, `CONNECT`, ...); those fall back to GET.
    #[must_use]
    pub fn from_route_method(method: &str) -> Self {
        method.parse().unwrap_or_default()
    }

    /// Returns true if `other` names this method, ignoring case.
    #[must_use]
    pub fn matches(self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            other => Err(DomainError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Whether the configured request is plain HTTP or a WebSocket connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// A plain HTTP request.
    #[default]
    Http,
    /// A WebSocket connection.
    Websocket,
}

impl RequestKind {
    /// Returns the kind as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Websocket => "websocket",
        }
    }

    /// Returns true for WebSocket requests.
    #[must_use]
    pub const fn is_websocket(self) -> bool {
        matches!(self, Self::Websocket)
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "websocket" | "ws" => Ok(Self::Websocket),
            other => Err(DomainError::UnknownRequestKind(other.to_string())),
        }
    }
}

/// The value picked in the method selector.
///
/// The selector lists the HTTP verbs plus a `WS` pseudo-method; picking
/// `WS` configures a GET upgrade to a WebSocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInput {
    /// The HTTP method to send.
    pub method: HttpMethod,
    /// The request kind implied by the selection.
    pub request_kind: RequestKind,
}

impl FromStr for MethodInput {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        if s.eq_ignore_ascii_case("WS") {
            return Ok(Self {
                method: HttpMethod::Get,
                request_kind: RequestKind::Websocket,
            });
        }
        Ok(Self {
            method: s.parse()?,
            request_kind: RequestKind::Http,
        })
    }
}
