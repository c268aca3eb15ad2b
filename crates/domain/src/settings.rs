//! Requestor settings domain model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{DomainError, DomainResult};
use crate::route::has_valid_base_url;

/// Settings for the Requestor host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestorSettings {
    /// Base URL of the service under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_base_url: Option<String>,

    /// Whether the session is saved on exit and restored on start.
    #[serde(default = "default_persist_session")]
    pub persist_session: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Where the session is saved; defaults to the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

const fn default_persist_session() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RequestorSettings {
    fn default() -> Self {
        Self {
            service_base_url: None,
            persist_session: default_persist_session(),
            log_filter: default_log_filter(),
            session_file: None,
        }
    }
}

impl RequestorSettings {
    /// Checks the settings for values the host cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the base URL is set but is
    /// not an absolute URL.
    pub fn validate(&self) -> DomainResult<()> {
        match &self.service_base_url {
            Some(url) if !has_valid_base_url(url) => Err(DomainError::InvalidUrl(url.clone())),
            _ => Ok(()),
        }
    }
}
