//! Target endpoint description

use std::fmt;

use serde::{Deserialize, Serialize};

/// Host a connection is being opened against
///
/// Passed through unchanged to override strategies so they can pick
/// credentials per endpoint.
///
/// # Examples
///
/// ```
/// use dbauth_credential::HostInfo;
///
/// let host = HostInfo::new("db.internal").with_port(5432).with_host_id("instance-1");
/// assert_eq!(host.to_string(), "db.internal:5432");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostInfo {
    /// Hostname or IP address
    pub host: String,

    /// Port, when it is not the driver default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Identity label for the endpoint (e.g. cluster instance id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
}

impl HostInfo {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            host_id: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = Some(host_id.into());
        self
    }
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{port}", self.host),
            None => f.write_str(&self.host),
        }
    }
}
