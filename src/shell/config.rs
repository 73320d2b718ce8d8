// Service configuration read from the environment.
//
// Variables
// - DASHBOARD_BIND_ADDR            socket address to listen on (default 0.0.0.0:8080)
// - DASHBOARD_BACKEND_URL          base URL of the event/quote backend (default http://localhost:8081)
// - DASHBOARD_BACKEND_TIMEOUT_SECS per request timeout in seconds, unset for none

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "DASHBOARD_BIND_ADDR";
pub const BACKEND_URL_VAR: &str = "DASHBOARD_BACKEND_URL";
pub const BACKEND_TIMEOUT_VAR: &str = "DASHBOARD_BACKEND_TIMEOUT_SECS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    BindAddr { var: &'static str, value: String },

    #[error("{var} is not a valid http(s) URL: {value}")]
    BackendUrl { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds: {value}")]
    Timeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub bind_addr: SocketAddr,
    pub backend_url: String,
    pub backend_timeout: Option<Duration>,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_value = read(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value.parse::<SocketAddr>().map_err(|_| ConfigError::BindAddr {
            var: BIND_ADDR_VAR,
            value: bind_value.clone(),
        })?;

        let backend_url = read(BACKEND_URL_VAR).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let url_is_valid = reqwest::Url::parse(&backend_url)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
        if !url_is_valid {
            return Err(ConfigError::BackendUrl {
                var: BACKEND_URL_VAR,
                value: backend_url,
            });
        }

        let backend_timeout = match read(BACKEND_TIMEOUT_VAR) {
            None => None,
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::Timeout {
                        var: BACKEND_TIMEOUT_VAR,
                        value,
                    });
                }
            },
        };

        Ok(Self {
            bind_addr,
            backend_url,
            backend_timeout,
        })
    }
}
