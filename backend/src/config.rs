use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use shared::constants::{DEFAULT_CRM_API_VERSION, DEFAULT_CRM_ENDPOINT};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug)]
pub struct ConfigError {
    key: &'static str,
    reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.key, self.reason)
    }
}

impl std::error::Error for ConfigError {}

/// Credentials and target for the lead CRM.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    pub endpoint: String,
    pub auth_token: Option<String>,
    pub location_id: Option<String>,
    pub api_version: String,
}

impl CrmConfig {
    /// `(auth_token, location_id)` when both are set and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let token = self.auth_token.as_deref().filter(|t| !t.trim().is_empty())?;
        let location = self.location_id.as_deref().filter(|l| !l.trim().is_empty())?;
        Some((token, location))
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    pub prizes_upstream_url: Option<String>,
    pub crm: CrmConfig,
    /// Origin written into the loader scripts, without a trailing slash.
    pub public_base_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let public_base_url = get("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://{}", bind_addr))
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            bind_addr,
            frontend_dist: PathBuf::from(get("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string())),
            prizes_upstream_url: get("PRIZES_UPSTREAM_URL"),
            crm: CrmConfig {
                endpoint: get("CRM_ENDPOINT").unwrap_or_else(|| DEFAULT_CRM_ENDPOINT.to_string()),
                auth_token: get("CRM_AUTH_TOKEN"),
                location_id: get("CRM_LOCATION_ID"),
                api_version: get("CRM_API_VERSION").unwrap_or_else(|| DEFAULT_CRM_API_VERSION.to_string()),
            },
            public_base_url,
        })
    }
}
