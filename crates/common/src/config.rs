//! Client configuration
//!
//! Configuration can be built in code or loaded from a YAML (or JSON) file:
//!
//! ```yaml
//! access_key_id: LTAI...
//! access_key_secret: ...
//! region_id: cn-hangzhou
//! endpoint_map:
//!   cn-shanghai-finance-1: imm.cn-shanghai-finance-1.aliyuncs.com
//! ```

use crate::endpoint::{endpoint_rule, EndpointType};
use crate::{BindingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

fn default_protocol() -> String {
    "https".to_string()
}

fn default_read_timeout() -> u64 {
    DEFAULT_READ_TIMEOUT_MS
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

/// Configuration consumed once when a client is constructed
#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub access_key_secret: Option<String>,
    #[serde(default)]
    pub security_token: Option<String>,
    #[serde(default)]
    pub region_id: Option<String>,
    /// Explicit endpoint host; wins over every other resolution rule
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub endpoint_type: Option<EndpointType>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    /// Static region -> endpoint overrides
    #[serde(default)]
    pub endpoint_map: HashMap<String, String>,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default = "default_read_timeout")]
    pub read_timeout_ms: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_key_id: None,
            access_key_secret: None,
            security_token: None,
            region_id: None,
            endpoint: None,
            endpoint_type: None,
            network: None,
            suffix: None,
            endpoint_map: HashMap::new(),
            protocol: default_protocol(),
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            user_agent: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_key_id", &self.access_key_id)
            .field(
                "access_key_secret",
                &self.access_key_secret.as_ref().map(|_| "<redacted>"),
            )
            .field(
                "security_token",
                &self.security_token.as_ref().map(|_| "<redacted>"),
            )
            .field("region_id", &self.region_id)
            .field("endpoint", &self.endpoint)
            .field("endpoint_type", &self.endpoint_type)
            .field("network", &self.network)
            .field("suffix", &self.suffix)
            .field("endpoint_map", &self.endpoint_map)
            .field("protocol", &self.protocol)
            .field("read_timeout_ms", &self.read_timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BindingError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            BindingError::Config(format!("Failed to parse config from {:?}: {}", path, e))
        })
    }

    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.access_key_secret = Some(access_key_secret.into());
        self
    }

    pub fn with_region(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = Some(region_id.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Resolve the endpoint host for `product`.
    ///
    /// `default_type` is the product's own endpoint rule, used when the
    /// configuration does not override it.
    pub fn resolve_endpoint(&self, product: &str, default_type: EndpointType) -> Result<String> {
        if let Some(endpoint) = self.endpoint.as_deref().filter(|e| !e.is_empty()) {
            return Ok(endpoint.to_string());
        }

        if let Some(region) = self.region_id.as_deref() {
            if let Some(endpoint) = self.endpoint_map.get(region) {
                return Ok(endpoint.clone());
            }
        }

        endpoint_rule(
            product,
            self.region_id.as_deref(),
            self.endpoint_type.unwrap_or(default_type),
            self.network.as_deref(),
            self.suffix.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "access_key_id: id\naccess_key_secret: secret\nregion_id: cn-hangzhou\nread_timeout_ms: 3000\nendpoint_map:\n  cn-beijing: imm-vpc.cn-beijing.aliyuncs.com"
        )
        .unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.access_key_id.as_deref(), Some("id"));
        assert_eq!(config.region_id.as_deref(), Some("cn-hangzhou"));
        assert_eq!(config.read_timeout_ms, 3000);
        assert_eq!(config.connect_timeout_ms, DEFAULT_CONNECT_TIMEOUT_MS);
        assert_eq!(config.protocol, "https");
        assert_eq!(config.endpoint_map.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClientConfig::load(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, BindingError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::default().with_credentials("id", "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_endpoint_precedence() {
        let mut config = ClientConfig::default().with_region("cn-beijing");
        assert_eq!(
            config
                .resolve_endpoint("imm", EndpointType::Regional)
                .unwrap(),
            "imm.cn-beijing.aliyuncs.com"
        );

        config
            .endpoint_map
            .insert("cn-beijing".to_string(), "imm.internal.example".to_string());
        assert_eq!(
            config
                .resolve_endpoint("imm", EndpointType::Regional)
                .unwrap(),
            "imm.internal.example"
        );

        let config = config.with_endpoint("localhost:8080");
        assert_eq!(
            config
                .resolve_endpoint("imm", EndpointType::Regional)
                .unwrap(),
            "localhost:8080"
        );
    }
}
