//! HTTPS transport for RPC-style operations

use crate::signer::RpcSigner;
use crate::transport::{RuntimeOptions, Transport, TransportResponse};
use async_trait::async_trait;
use chrono::Utc;
use cloud_bindings_common::{
    BindingError, ClientConfig, EndpointType, OperationMetadata, ParamMap, Result,
};
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

const DEFAULT_USER_AGENT: &str = concat!("cloud-bindings/", env!("CARGO_PKG_VERSION"));

/// Sends signed calls to one resolved endpoint.
///
/// System parameters and the signature travel in the query string; the
/// operation's own parameters travel as a form body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
    base_url: String,
    signer: RpcSigner,
    read_timeout: Duration,
    connect_timeout: Duration,
}

impl HttpTransport {
    /// Build a transport for `product`, resolving its endpoint from `config`
    pub fn new(config: &ClientConfig, product: &str, default_type: EndpointType) -> Result<Self> {
        let endpoint = config.resolve_endpoint(product, default_type)?;
        let signer = RpcSigner::from_config(config)?;
        let connect_timeout = Duration::from_millis(config.connect_timeout_ms);

        let http_client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .map_err(|e| BindingError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.trim_end_matches('/').to_string()
        } else {
            format!("{}://{}", config.protocol.to_lowercase(), endpoint)
        };
        debug!(product, base_url = %base_url, "resolved endpoint");

        Ok(Self {
            http_client,
            base_url,
            signer,
            read_timeout: Duration::from_millis(config.read_timeout_ms),
            connect_timeout,
        })
    }

    /// Scheme and host every call goes to
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    /// Total time allowed for one call.
    ///
    /// reqwest fixes the connect timeout per client, so a per-call connect
    /// override only widens the overall deadline.
    fn call_timeout(&self, runtime: &RuntimeOptions) -> Duration {
        runtime.read_timeout.unwrap_or(self.read_timeout)
            + runtime.connect_timeout.unwrap_or(self.connect_timeout)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(
        &self,
        metadata: &OperationMetadata,
        params: &ParamMap,
        runtime: &RuntimeOptions,
    ) -> Result<TransportResponse> {
        let nonce = Uuid::new_v4().to_string();
        let mut query = self.signer.system_params(metadata, &Utc::now(), &nonce);
        let form = params.to_wire_pairs();

        let mut signed = query.clone();
        signed.extend(form.iter().cloned());
        let signature = self.signer.sign(metadata.method, &signed)?;
        query.insert("Signature".to_string(), signature);

        let method = Method::from_bytes(metadata.method.as_bytes())
            .map_err(|e| BindingError::Validation(format!("invalid HTTP method: {}", e)))?;
        let url = format!("{}{}", self.base_url, metadata.pathname);

        let response = self
            .http_client
            .request(method, &url)
            .query(&query)
            .form(&form)
            .timeout(self.call_timeout(runtime))
            .send()
            .await
            .map_err(|e| BindingError::Transport(format!("{} failed: {}", metadata.action, e)))?;

        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect::<BTreeMap<_, _>>();

        let text = response
            .text()
            .await
            .map_err(|e| BindingError::Transport(format!("{} failed: {}", metadata.action, e)))?;

        if !(200..300).contains(&status_code) {
            warn!(action = metadata.action, status = status_code, "API call failed");
            return Err(api_error(status_code, &text));
        }

        let body = if text.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(&text).map_err(|e| BindingError::Deserialize(e.to_string()))?
        };

        Ok(TransportResponse {
            status_code,
            headers,
            body,
        })
    }
}

/// Map an error response body to `BindingError::Api`
fn api_error(status: u16, text: &str) -> BindingError {
    let body: Value = serde_json::from_str(text).unwrap_or(Value::Null);
    let field = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let message = match field("Message") {
        m if m.is_empty() => text.trim().to_string(),
        m => m,
    };

    BindingError::Api {
        status,
        code: field("Code"),
        message,
        request_id: field("RequestId"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::default()
            .with_credentials("id", "secret")
            .with_region("cn-hangzhou")
    }

    #[test]
    fn test_endpoint_from_rule() {
        let transport = HttpTransport::new(&config(), "imm", EndpointType::Regional).unwrap();
        assert_eq!(transport.endpoint(), "https://imm.cn-hangzhou.aliyuncs.com");
    }

    #[test]
    fn test_explicit_endpoint_with_scheme() {
        let config = config().with_endpoint("http://127.0.0.1:8080/");
        let transport = HttpTransport::new(&config, "imm", EndpointType::Regional).unwrap();
        assert_eq!(transport.endpoint(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_missing_credentials() {
        let config = ClientConfig::default().with_region("cn-hangzhou");
        let err = HttpTransport::new(&config, "imm", EndpointType::Regional).unwrap_err();
        assert!(matches!(err, BindingError::Config(_)));
    }

    #[test]
    fn test_call_timeout_overrides() {
        let transport = HttpTransport::new(&config(), "imm", EndpointType::Regional).unwrap();
        assert_eq!(
            transport.call_timeout(&RuntimeOptions::default()),
            Duration::from_millis(15_000)
        );

        let runtime = RuntimeOptions::default().with_read_timeout(Duration::from_secs(1));
        assert_eq!(transport.call_timeout(&runtime), Duration::from_millis(6_000));
    }

    #[test]
    fn test_api_error_mapping() {
        let err = api_error(
            404,
            r#"{"Code":"ResourceNotFound","Message":"project not found","RequestId":"r-9"}"#,
        );
        match err {
            BindingError::Api {
                status,
                code,
                message,
                request_id,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, "ResourceNotFound");
                assert_eq!(message, "project not found");
                assert_eq!(request_id, "r-9");
            },
            other => panic!("unexpected error: {other}"),
        }

        let err = api_error(502, "Bad Gateway");
        assert!(err.to_string().contains("Bad Gateway"));
    }
}
