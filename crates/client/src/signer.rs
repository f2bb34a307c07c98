//! RPC signature version 1.0 (HMAC-SHA1)
//!
//! The signed string covers every parameter of the call, system and
//! business alike:
//!
//! 1. Sort all parameters by name
//! 2. Join `encode(name)=encode(value)` pairs with `&`
//! 3. Build `METHOD&%2F&encode(canonical query)`
//! 4. HMAC-SHA1 it with `secret&` and base64 the digest

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use cloud_bindings_common::{BindingError, ClientConfig, OperationMetadata, Result};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;
use std::collections::BTreeMap;
use std::fmt;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay as-is
const RPC_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const SIGNATURE_VERSION: &str = "1.0";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Percent-encode a name or value for the canonical query
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, RPC_ENCODE_SET).to_string()
}

/// Signs RPC calls with an access key pair
#[derive(Clone)]
pub struct RpcSigner {
    access_key_id: String,
    access_key_secret: String,
    security_token: Option<String>,
}

impl fmt::Debug for RpcSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcSigner")
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"<redacted>")
            .field("security_token", &self.security_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RpcSigner {
    pub fn new(
        access_key_id: &str,
        access_key_secret: &str,
        security_token: Option<&str>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            access_key_secret: access_key_secret.to_string(),
            security_token: security_token.map(|s| s.to_string()),
        }
    }

    /// Build a signer from the static credentials in a client config
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let access_key_id = config
            .access_key_id
            .as_deref()
            .ok_or_else(|| BindingError::Config("access_key_id is not set".to_string()))?;
        let access_key_secret = config
            .access_key_secret
            .as_deref()
            .ok_or_else(|| BindingError::Config("access_key_secret is not set".to_string()))?;

        Ok(Self::new(
            access_key_id,
            access_key_secret,
            config.security_token.as_deref(),
        ))
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// System parameters sent alongside every RPC call
    pub fn system_params(
        &self,
        metadata: &OperationMetadata,
        timestamp: &DateTime<Utc>,
        nonce: &str,
    ) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("Action".to_string(), metadata.action.to_string());
        params.insert("Version".to_string(), metadata.version.to_string());
        params.insert("Format".to_string(), "JSON".to_string());
        params.insert(
            "Timestamp".to_string(),
            timestamp.format(TIMESTAMP_FORMAT).to_string(),
        );
        params.insert("SignatureNonce".to_string(), nonce.to_string());
        params.insert("SignatureMethod".to_string(), SIGNATURE_METHOD.to_string());
        params.insert("SignatureVersion".to_string(), SIGNATURE_VERSION.to_string());
        params.insert("AccessKeyId".to_string(), self.access_key_id.clone());
        if let Some(token) = &self.security_token {
            params.insert("SecurityToken".to_string(), token.clone());
        }
        params
    }

    /// The string the HMAC is computed over
    pub fn string_to_sign(method: &str, params: &BTreeMap<String, String>) -> String {
        let canonical = params
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode("/"),
            percent_encode(&canonical)
        )
    }

    /// Sign the full parameter set and return the base64 signature
    pub fn sign(&self, method: &str, params: &BTreeMap<String, String>) -> Result<String> {
        let string_to_sign = Self::string_to_sign(method, params);
        let key = format!("{}&", self.access_key_secret);

        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| BindingError::Config(format!("invalid signing key: {}", e)))?;
        mac.update(string_to_sign.as_bytes());

        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn metadata() -> OperationMetadata {
        OperationMetadata::rpc("GetProject", "2020-09-30")
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("*"), "%2A");
        assert_eq!(percent_encode("/"), "%2F");
        assert_eq!(percent_encode("="), "%3D");
        assert_eq!(percent_encode("中"), "%E4%B8%AD");
    }

    #[test]
    fn test_system_params() {
        let signer = RpcSigner::new("id", "secret", None);
        let params = signer.system_params(&metadata(), &timestamp(), "nonce-1");

        assert_eq!(params["Action"], "GetProject");
        assert_eq!(params["Version"], "2020-09-30");
        assert_eq!(params["Format"], "JSON");
        assert_eq!(params["Timestamp"], "2024-01-02T03:04:05Z");
        assert_eq!(params["SignatureMethod"], "HMAC-SHA1");
        assert_eq!(params["SignatureVersion"], "1.0");
        assert_eq!(params["AccessKeyId"], "id");
        assert!(!params.contains_key("SecurityToken"));

        let with_token = RpcSigner::new("id", "secret", Some("sts"));
        let params = with_token.system_params(&metadata(), &timestamp(), "nonce-1");
        assert_eq!(params["SecurityToken"], "sts");
    }

    #[test]
    fn test_string_to_sign() {
        let mut params = BTreeMap::new();
        params.insert("ProjectName".to_string(), "my project".to_string());
        params.insert("Action".to_string(), "GetProject".to_string());

        assert_eq!(
            RpcSigner::string_to_sign("post", &params),
            "POST&%2F&Action%3DGetProject%26ProjectName%3Dmy%2520project"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = RpcSigner::new("id", "secret", None);
        let mut params = signer.system_params(&metadata(), &timestamp(), "nonce-1");
        params.insert("ProjectName".to_string(), "p".to_string());

        let first = signer.sign("POST", &params).unwrap();
        let second = signer.sign("POST", &params).unwrap();
        assert_eq!(first, second);
        // 20-byte digest in base64
        assert_eq!(first.len(), 28);

        let other = RpcSigner::new("id", "other", None);
        assert_ne!(other.sign("POST", &params).unwrap(), first);
    }

    #[test]
    fn test_from_config_requires_credentials() {
        let config = ClientConfig::default();
        let err = RpcSigner::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("access_key_id"));

        let config = ClientConfig::default().with_credentials("id", "secret");
        let signer = RpcSigner::from_config(&config).unwrap();
        assert_eq!(signer.access_key_id(), "id");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = RpcSigner::new("id", "very-secret", Some("token"));
        let debug = format!("{:?}", signer);
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("\"token\""));
    }
}
