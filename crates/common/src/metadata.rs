//! Fixed per-operation call metadata

use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the transport needs to know about an operation besides its
/// parameters. One constant value exists per API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationMetadata {
    pub action: &'static str,
    pub version: &'static str,
    pub protocol: &'static str,
    pub pathname: &'static str,
    pub method: &'static str,
    pub auth_type: &'static str,
    pub style: &'static str,
    pub req_body_type: &'static str,
    pub body_type: &'static str,
}

impl OperationMetadata {
    /// Metadata for an RPC-style operation posted as form data
    pub const fn rpc(action: &'static str, version: &'static str) -> Self {
        Self {
            action,
            version,
            protocol: "HTTPS",
            pathname: "/",
            method: "POST",
            auth_type: "AK",
            style: "RPC",
            req_body_type: "formData",
            body_type: "json",
        }
    }

    /// The identifying triple of the call: action, version and HTTP method
    pub fn summary(&self) -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([
            ("action", self.action),
            ("version", self.version),
            ("method", self.method),
        ])
    }
}
