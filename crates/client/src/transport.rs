//! The transport seam

use async_trait::async_trait;
use cloud_bindings_common::{OperationMetadata, ParamMap, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Per-call overrides forwarded to the transport untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub read_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl RuntimeOptions {
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

/// Raw result of one call, before typed deserialization
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl TransportResponse {
    /// A 200 response with no headers
    pub fn ok(body: Value) -> Self {
        Self {
            status_code: 200,
            headers: BTreeMap::new(),
            body,
        }
    }
}

/// Performs the network call for an operation.
///
/// Implementations own endpoint handling, signing, timeouts and error
/// mapping. Callers never retry or reinterpret what comes back.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(
        &self,
        metadata: &OperationMetadata,
        params: &ParamMap,
        runtime: &RuntimeOptions,
    ) -> Result<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn invoke(
        &self,
        metadata: &OperationMetadata,
        params: &ParamMap,
        runtime: &RuntimeOptions,
    ) -> Result<TransportResponse> {
        (**self).invoke(metadata, params, runtime).await
    }
}
