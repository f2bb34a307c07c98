//! In-memory transport that records calls

use crate::transport::{RuntimeOptions, Transport, TransportResponse};
use async_trait::async_trait;
use cloud_bindings_common::{BindingError, OperationMetadata, ParamMap, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// One call as the transport saw it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub metadata: OperationMetadata,
    pub params: ParamMap,
}

/// Records every call and answers with canned bodies.
///
/// Clones share state, so a test can keep a handle while the client owns
/// another. Actions without a canned body get `{"RequestId": "<action>-request"}`.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responses: Arc<Mutex<HashMap<String, Value>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `action` with `body` from now on
    pub fn respond_with(&self, action: &str, body: Value) {
        lock(&self.responses).insert(action.to_string(), body);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        lock(&self.calls).last().cloned()
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn invoke(
        &self,
        metadata: &OperationMetadata,
        params: &ParamMap,
        _runtime: &RuntimeOptions,
    ) -> Result<TransportResponse> {
        lock(&self.calls).push(RecordedCall {
            metadata: *metadata,
            params: params.clone(),
        });

        let body = lock(&self.responses)
            .get(metadata.action)
            .cloned()
            .unwrap_or_else(|| json!({ "RequestId": format!("{}-request", metadata.action) }));

        if let Some(code) = body.get("Code").and_then(Value::as_str) {
            if body.get("HttpStatus").is_some() {
                return Err(BindingError::Api {
                    status: body["HttpStatus"]
                        .as_u64()
                        .and_then(|s| u16::try_from(s).ok())
                        .unwrap_or(400),
                    code: code.to_string(),
                    message: body
                        .get("Message")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    request_id: body
                        .get("RequestId")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                });
            }
        }

        Ok(TransportResponse::ok(body))
    }
}
