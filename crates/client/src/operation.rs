//! Operation and request traits

use crate::transport::TransportResponse;
use cloud_bindings_common::{BindingError, OperationMetadata, ParamMap, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A request object for one operation.
///
/// The serialized form uses wire names, so required-field validation and
/// the parameter map both come from the same `Serialize` impl.
pub trait OperationRequest: Serialize {
    /// Wire names that must be set
    const REQUIRED: &'static [&'static str];

    /// Fail with the first required field that is unset
    fn validate(&self) -> Result<()> {
        let value = serde_json::to_value(self)?;
        for field in Self::REQUIRED {
            match value.get(*field) {
                None | Some(Value::Null) => return Err(BindingError::missing(*field)),
                Some(_) => {},
            }
        }
        Ok(())
    }

    /// Flat wire parameters for this request.
    ///
    /// Requests carrying structured fields override this to go through
    /// their shrink variant first.
    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(self)
    }
}

/// Binds a request type, a response body type and fixed call metadata
pub trait Operation {
    const METADATA: OperationMetadata;
    type Request: OperationRequest + Sync;
    type ResponseBody: DeserializeOwned;
}

/// Typed response: transport headers and status plus the decoded body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<B> {
    pub headers: BTreeMap<String, String>,
    pub status_code: u16,
    pub body: B,
}

impl<B: DeserializeOwned> ApiResponse<B> {
    pub fn from_transport(response: TransportResponse) -> Result<Self> {
        let body = serde_json::from_value(response.body)
            .map_err(|e| BindingError::Deserialize(e.to_string()))?;

        Ok(Self {
            headers: response.headers,
            status_code: response.status_code,
            body,
        })
    }
}
