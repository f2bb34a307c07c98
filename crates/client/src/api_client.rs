//! Generic operation execution

use crate::operation::{ApiResponse, Operation, OperationRequest};
use crate::transport::{RuntimeOptions, Transport};
use cloud_bindings_common::{OperationMetadata, ParamMap, Result};
use tracing::debug;

/// Everything that goes to the transport for one call
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCall {
    pub metadata: OperationMetadata,
    pub params: ParamMap,
}

/// Validate, shrink and flatten a request without sending it
pub fn prepare<O: Operation>(request: &O::Request) -> Result<PreparedCall> {
    request.validate()?;
    let params = request.to_params()?;
    Ok(PreparedCall {
        metadata: O::METADATA,
        params,
    })
}

/// Runs operations over a transport
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute one operation and decode its response
    pub async fn execute<O: Operation>(
        &self,
        request: &O::Request,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<O::ResponseBody>> {
        let call = prepare::<O>(request)?;
        debug!(
            action = call.metadata.action,
            version = call.metadata.version,
            params = call.params.len(),
            "invoking operation"
        );

        let response = self
            .transport
            .invoke(&call.metadata, &call.params, runtime)
            .await?;
        debug!(
            action = call.metadata.action,
            status = response.status_code,
            "operation returned"
        );

        ApiResponse::from_transport(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportResponse;
    use async_trait::async_trait;
    use cloud_bindings_common::BindingError;
    use mockall::mock;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    mock! {
        pub Transport {}

        #[async_trait]
        impl Transport for Transport {
            async fn invoke(
                &self,
                metadata: &OperationMetadata,
                params: &ParamMap,
                runtime: &RuntimeOptions,
            ) -> Result<TransportResponse>;
        }
    }

    #[derive(Serialize, Default)]
    #[serde(rename_all = "PascalCase")]
    struct GetThingRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        thing_id: Option<String>,
    }

    impl OperationRequest for GetThingRequest {
        const REQUIRED: &'static [&'static str] = &["ThingId"];
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(rename_all = "PascalCase", default)]
    struct GetThingBody {
        request_id: Option<String>,
    }

    struct GetThing;

    impl Operation for GetThing {
        const METADATA: OperationMetadata = OperationMetadata::rpc("GetThing", "2020-01-01");
        type Request = GetThingRequest;
        type ResponseBody = GetThingBody;
    }

    #[tokio::test]
    async fn test_execute_passes_metadata_and_params() {
        let mut transport = MockTransport::new();
        transport
            .expect_invoke()
            .withf(|metadata, params, _| {
                metadata.action == "GetThing"
                    && params.get("ThingId").map(ToString::to_string) == Some("t-1".to_string())
            })
            .times(1)
            .returning(|_, _, _| Ok(TransportResponse::ok(json!({"RequestId": "r-1"}))));

        let client = ApiClient::new(transport);
        let request = GetThingRequest {
            thing_id: Some("t-1".to_string()),
        };
        let response = client
            .execute::<GetThing>(&request, &RuntimeOptions::default())
            .await
            .unwrap();
        assert_eq!(response.body.request_id.as_deref(), Some("r-1"));
    }

    #[tokio::test]
    async fn test_validation_failure_skips_transport() {
        let mut transport = MockTransport::new();
        transport.expect_invoke().times(0);

        let client = ApiClient::new(transport);
        let err = client
            .execute::<GetThing>(&GetThingRequest::default(), &RuntimeOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BindingError::MissingRequired { .. }));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut transport = MockTransport::new();
        transport
            .expect_invoke()
            .returning(|_, _, _| Err(BindingError::Transport("connection refused".to_string())));

        let client = ApiClient::new(transport);
        let request = GetThingRequest {
            thing_id: Some("t-1".to_string()),
        };
        let err = client
            .execute::<GetThing>(&request, &RuntimeOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_prepare() {
        let call = prepare::<GetThing>(&GetThingRequest {
            thing_id: Some("t-2".to_string()),
        })
        .unwrap();
        assert_eq!(call.metadata.action, "GetThing");
        assert_eq!(call.params.len(), 1);
    }
}
