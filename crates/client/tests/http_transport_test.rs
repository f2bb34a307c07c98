//! HTTP transport against a local mock endpoint

use cloud_bindings_client::{
    BindingError, HttpTransport, OperationMetadata, ParamMap, RuntimeOptions, Transport,
};
use cloud_bindings_common::{ClientConfig, EndpointType};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> HttpTransport {
    let config = ClientConfig::default()
        .with_credentials("test-id", "test-secret")
        .with_region("cn-hangzhou")
        .with_endpoint(server.uri());
    HttpTransport::new(&config, "imm", EndpointType::Regional).unwrap()
}

fn get_project() -> OperationMetadata {
    OperationMetadata::rpc("GetProject", "2020-09-30")
}

#[tokio::test]
async fn test_signed_call_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(query_param("Action", "GetProject"))
        .and(query_param("Version", "2020-09-30"))
        .and(query_param("AccessKeyId", "test-id"))
        .and(query_param("SignatureMethod", "HMAC-SHA1"))
        .and(body_string_contains("ProjectName=demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r-1",
            "Project": {"ProjectName": "demo"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let mut params = ParamMap::new();
    params.insert("ProjectName", "demo");

    let response = transport
        .invoke(&get_project(), &params, &RuntimeOptions::default())
        .await
        .unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body["RequestId"], "r-1");
    assert_eq!(response.body["Project"]["ProjectName"], "demo");

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(query.contains("Signature="));
    assert!(query.contains("SignatureNonce="));
    assert!(!query.contains("ProjectName"));
}

#[tokio::test]
async fn test_error_response_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "RequestId": "r-2",
            "Code": "ResourceNotFound",
            "Message": "The specified project does not exist."
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport
        .invoke(&get_project(), &ParamMap::new(), &RuntimeOptions::default())
        .await
        .unwrap_err();

    match err {
        BindingError::Api {
            status,
            code,
            request_id,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "ResourceNotFound");
            assert_eq!(request_id, "r-2");
        },
        other => panic!("expected API error, got {other}"),
    }
}

#[tokio::test]
async fn test_read_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"RequestId": "slow"}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let runtime = RuntimeOptions::default()
        .with_read_timeout(Duration::from_millis(100))
        .with_connect_timeout(Duration::from_millis(100));
    let err = transport
        .invoke(&get_project(), &ParamMap::new(), &runtime)
        .await
        .unwrap_err();
    assert!(matches!(err, BindingError::Transport(_)));
}

#[tokio::test]
async fn test_invalid_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport
        .invoke(&get_project(), &ParamMap::new(), &RuntimeOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BindingError::Deserialize(_)));
}
