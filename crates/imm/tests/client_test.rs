//! ImmClient behavior over in-memory transports

use async_trait::async_trait;
use cloud_bindings_client::{
    RecordingTransport, RuntimeOptions, Transport, TransportResponse,
};
use cloud_bindings_common::{BindingError, OperationMetadata, ParamMap, Result};
use cloud_bindings_imm::*;
use mockall::mock;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;

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

fn create_dataset_request() -> CreateDatasetRequest {
    CreateDatasetRequest {
        description: Some("holiday photos".to_string()),
        dataset_max_file_count: Some(100_000),
        workflow_parameters: Some(vec![
            WorkflowParameter::new("Language", "en"),
            WorkflowParameter::new("FaceEnabled", "true"),
        ]),
        ..CreateDatasetRequest::new("media", "photos")
    }
}

#[test]
fn test_sync_and_async_send_identical_params() {
    let async_transport = RecordingTransport::new();
    let async_client = ImmClient::with_transport(async_transport.clone());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime
        .block_on(async_client.create_dataset(&create_dataset_request()))
        .unwrap();

    let sync_transport = RecordingTransport::new();
    let sync_client = ImmClient::with_transport(sync_transport.clone())
        .blocking()
        .unwrap();
    let request = create_dataset_request();
    sync_client.run(|c| c.create_dataset(&request)).unwrap();

    let async_call = async_transport.last_call().unwrap();
    let sync_call = sync_transport.last_call().unwrap();
    assert_eq!(async_call, sync_call);
    assert_eq!(async_call.metadata.action, "CreateDataset");
}

#[tokio::test]
async fn test_unset_fields_absent_and_structured_fields_once() {
    let transport = RecordingTransport::new();
    let client = ImmClient::with_transport(transport.clone());

    client.create_dataset(&create_dataset_request()).await.unwrap();
    let call = transport.last_call().unwrap();

    assert_eq!(
        call.params.keys().collect::<Vec<_>>(),
        vec![
            "DatasetMaxFileCount",
            "DatasetName",
            "Description",
            "ProjectName",
            "WorkflowParameters",
        ]
    );
    assert!(!call.params.contains("TemplateId"));
    assert_eq!(
        call.params
            .keys()
            .filter(|k| k.starts_with("WorkflowParameters"))
            .count(),
        1
    );
    assert_eq!(
        call.params.get("WorkflowParameters").unwrap().to_string(),
        r#"[{"Name":"Language","Value":"en"},{"Name":"FaceEnabled","Value":"true"}]"#
    );
}

#[tokio::test]
async fn test_partially_set_models_shrink_without_nulls() {
    let transport = RecordingTransport::new();
    let client = ImmClient::with_transport(transport.clone());

    let list = ListProjectsRequest {
        tag: Some(vec![Tag {
            tag_key: Some("env".to_string()),
            tag_value: None,
        }]),
        ..Default::default()
    };
    client.list_projects(&list).await.unwrap();
    let tag = transport.last_call().unwrap().params.get("Tag").unwrap().to_string();
    assert_eq!(tag, r#"[{"TagKey":"env"}]"#);

    let query = SimpleQueryRequest {
        aggregations: Some(vec![AggregationRequest {
            field: Some("Size".to_string()),
            operation: None,
        }]),
        ..SimpleQueryRequest::new("media", "photos")
    };
    client.simple_query(&query).await.unwrap();
    let aggregations = transport
        .last_call()
        .unwrap()
        .params
        .get("Aggregations")
        .unwrap()
        .to_string();
    assert_eq!(aggregations, r#"[{"Field":"Size"}]"#);
    assert!(!aggregations.contains("null"));
}

#[tokio::test]
async fn test_create_dataset_metadata_summary() {
    let transport = RecordingTransport::new();
    let client = ImmClient::with_transport(transport.clone());
    client.create_dataset(&create_dataset_request()).await.unwrap();

    let call = transport.last_call().unwrap();
    assert_eq!(
        call.metadata.summary(),
        BTreeMap::from([
            ("action", "CreateDataset"),
            ("version", "2020-09-30"),
            ("method", "POST"),
        ])
    );
}

#[tokio::test]
async fn test_missing_required_field_never_reaches_transport() {
    let transport = RecordingTransport::new();
    let client = ImmClient::with_transport(transport.clone());

    let request = CreateDatasetRequest {
        dataset_name: None,
        ..create_dataset_request()
    };
    let err = client.create_dataset(&request).await.unwrap_err();

    assert!(matches!(
        err,
        BindingError::MissingRequired { ref field } if field == "DatasetName"
    ));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_response_body_is_typed() {
    let transport = RecordingTransport::new();
    transport.respond_with(
        "ListBindings",
        json!({
            "RequestId": "req-1",
            "NextToken": "page-2",
            "Bindings": [
                {"URI": "oss://bucket/a/", "State": "Running", "Phase": "IncrementalScanning"},
                {"URI": "oss://bucket/b/", "State": "Stopped"}
            ]
        }),
    );
    let client = ImmClient::with_transport(transport);

    let response = client
        .list_bindings(&ListBindingsRequest::new("media", "photos"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body.next_token.as_deref(), Some("page-2"));
    assert_eq!(response.body.bindings.len(), 2);
    assert_eq!(response.body.bindings[1].state.as_deref(), Some("Stopped"));
    assert_eq!(response.body.bindings[1].phase, None);
}

#[tokio::test]
async fn test_api_error_propagates_unchanged() {
    let transport = RecordingTransport::new();
    transport.respond_with(
        "DeleteProject",
        json!({
            "HttpStatus": 409,
            "Code": "ResourceInUse",
            "Message": "project still has datasets",
            "RequestId": "req-9"
        }),
    );
    let client = ImmClient::with_transport(transport);

    let err = client
        .delete_project(&DeleteProjectRequest::new("media"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "API error 409 ResourceInUse: project still has datasets (request id: req-9)"
    );
}

#[tokio::test]
async fn test_runtime_options_forwarded() {
    let mut transport = MockTransport::new();
    transport
        .expect_invoke()
        .withf(|metadata, params, runtime| {
            metadata.action == "GetTask"
                && params.len() == 3
                && runtime.read_timeout == Some(Duration::from_secs(3))
        })
        .times(1)
        .returning(|_, _, _| {
            Ok(TransportResponse::ok(json!({
                "RequestId": "r",
                "TaskId": "t-1",
                "Status": "Succeeded"
            })))
        });

    let client = ImmClient::with_transport(transport);
    let runtime = RuntimeOptions::default().with_read_timeout(Duration::from_secs(3));
    let response = client
        .get_task_with_options(
            &GetTaskRequest::new("media", "MediaConvert", "t-1"),
            &runtime,
        )
        .await
        .unwrap();

    assert_eq!(response.body.task.status.as_deref(), Some("Succeeded"));
}

#[tokio::test]
async fn test_every_operation_uses_its_action_name() {
    let transport = RecordingTransport::new();
    let client = ImmClient::with_transport(transport.clone());
    let uris = vec!["oss://b/1.jpg".to_string()];

    client.create_project(&CreateProjectRequest::new("p")).await.unwrap();
    client.get_project(&GetProjectRequest::new("p")).await.unwrap();
    client.update_project(&UpdateProjectRequest::new("p")).await.unwrap();
    client.delete_project(&DeleteProjectRequest::new("p")).await.unwrap();
    client.list_projects(&ListProjectsRequest::default()).await.unwrap();
    client.create_dataset(&CreateDatasetRequest::new("p", "d")).await.unwrap();
    client.get_dataset(&GetDatasetRequest::new("p", "d")).await.unwrap();
    client.update_dataset(&UpdateDatasetRequest::new("p", "d")).await.unwrap();
    client.delete_dataset(&DeleteDatasetRequest::new("p", "d")).await.unwrap();
    client.list_datasets(&ListDatasetsRequest::new("p")).await.unwrap();
    client.create_binding(&CreateBindingRequest::new("p", "d", "oss://b/")).await.unwrap();
    client.get_binding(&GetBindingRequest::new("p", "d", "oss://b/")).await.unwrap();
    client.list_bindings(&ListBindingsRequest::new("p", "d")).await.unwrap();
    client.delete_binding(&DeleteBindingRequest::new("p", "d", "oss://b/")).await.unwrap();
    client.resume_binding(&ResumeBindingRequest::new("p", "d", "oss://b/")).await.unwrap();
    client.stop_binding(&StopBindingRequest::new("p", "d", "oss://b/")).await.unwrap();
    client
        .index_file_meta(&IndexFileMetaRequest::new("p", "d", InputFile::new("oss://b/1.jpg")))
        .await
        .unwrap();
    client
        .batch_index_file_meta(&BatchIndexFileMetaRequest::new(
            "p",
            "d",
            vec![InputFile::new("oss://b/1.jpg")],
        ))
        .await
        .unwrap();
    client.get_file_meta(&GetFileMetaRequest::new("p", "d", "oss://b/1.jpg")).await.unwrap();
    client
        .batch_get_file_meta(&BatchGetFileMetaRequest::new("p", "d", uris.clone()))
        .await
        .unwrap();
    client
        .update_file_meta(&UpdateFileMetaRequest::new("p", "d", InputFile::new("oss://b/1.jpg")))
        .await
        .unwrap();
    client
        .batch_update_file_meta(&BatchUpdateFileMetaRequest::new(
            "p",
            "d",
            vec![InputFile::new("oss://b/1.jpg")],
        ))
        .await
        .unwrap();
    client
        .delete_file_meta(&DeleteFileMetaRequest::new("p", "d", "oss://b/1.jpg"))
        .await
        .unwrap();
    client
        .batch_delete_file_meta(&BatchDeleteFileMetaRequest::new("p", "d", uris))
        .await
        .unwrap();
    client.simple_query(&SimpleQueryRequest::new("p", "d")).await.unwrap();
    client.fuzzy_query(&FuzzyQueryRequest::new("p", "d", "cat")).await.unwrap();
    client.semantic_query(&SemanticQueryRequest::new("p", "d", "cat")).await.unwrap();
    client.get_task(&GetTaskRequest::new("p", "MediaConvert", "t")).await.unwrap();
    client.list_tasks(&ListTasksRequest::new("p")).await.unwrap();
    client
        .create_figure_clustering_task(&CreateFigureClusteringTaskRequest::new("p", "d"))
        .await
        .unwrap();
    client
        .create_media_convert_task(&CreateMediaConvertTaskRequest::new(
            "p",
            vec![MediaConvertSource::new("oss://b/in.mov")],
            vec![MediaConvertTarget::new("oss://b/out.mp4", "mp4")],
        ))
        .await
        .unwrap();
    client
        .detect_image_labels(&DetectImageLabelsRequest::new("p", "oss://b/1.jpg"))
        .await
        .unwrap();
    client
        .detect_image_faces(&DetectImageFacesRequest::new("p", "oss://b/1.jpg"))
        .await
        .unwrap();
    client
        .detect_media_meta(&DetectMediaMetaRequest::new("p", "oss://b/in.mov"))
        .await
        .unwrap();
    client
        .generate_weboffice_token(&GenerateWebofficeTokenRequest::new("p", "oss://b/a.docx"))
        .await
        .unwrap();

    let actions = transport
        .calls()
        .iter()
        .map(|c| c.metadata.action)
        .collect::<Vec<_>>();
    assert_eq!(
        actions,
        vec![
            "CreateProject",
            "GetProject",
            "UpdateProject",
            "DeleteProject",
            "ListProjects",
            "CreateDataset",
            "GetDataset",
            "UpdateDataset",
            "DeleteDataset",
            "ListDatasets",
            "CreateBinding",
            "GetBinding",
            "ListBindings",
            "DeleteBinding",
            "ResumeBinding",
            "StopBinding",
            "IndexFileMeta",
            "BatchIndexFileMeta",
            "GetFileMeta",
            "BatchGetFileMeta",
            "UpdateFileMeta",
            "BatchUpdateFileMeta",
            "DeleteFileMeta",
            "BatchDeleteFileMeta",
            "SimpleQuery",
            "FuzzyQuery",
            "SemanticQuery",
            "GetTask",
            "ListTasks",
            "CreateFigureClusteringTask",
            "CreateMediaConvertTask",
            "DetectImageLabels",
            "DetectImageFaces",
            "DetectMediaMeta",
            "GenerateWebofficeToken",
        ]
    );
    assert!(transport
        .calls()
        .iter()
        .all(|c| c.metadata.version == API_VERSION));
}
