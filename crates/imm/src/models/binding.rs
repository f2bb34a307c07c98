use cloud_bindings_client::OperationRequest;
use serde::{Deserialize, Serialize};

/// Binding between a dataset and a storage location it indexes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Binding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBindingRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
}

impl CreateBindingRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            uri: Some(uri.into()),
        }
    }
}

impl OperationRequest for CreateBindingRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URI"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateBindingResponseBody {
    pub request_id: Option<String>,
    pub binding: Option<Binding>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBindingRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
}

impl GetBindingRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            uri: Some(uri.into()),
        }
    }
}

impl OperationRequest for GetBindingRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URI"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetBindingResponseBody {
    pub request_id: Option<String>,
    pub binding: Option<Binding>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBindingsRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
}

impl ListBindingsRequest {
    pub fn new(project_name: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            ..Default::default()
        }
    }
}

impl OperationRequest for ListBindingsRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListBindingsResponseBody {
    pub request_id: Option<String>,
    pub next_token: Option<String>,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBindingRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
    /// Also remove the metadata the binding indexed
    pub cleanup: Option<bool>,
}

impl DeleteBindingRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            uri: Some(uri.into()),
            cleanup: None,
        }
    }
}

impl OperationRequest for DeleteBindingRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URI"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteBindingResponseBody {
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResumeBindingRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
}

impl ResumeBindingRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            uri: Some(uri.into()),
        }
    }
}

impl OperationRequest for ResumeBindingRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URI"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResumeBindingResponseBody {
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopBindingRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
    pub reason: Option<String>,
}

impl StopBindingRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            uri: Some(uri.into()),
            reason: None,
        }
    }
}

impl OperationRequest for StopBindingRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URI"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StopBindingResponseBody {
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_wire_name() {
        let params = CreateBindingRequest::new("p", "d", "oss://bucket/")
            .to_params()
            .unwrap();
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["DatasetName", "ProjectName", "URI"]
        );
    }

    #[test]
    fn test_missing_uri() {
        let request = StopBindingRequest {
            uri: None,
            ..StopBindingRequest::new("p", "d", "oss://bucket/")
        };
        assert_eq!(
            request.validate().unwrap_err().to_string(),
            "Missing required field: URI"
        );
    }
}
