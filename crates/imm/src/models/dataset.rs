use super::{shrink_json, WorkflowParameter};
use cloud_bindings_client::OperationRequest;
use cloud_bindings_common::{ParamMap, Result};
use serde::{Deserialize, Serialize};

/// A dataset inside a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_max_bind_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_max_file_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_max_entity_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_max_relation_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_max_total_file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_file_size: Option<i64>,
    pub workflow_parameters: Vec<WorkflowParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatasetRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub description: Option<String>,
    pub template_id: Option<String>,
    pub dataset_max_bind_count: Option<i64>,
    pub dataset_max_file_count: Option<i64>,
    pub dataset_max_entity_count: Option<i64>,
    pub dataset_max_relation_count: Option<i64>,
    pub dataset_max_total_file_size: Option<i64>,
    pub workflow_parameters: Option<Vec<WorkflowParameter>>,
}

impl CreateDatasetRequest {
    pub fn new(project_name: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<CreateDatasetShrinkRequest> {
        Ok(CreateDatasetShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            description: self.description.clone(),
            template_id: self.template_id.clone(),
            dataset_max_bind_count: self.dataset_max_bind_count,
            dataset_max_file_count: self.dataset_max_file_count,
            dataset_max_entity_count: self.dataset_max_entity_count,
            dataset_max_relation_count: self.dataset_max_relation_count,
            dataset_max_total_file_size: self.dataset_max_total_file_size,
            workflow_parameters_shrink: shrink_json(
                "WorkflowParameters",
                self.workflow_parameters.as_ref(),
            )?,
        })
    }
}

impl OperationRequest for CreateDatasetRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDatasetShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub description: Option<String>,
    pub template_id: Option<String>,
    pub dataset_max_bind_count: Option<i64>,
    pub dataset_max_file_count: Option<i64>,
    pub dataset_max_entity_count: Option<i64>,
    pub dataset_max_relation_count: Option<i64>,
    pub dataset_max_total_file_size: Option<i64>,
    #[serde(rename = "WorkflowParameters")]
    pub workflow_parameters_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDatasetResponseBody {
    pub request_id: Option<String>,
    pub dataset: Option<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDatasetRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub with_statistics: Option<bool>,
}

impl GetDatasetRequest {
    pub fn new(project_name: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            with_statistics: None,
        }
    }
}

impl OperationRequest for GetDatasetRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDatasetResponseBody {
    pub request_id: Option<String>,
    pub dataset: Option<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDatasetRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub description: Option<String>,
    pub template_id: Option<String>,
    pub dataset_max_bind_count: Option<i64>,
    pub dataset_max_file_count: Option<i64>,
    pub dataset_max_entity_count: Option<i64>,
    pub dataset_max_relation_count: Option<i64>,
    pub dataset_max_total_file_size: Option<i64>,
    pub workflow_parameters: Option<Vec<WorkflowParameter>>,
}

impl UpdateDatasetRequest {
    pub fn new(project_name: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<UpdateDatasetShrinkRequest> {
        Ok(UpdateDatasetShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            description: self.description.clone(),
            template_id: self.template_id.clone(),
            dataset_max_bind_count: self.dataset_max_bind_count,
            dataset_max_file_count: self.dataset_max_file_count,
            dataset_max_entity_count: self.dataset_max_entity_count,
            dataset_max_relation_count: self.dataset_max_relation_count,
            dataset_max_total_file_size: self.dataset_max_total_file_size,
            workflow_parameters_shrink: shrink_json(
                "WorkflowParameters",
                self.workflow_parameters.as_ref(),
            )?,
        })
    }
}

impl OperationRequest for UpdateDatasetRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDatasetShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub description: Option<String>,
    pub template_id: Option<String>,
    pub dataset_max_bind_count: Option<i64>,
    pub dataset_max_file_count: Option<i64>,
    pub dataset_max_entity_count: Option<i64>,
    pub dataset_max_relation_count: Option<i64>,
    pub dataset_max_total_file_size: Option<i64>,
    #[serde(rename = "WorkflowParameters")]
    pub workflow_parameters_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateDatasetResponseBody {
    pub request_id: Option<String>,
    pub dataset: Option<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDatasetRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
}

impl DeleteDatasetRequest {
    pub fn new(project_name: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
        }
    }
}

impl OperationRequest for DeleteDatasetRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteDatasetResponseBody {
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDatasetsRequest {
    pub project_name: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    pub prefix: Option<String>,
}

impl ListDatasetsRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            ..Default::default()
        }
    }
}

impl OperationRequest for ListDatasetsRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListDatasetsResponseBody {
    pub request_id: Option<String>,
    pub next_token: Option<String>,
    pub datasets: Vec<Dataset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dataset_shrink() {
        let request = CreateDatasetRequest {
            workflow_parameters: Some(vec![WorkflowParameter::new("Language", "en")]),
            ..CreateDatasetRequest::new("p", "d")
        };

        let shrink = request.shrink().unwrap();
        assert_eq!(
            shrink.workflow_parameters_shrink.as_deref(),
            Some(r#"[{"Name":"Language","Value":"en"}]"#)
        );

        let params = request.to_params().unwrap();
        assert_eq!(params.len(), 3);
        assert!(params.contains("WorkflowParameters"));
        assert!(!params.keys().any(|k| k.starts_with("WorkflowParameters.")));
    }

    #[test]
    fn test_dataset_response() {
        let body: GetDatasetResponseBody = serde_json::from_value(serde_json::json!({
            "RequestId": "r",
            "Dataset": {"DatasetName": "d", "FileCount": 12}
        }))
        .unwrap();
        let dataset = body.dataset.unwrap();
        assert_eq!(dataset.dataset_name.as_deref(), Some("d"));
        assert_eq!(dataset.file_count, Some(12));
        assert!(dataset.workflow_parameters.is_empty());
    }
}
