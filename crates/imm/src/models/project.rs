use super::{shrink_json, Tag};
use cloud_bindings_client::OperationRequest;
use cloud_bindings_common::{ParamMap, Result};
use serde::{Deserialize, Serialize};

/// A project and its quotas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_max_dataset_count: Option<i64>,
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
    pub project_queries_per_second: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_concurrency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_file_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProjectRequest {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub service_role: Option<String>,
    pub template_id: Option<String>,
    pub project_max_dataset_count: Option<i64>,
    pub dataset_max_bind_count: Option<i64>,
    pub dataset_max_file_count: Option<i64>,
    pub dataset_max_entity_count: Option<i64>,
    pub dataset_max_relation_count: Option<i64>,
    pub dataset_max_total_file_size: Option<i64>,
    pub tag: Option<Vec<Tag>>,
}

impl CreateProjectRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<CreateProjectShrinkRequest> {
        Ok(CreateProjectShrinkRequest {
            project_name: self.project_name.clone(),
            description: self.description.clone(),
            service_role: self.service_role.clone(),
            template_id: self.template_id.clone(),
            project_max_dataset_count: self.project_max_dataset_count,
            dataset_max_bind_count: self.dataset_max_bind_count,
            dataset_max_file_count: self.dataset_max_file_count,
            dataset_max_entity_count: self.dataset_max_entity_count,
            dataset_max_relation_count: self.dataset_max_relation_count,
            dataset_max_total_file_size: self.dataset_max_total_file_size,
            tag_shrink: shrink_json("Tag", self.tag.as_ref())?,
        })
    }
}

impl OperationRequest for CreateProjectRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProjectShrinkRequest {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub service_role: Option<String>,
    pub template_id: Option<String>,
    pub project_max_dataset_count: Option<i64>,
    pub dataset_max_bind_count: Option<i64>,
    pub dataset_max_file_count: Option<i64>,
    pub dataset_max_entity_count: Option<i64>,
    pub dataset_max_relation_count: Option<i64>,
    pub dataset_max_total_file_size: Option<i64>,
    #[serde(rename = "Tag")]
    pub tag_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateProjectResponseBody {
    pub request_id: Option<String>,
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetProjectRequest {
    pub project_name: Option<String>,
    pub with_statistics: Option<bool>,
}

impl GetProjectRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            with_statistics: None,
        }
    }
}

impl OperationRequest for GetProjectRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetProjectResponseBody {
    pub request_id: Option<String>,
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProjectRequest {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub service_role: Option<String>,
    pub template_id: Option<String>,
    pub project_max_dataset_count: Option<i64>,
    pub dataset_max_bind_count: Option<i64>,
    pub dataset_max_file_count: Option<i64>,
    pub dataset_max_entity_count: Option<i64>,
    pub dataset_max_relation_count: Option<i64>,
    pub dataset_max_total_file_size: Option<i64>,
    pub tag: Option<Vec<Tag>>,
}

impl UpdateProjectRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<UpdateProjectShrinkRequest> {
        Ok(UpdateProjectShrinkRequest {
            project_name: self.project_name.clone(),
            description: self.description.clone(),
            service_role: self.service_role.clone(),
            template_id: self.template_id.clone(),
            project_max_dataset_count: self.project_max_dataset_count,
            dataset_max_bind_count: self.dataset_max_bind_count,
            dataset_max_file_count: self.dataset_max_file_count,
            dataset_max_entity_count: self.dataset_max_entity_count,
            dataset_max_relation_count: self.dataset_max_relation_count,
            dataset_max_total_file_size: self.dataset_max_total_file_size,
            tag_shrink: shrink_json("Tag", self.tag.as_ref())?,
        })
    }
}

impl OperationRequest for UpdateProjectRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProjectShrinkRequest {
    pub project_name: Option<String>,
    pub description: Option<String>,
    pub service_role: Option<String>,
    pub template_id: Option<String>,
    pub project_max_dataset_count: Option<i64>,
    pub dataset_max_bind_count: Option<i64>,
    pub dataset_max_file_count: Option<i64>,
    pub dataset_max_entity_count: Option<i64>,
    pub dataset_max_relation_count: Option<i64>,
    pub dataset_max_total_file_size: Option<i64>,
    #[serde(rename = "Tag")]
    pub tag_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateProjectResponseBody {
    pub request_id: Option<String>,
    pub project: Option<Project>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteProjectRequest {
    pub project_name: Option<String>,
}

impl DeleteProjectRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
        }
    }
}

impl OperationRequest for DeleteProjectRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteProjectResponseBody {
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListProjectsRequest {
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    pub prefix: Option<String>,
    pub tag: Option<Vec<Tag>>,
}

impl ListProjectsRequest {
    pub fn shrink(&self) -> Result<ListProjectsShrinkRequest> {
        Ok(ListProjectsShrinkRequest {
            max_results: self.max_results,
            next_token: self.next_token.clone(),
            prefix: self.prefix.clone(),
            tag_shrink: shrink_json("Tag", self.tag.as_ref())?,
        })
    }
}

impl OperationRequest for ListProjectsRequest {
    const REQUIRED: &'static [&'static str] = &[];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListProjectsShrinkRequest {
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    pub prefix: Option<String>,
    #[serde(rename = "Tag")]
    pub tag_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListProjectsResponseBody {
    pub request_id: Option<String>,
    pub next_token: Option<String>,
    pub projects: Vec<Project>,
}
