use super::{shrink_json, CredentialConfig, Notification, TimeRange};
use cloud_bindings_client::OperationRequest;
use cloud_bindings_common::{ParamMap, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// An asynchronous task and its progress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaskInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    pub tags: HashMap<String, Value>,
    /// The original creation request, when asked for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_request_definition: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTaskRequest {
    pub project_name: Option<String>,
    pub task_type: Option<String>,
    pub task_id: Option<String>,
    pub request_definition: Option<bool>,
}

impl GetTaskRequest {
    pub fn new(
        project_name: impl Into<String>,
        task_type: impl Into<String>,
        task_id: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            task_type: Some(task_type.into()),
            task_id: Some(task_id.into()),
            request_definition: None,
        }
    }
}

impl OperationRequest for GetTaskRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "TaskType", "TaskId"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetTaskResponseBody {
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub task: TaskInfo,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTasksRequest {
    pub project_name: Option<String>,
    pub task_types: Option<Vec<String>>,
    pub status: Option<String>,
    pub start_time_range: Option<TimeRange>,
    pub end_time_range: Option<TimeRange>,
    pub tag_selector: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    pub request_definition: Option<bool>,
}

impl ListTasksRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<ListTasksShrinkRequest> {
        Ok(ListTasksShrinkRequest {
            project_name: self.project_name.clone(),
            task_types_shrink: shrink_json("TaskTypes", self.task_types.as_ref())?,
            status: self.status.clone(),
            start_time_range_shrink: shrink_json(
                "StartTimeRange",
                self.start_time_range.as_ref(),
            )?,
            end_time_range_shrink: shrink_json("EndTimeRange", self.end_time_range.as_ref())?,
            tag_selector: self.tag_selector.clone(),
            sort: self.sort.clone(),
            order: self.order.clone(),
            max_results: self.max_results,
            next_token: self.next_token.clone(),
            request_definition: self.request_definition,
        })
    }
}

impl OperationRequest for ListTasksRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTasksShrinkRequest {
    pub project_name: Option<String>,
    #[serde(rename = "TaskTypes")]
    pub task_types_shrink: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "StartTimeRange")]
    pub start_time_range_shrink: Option<String>,
    #[serde(rename = "EndTimeRange")]
    pub end_time_range_shrink: Option<String>,
    pub tag_selector: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    pub request_definition: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTasksResponseBody {
    pub request_id: Option<String>,
    pub project_name: Option<String>,
    pub next_token: Option<String>,
    pub tasks: Vec<TaskInfo>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFigureClusteringTaskRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub notification: Option<Notification>,
    pub tags: Option<HashMap<String, Value>>,
    pub user_data: Option<String>,
}

impl CreateFigureClusteringTaskRequest {
    pub fn new(project_name: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<CreateFigureClusteringTaskShrinkRequest> {
        Ok(CreateFigureClusteringTaskShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            notification_shrink: shrink_json("Notification", self.notification.as_ref())?,
            tags_shrink: shrink_json("Tags", self.tags.as_ref())?,
            user_data: self.user_data.clone(),
        })
    }
}

impl OperationRequest for CreateFigureClusteringTaskRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFigureClusteringTaskShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "Notification")]
    pub notification_shrink: Option<String>,
    #[serde(rename = "Tags")]
    pub tags_shrink: Option<String>,
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateFigureClusteringTaskResponseBody {
    pub request_id: Option<String>,
    pub task_id: Option<String>,
    pub event_id: Option<String>,
}

/// Subtitle stream muxed into a converted output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MediaConvertSubtitle {
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<f64>,
}

/// One input of a media conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MediaConvertSource {
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtitles: Vec<MediaConvertSubtitle>,
}

impl MediaConvertSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MediaConvertVideo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MediaConvertAudio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i64>,
}

/// One output of a media conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MediaConvertTarget {
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaConvertVideo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<MediaConvertAudio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl MediaConvertTarget {
    pub fn new(uri: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            container: Some(container.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMediaConvertTaskRequest {
    pub project_name: Option<String>,
    pub sources: Option<Vec<MediaConvertSource>>,
    pub targets: Option<Vec<MediaConvertTarget>>,
    pub credential_config: Option<CredentialConfig>,
    pub notification: Option<Notification>,
    pub tags: Option<HashMap<String, Value>>,
    pub user_data: Option<String>,
}

impl CreateMediaConvertTaskRequest {
    pub fn new(
        project_name: impl Into<String>,
        sources: Vec<MediaConvertSource>,
        targets: Vec<MediaConvertTarget>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            sources: Some(sources),
            targets: Some(targets),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<CreateMediaConvertTaskShrinkRequest> {
        Ok(CreateMediaConvertTaskShrinkRequest {
            project_name: self.project_name.clone(),
            sources_shrink: shrink_json("Sources", self.sources.as_ref())?,
            targets_shrink: shrink_json("Targets", self.targets.as_ref())?,
            credential_config_shrink: shrink_json(
                "CredentialConfig",
                self.credential_config.as_ref(),
            )?,
            notification_shrink: shrink_json("Notification", self.notification.as_ref())?,
            tags_shrink: shrink_json("Tags", self.tags.as_ref())?,
            user_data: self.user_data.clone(),
        })
    }
}

impl OperationRequest for CreateMediaConvertTaskRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "Sources", "Targets"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMediaConvertTaskShrinkRequest {
    pub project_name: Option<String>,
    #[serde(rename = "Sources")]
    pub sources_shrink: Option<String>,
    #[serde(rename = "Targets")]
    pub targets_shrink: Option<String>,
    #[serde(rename = "CredentialConfig")]
    pub credential_config_shrink: Option<String>,
    #[serde(rename = "Notification")]
    pub notification_shrink: Option<String>,
    #[serde(rename = "Tags")]
    pub tags_shrink: Option<String>,
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMediaConvertTaskResponseBody {
    pub request_id: Option<String>,
    pub task_id: Option<String>,
    pub event_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_task_body_flattens_task() {
        let body: GetTaskResponseBody = serde_json::from_value(json!({
            "RequestId": "r",
            "TaskId": "t-1",
            "TaskType": "MediaConvert",
            "Status": "Running",
            "Progress": 40
        }))
        .unwrap();

        assert_eq!(body.request_id.as_deref(), Some("r"));
        assert_eq!(body.task.task_id.as_deref(), Some("t-1"));
        assert_eq!(body.task.progress, Some(40));
    }

    #[test]
    fn test_media_convert_params() {
        let request = CreateMediaConvertTaskRequest {
            user_data: Some("batch-7".to_string()),
            ..CreateMediaConvertTaskRequest::new(
                "p",
                vec![MediaConvertSource::new("oss://b/in.mov")],
                vec![MediaConvertTarget::new("oss://b/out.mp4", "mp4")],
            )
        };

        let params = request.to_params().unwrap();
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["ProjectName", "Sources", "Targets", "UserData"]
        );
        assert_eq!(
            params.get("Sources").unwrap().to_string(),
            r#"[{"URI":"oss://b/in.mov"}]"#
        );
        assert_eq!(
            params.get("Targets").unwrap().to_string(),
            r#"[{"Container":"mp4","URI":"oss://b/out.mp4"}]"#
        );
    }

    #[test]
    fn test_list_tasks_time_range() {
        let request = ListTasksRequest {
            start_time_range: Some(TimeRange {
                start: Some("2024-01-01T00:00:00Z".to_string()),
                end: None,
            }),
            ..ListTasksRequest::new("p")
        };
        let params = request.to_params().unwrap();
        assert_eq!(
            params.get("StartTimeRange").unwrap().to_string(),
            r#"{"Start":"2024-01-01T00:00:00Z"}"#
        );
        assert!(!params.contains("EndTimeRange"));
    }
}
