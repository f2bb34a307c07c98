use super::{shrink_json, File, InputFile, Notification};
use cloud_bindings_client::OperationRequest;
use cloud_bindings_common::{ParamMap, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFileMetaRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub file: Option<InputFile>,
    pub notification: Option<Notification>,
    pub user_data: Option<String>,
}

impl IndexFileMetaRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        file: InputFile,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            file: Some(file),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<IndexFileMetaShrinkRequest> {
        Ok(IndexFileMetaShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            file_shrink: shrink_json("File", self.file.as_ref())?,
            notification_shrink: shrink_json("Notification", self.notification.as_ref())?,
            user_data: self.user_data.clone(),
        })
    }
}

impl OperationRequest for IndexFileMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "File"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndexFileMetaShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "File")]
    pub file_shrink: Option<String>,
    #[serde(rename = "Notification")]
    pub notification_shrink: Option<String>,
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IndexFileMetaResponseBody {
    pub request_id: Option<String>,
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchIndexFileMetaRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub files: Option<Vec<InputFile>>,
    pub notification: Option<Notification>,
    pub user_data: Option<String>,
}

impl BatchIndexFileMetaRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        files: Vec<InputFile>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            files: Some(files),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<BatchIndexFileMetaShrinkRequest> {
        Ok(BatchIndexFileMetaShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            files_shrink: shrink_json("Files", self.files.as_ref())?,
            notification_shrink: shrink_json("Notification", self.notification.as_ref())?,
            user_data: self.user_data.clone(),
        })
    }
}

impl OperationRequest for BatchIndexFileMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "Files"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchIndexFileMetaShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "Files")]
    pub files_shrink: Option<String>,
    #[serde(rename = "Notification")]
    pub notification_shrink: Option<String>,
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchIndexFileMetaResponseBody {
    pub request_id: Option<String>,
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFileMetaRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
    pub with_fields: Option<Vec<String>>,
}

impl GetFileMetaRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            uri: Some(uri.into()),
            with_fields: None,
        }
    }

    pub fn shrink(&self) -> Result<GetFileMetaShrinkRequest> {
        Ok(GetFileMetaShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            uri: self.uri.clone(),
            with_fields_shrink: shrink_json("WithFields", self.with_fields.as_ref())?,
        })
    }
}

impl OperationRequest for GetFileMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URI"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFileMetaShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
    #[serde(rename = "WithFields")]
    pub with_fields_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetFileMetaResponseBody {
    pub request_id: Option<String>,
    pub files: Vec<File>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetFileMetaRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URIs")]
    pub uris: Option<Vec<String>>,
    pub with_fields: Option<Vec<String>>,
}

impl BatchGetFileMetaRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        uris: Vec<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            uris: Some(uris),
            with_fields: None,
        }
    }

    pub fn shrink(&self) -> Result<BatchGetFileMetaShrinkRequest> {
        Ok(BatchGetFileMetaShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            uris_shrink: shrink_json("URIs", self.uris.as_ref())?,
            with_fields_shrink: shrink_json("WithFields", self.with_fields.as_ref())?,
        })
    }
}

impl OperationRequest for BatchGetFileMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URIs"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetFileMetaShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URIs")]
    pub uris_shrink: Option<String>,
    #[serde(rename = "WithFields")]
    pub with_fields_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchGetFileMetaResponseBody {
    pub request_id: Option<String>,
    pub files: Vec<File>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateFileMetaRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub file: Option<InputFile>,
}

impl UpdateFileMetaRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        file: InputFile,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            file: Some(file),
        }
    }

    pub fn shrink(&self) -> Result<UpdateFileMetaShrinkRequest> {
        Ok(UpdateFileMetaShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            file_shrink: shrink_json("File", self.file.as_ref())?,
        })
    }
}

impl OperationRequest for UpdateFileMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "File"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateFileMetaShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "File")]
    pub file_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateFileMetaResponseBody {
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateFileMetaRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub files: Option<Vec<InputFile>>,
}

impl BatchUpdateFileMetaRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        files: Vec<InputFile>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            files: Some(files),
        }
    }

    pub fn shrink(&self) -> Result<BatchUpdateFileMetaShrinkRequest> {
        Ok(BatchUpdateFileMetaShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            files_shrink: shrink_json("Files", self.files.as_ref())?,
        })
    }
}

impl OperationRequest for BatchUpdateFileMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "Files"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateFileMetaShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "Files")]
    pub files_shrink: Option<String>,
}

/// Per-file outcome of a batch update
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileUpdateResult {
    #[serde(rename = "URI")]
    pub uri: Option<String>,
    pub success: Option<bool>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUpdateFileMetaResponseBody {
    pub request_id: Option<String>,
    pub files: Vec<FileUpdateResult>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFileMetaRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URI")]
    pub uri: Option<String>,
}

impl DeleteFileMetaRequest {
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

impl OperationRequest for DeleteFileMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URI"];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteFileMetaResponseBody {
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteFileMetaRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URIs")]
    pub uris: Option<Vec<String>>,
}

impl BatchDeleteFileMetaRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        uris: Vec<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            uris: Some(uris),
        }
    }

    pub fn shrink(&self) -> Result<BatchDeleteFileMetaShrinkRequest> {
        Ok(BatchDeleteFileMetaShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            uris_shrink: shrink_json("URIs", self.uris.as_ref())?,
        })
    }
}

impl OperationRequest for BatchDeleteFileMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "URIs"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteFileMetaShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "URIs")]
    pub uris_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeleteFileMetaResponseBody {
    pub request_id: Option<String>,
}
