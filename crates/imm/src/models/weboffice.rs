use super::{shrink_json, CredentialConfig, Notification};
use cloud_bindings_client::OperationRequest;
use cloud_bindings_common::{ParamMap, Result};
use serde::{Deserialize, Serialize};

/// What the document viewer is allowed to do
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebofficePermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<bool>,
}

/// The user shown in the editor session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebofficeUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebofficeWatermark {
    /// 0 for none, 1 for text
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub watermark_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateWebofficeTokenRequest {
    pub project_name: Option<String>,
    #[serde(rename = "SourceURI")]
    pub source_uri: Option<String>,
    pub filename: Option<String>,
    pub permission: Option<WebofficePermission>,
    pub user: Option<WebofficeUser>,
    pub watermark: Option<WebofficeWatermark>,
    pub credential_config: Option<CredentialConfig>,
    pub notification: Option<Notification>,
    pub notify_topic_name: Option<String>,
    pub password: Option<String>,
    pub preview_pages: Option<i64>,
    pub cache_preview: Option<bool>,
    pub external_uploaded: Option<bool>,
    pub hidecmb: Option<bool>,
    pub user_data: Option<String>,
}

impl GenerateWebofficeTokenRequest {
    pub fn new(project_name: impl Into<String>, source_uri: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            source_uri: Some(source_uri.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<GenerateWebofficeTokenShrinkRequest> {
        Ok(GenerateWebofficeTokenShrinkRequest {
            project_name: self.project_name.clone(),
            source_uri: self.source_uri.clone(),
            filename: self.filename.clone(),
            permission_shrink: shrink_json("Permission", self.permission.as_ref())?,
            user_shrink: shrink_json("User", self.user.as_ref())?,
            watermark_shrink: shrink_json("Watermark", self.watermark.as_ref())?,
            credential_config_shrink: shrink_json(
                "CredentialConfig",
                self.credential_config.as_ref(),
            )?,
            notification_shrink: shrink_json("Notification", self.notification.as_ref())?,
            notify_topic_name: self.notify_topic_name.clone(),
            password: self.password.clone(),
            preview_pages: self.preview_pages,
            cache_preview: self.cache_preview,
            external_uploaded: self.external_uploaded,
            hidecmb: self.hidecmb,
            user_data: self.user_data.clone(),
        })
    }
}

impl OperationRequest for GenerateWebofficeTokenRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "SourceURI"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateWebofficeTokenShrinkRequest {
    pub project_name: Option<String>,
    #[serde(rename = "SourceURI")]
    pub source_uri: Option<String>,
    pub filename: Option<String>,
    #[serde(rename = "Permission")]
    pub permission_shrink: Option<String>,
    #[serde(rename = "User")]
    pub user_shrink: Option<String>,
    #[serde(rename = "Watermark")]
    pub watermark_shrink: Option<String>,
    #[serde(rename = "CredentialConfig")]
    pub credential_config_shrink: Option<String>,
    #[serde(rename = "Notification")]
    pub notification_shrink: Option<String>,
    pub notify_topic_name: Option<String>,
    pub password: Option<String>,
    pub preview_pages: Option<i64>,
    pub cache_preview: Option<bool>,
    pub external_uploaded: Option<bool>,
    pub hidecmb: Option<bool>,
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GenerateWebofficeTokenResponseBody {
    pub request_id: Option<String>,
    pub access_token: Option<String>,
    pub access_token_expired_time: Option<String>,
    pub refresh_token: Option<String>,
    pub refresh_token_expired_time: Option<String>,
    #[serde(rename = "WebofficeURL")]
    pub weboffice_url: Option<String>,
}
