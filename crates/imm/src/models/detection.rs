use super::{shrink_json, CredentialConfig, Figure, Label};
use cloud_bindings_client::OperationRequest;
use cloud_bindings_common::{ParamMap, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectImageLabelsRequest {
    pub project_name: Option<String>,
    #[serde(rename = "SourceURI")]
    pub source_uri: Option<String>,
    pub credential_config: Option<CredentialConfig>,
    /// Minimum confidence, 0 to 1
    pub threshold: Option<f64>,
}

impl DetectImageLabelsRequest {
    pub fn new(project_name: impl Into<String>, source_uri: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            source_uri: Some(source_uri.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<DetectImageLabelsShrinkRequest> {
        Ok(DetectImageLabelsShrinkRequest {
            project_name: self.project_name.clone(),
            source_uri: self.source_uri.clone(),
            credential_config_shrink: shrink_json(
                "CredentialConfig",
                self.credential_config.as_ref(),
            )?,
            threshold: self.threshold,
        })
    }
}

impl OperationRequest for DetectImageLabelsRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "SourceURI"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectImageLabelsShrinkRequest {
    pub project_name: Option<String>,
    #[serde(rename = "SourceURI")]
    pub source_uri: Option<String>,
    #[serde(rename = "CredentialConfig")]
    pub credential_config_shrink: Option<String>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectImageLabelsResponseBody {
    pub request_id: Option<String>,
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectImageFacesRequest {
    pub project_name: Option<String>,
    #[serde(rename = "SourceURI")]
    pub source_uri: Option<String>,
    pub credential_config: Option<CredentialConfig>,
}

impl DetectImageFacesRequest {
    pub fn new(project_name: impl Into<String>, source_uri: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            source_uri: Some(source_uri.into()),
            credential_config: None,
        }
    }

    pub fn shrink(&self) -> Result<DetectImageFacesShrinkRequest> {
        Ok(DetectImageFacesShrinkRequest {
            project_name: self.project_name.clone(),
            source_uri: self.source_uri.clone(),
            credential_config_shrink: shrink_json(
                "CredentialConfig",
                self.credential_config.as_ref(),
            )?,
        })
    }
}

impl OperationRequest for DetectImageFacesRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "SourceURI"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectImageFacesShrinkRequest {
    pub project_name: Option<String>,
    #[serde(rename = "SourceURI")]
    pub source_uri: Option<String>,
    #[serde(rename = "CredentialConfig")]
    pub credential_config_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectImageFacesResponseBody {
    pub request_id: Option<String>,
    pub faces: Vec<Figure>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectMediaMetaRequest {
    pub project_name: Option<String>,
    #[serde(rename = "SourceURI")]
    pub source_uri: Option<String>,
    pub credential_config: Option<CredentialConfig>,
}

impl DetectMediaMetaRequest {
    pub fn new(project_name: impl Into<String>, source_uri: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            source_uri: Some(source_uri.into()),
            credential_config: None,
        }
    }

    pub fn shrink(&self) -> Result<DetectMediaMetaShrinkRequest> {
        Ok(DetectMediaMetaShrinkRequest {
            project_name: self.project_name.clone(),
            source_uri: self.source_uri.clone(),
            credential_config_shrink: shrink_json(
                "CredentialConfig",
                self.credential_config.as_ref(),
            )?,
        })
    }
}

impl OperationRequest for DetectMediaMetaRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "SourceURI"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectMediaMetaShrinkRequest {
    pub project_name: Option<String>,
    #[serde(rename = "SourceURI")]
    pub source_uri: Option<String>,
    #[serde(rename = "CredentialConfig")]
    pub credential_config_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VideoStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AudioStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SubtitleStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectMediaMetaResponseBody {
    pub request_id: Option<String>,
    pub format_name: Option<String>,
    pub format_long_name: Option<String>,
    pub size: Option<i64>,
    pub duration: Option<f64>,
    pub bitrate: Option<i64>,
    pub stream_count: Option<i64>,
    pub start_time: Option<f64>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub language: Option<String>,
    pub video_streams: Vec<VideoStream>,
    pub audio_streams: Vec<AudioStream>,
    pub subtitles: Vec<SubtitleStream>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CredentialChainLink;

    #[test]
    fn test_source_uri_and_credentials() {
        let request = DetectImageLabelsRequest {
            credential_config: Some(CredentialConfig {
                chain: vec![CredentialChainLink {
                    role: Some("acs:ram::123:role/imm".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            threshold: Some(0.5),
            ..DetectImageLabelsRequest::new("p", "oss://b/cat.jpg")
        };

        let params = request.to_params().unwrap();
        assert_eq!(
            params.get("SourceURI").unwrap().to_string(),
            "oss://b/cat.jpg"
        );
        assert_eq!(
            params.get("CredentialConfig").unwrap().to_string(),
            r#"{"Chain":[{"Role":"acs:ram::123:role/imm"}]}"#
        );
        assert_eq!(params.get("Threshold").unwrap().to_string(), "0.5");
    }

    #[test]
    fn test_media_meta_body() {
        let body: DetectMediaMetaResponseBody = serde_json::from_value(serde_json::json!({
            "RequestId": "r",
            "FormatName": "mov,mp4",
            "Duration": 12.5,
            "VideoStreams": [{"CodecName": "h264", "Width": 1920, "Height": 1080}]
        }))
        .unwrap();

        assert_eq!(body.format_name.as_deref(), Some("mov,mp4"));
        assert_eq!(body.video_streams[0].width, Some(1920));
        assert!(body.audio_streams.is_empty());
    }
}
