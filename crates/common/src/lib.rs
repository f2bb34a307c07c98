//! Common types and utilities for cloud-bindings
//!
//! This crate contains the pieces every operation wrapper shares: the error
//! type, per-operation metadata, the flat wire parameter map, the
//! structured-field flattening rules, client configuration and endpoint
//! resolution, and the declarative API catalog used by the generator.

mod catalog;
mod config;
mod endpoint;
mod flatten;
mod metadata;
mod params;

pub use catalog::{ApiCatalog, CatalogField, CatalogModel, CatalogOperation};
pub use config::{ClientConfig, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS};
pub use endpoint::{endpoint_rule, EndpointType};
pub use flatten::{flatten, flatten_query, ShrinkStyle};
pub use metadata::OperationMetadata;
pub use params::{ParamMap, ParamValue};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building, sending or decoding an API call
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error {status} {code}: {message} (request id: {request_id})")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: String,
    },

    #[error("Failed to deserialize response: {0}")]
    Deserialize(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BindingError {
    /// Shorthand for a missing required field error
    pub fn missing(field: impl Into<String>) -> Self {
        BindingError::MissingRequired {
            field: field.into(),
        }
    }
}

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;

/// Declared type of a request or response field in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    List(Box<FieldType>),
    Map(Box<FieldType>, Box<FieldType>),
    /// A named model struct
    Object(String),
}

impl FieldType {
    /// Structured values must be shrunk into a string before they go on the wire
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            FieldType::List(_) | FieldType::Map(_, _) | FieldType::Object(_)
        )
    }

    /// The model an `object` type points at, looking through lists and maps
    pub fn referenced_model(&self) -> Option<&str> {
        match self {
            FieldType::Object(name) => Some(name.as_str()),
            FieldType::List(inner) => inner.referenced_model(),
            FieldType::Map(key, value) => key.referenced_model().or(value.referenced_model()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_structured() {
        assert!(!FieldType::String.is_structured());
        assert!(!FieldType::Integer.is_structured());
        assert!(FieldType::List(Box::new(FieldType::String)).is_structured());
        assert!(FieldType::Object("Notification".to_string()).is_structured());
    }

    #[test]
    fn test_referenced_model_through_containers() {
        let nested = FieldType::List(Box::new(FieldType::Object("Tag".to_string())));
        assert_eq!(nested.referenced_model(), Some("Tag"));
        assert_eq!(FieldType::Integer.referenced_model(), None);
    }

    #[test]
    fn test_missing_error_message() {
        let err = BindingError::missing("DatasetName");
        assert_eq!(err.to_string(), "Missing required field: DatasetName");
    }
}
