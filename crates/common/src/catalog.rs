//! Declarative API catalog loading
//!
//! A catalog describes a product's operations and their fields in YAML (or
//! JSON). The generator renders operation wrappers from it, so it is the
//! single source a set of bindings is regenerated from.

use crate::endpoint::EndpointType;
use crate::flatten::ShrinkStyle;
use crate::{BindingError, FieldType, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn default_endpoint_type() -> EndpointType {
    EndpointType::Regional
}

/// Root structure of a catalog file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiCatalog {
    /// Product code used for endpoint resolution (e.g., "imm")
    pub product: String,
    /// Human-readable product name
    pub display_name: String,
    /// API version sent with every call (e.g., "2020-09-30")
    pub api_version: String,
    #[serde(default = "default_endpoint_type")]
    pub endpoint_type: EndpointType,
    /// Named structures referenced by `object` fields
    #[serde(default)]
    pub models: Vec<CatalogModel>,
    pub operations: Vec<CatalogOperation>,
}

/// A nested structure shared between operations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogModel {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<CatalogField>,
}

/// One API operation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogOperation {
    /// Action name in PascalCase (e.g., "CreateDataset")
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<CatalogField>,
    /// Response body members
    #[serde(default)]
    pub response: Vec<CatalogField>,
}

/// A request or response member
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogField {
    /// Wire name (e.g., "ProjectName")
    pub name: String,
    #[serde(rename = "type", with = "serde_yaml::with::singleton_map_recursive")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Shrink style for structured fields; JSON when omitted
    #[serde(default)]
    pub style: Option<ShrinkStyle>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ApiCatalog {
    /// Load a catalog from a YAML or JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BindingError::Config(format!("Failed to read catalog file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate a catalog from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let catalog: ApiCatalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject duplicate names, misplaced shrink styles and unknown models
    pub fn validate(&self) -> Result<()> {
        let models: HashSet<&str> = self.models.iter().map(|m| m.name.as_str()).collect();
        if models.len() != self.models.len() {
            return Err(BindingError::Validation(
                "duplicate model name in catalog".to_string(),
            ));
        }
        let check_refs = |owner: &str, fields: &[CatalogField]| -> Result<()> {
            for field in fields {
                if let Some(model) = field.field_type.referenced_model() {
                    if !models.contains(model) {
                        return Err(BindingError::Validation(format!(
                            "field {}.{} references unknown model {}",
                            owner, field.name, model
                        )));
                    }
                }
            }
            Ok(())
        };
        for model in &self.models {
            check_refs(&model.name, &model.fields)?;
        }

        for model in &self.models {
            check_members(&model.name, &model.fields)?;
        }

        let mut seen = HashSet::new();
        for op in &self.operations {
            check_refs(&op.name, &op.fields)?;
            check_refs(&op.name, &op.response)?;
            if !seen.insert(op.name.as_str()) {
                return Err(BindingError::Validation(format!(
                    "duplicate operation {}",
                    op.name
                )));
            }
            check_members(&op.name, &op.fields)?;
            check_members(&op.name, &op.response)?;
        }
        Ok(())
    }

    pub fn find_operation(&self, name: &str) -> Option<&CatalogOperation> {
        self.operations.iter().find(|op| op.name == name)
    }

    pub fn find_model(&self, name: &str) -> Option<&CatalogModel> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// Reject repeated wire names and shrink styles on scalar members
fn check_members(owner: &str, fields: &[CatalogField]) -> Result<()> {
    let mut names = HashSet::new();
    for field in fields {
        if !names.insert(field.name.as_str()) {
            return Err(BindingError::Validation(format!(
                "duplicate field {} in {}",
                field.name, owner
            )));
        }
        if field.style.is_some() && !field.field_type.is_structured() {
            return Err(BindingError::Validation(format!(
                "field {}.{} declares a shrink style but is a scalar",
                owner, field.name
            )));
        }
    }
    Ok(())
}

impl CatalogOperation {
    /// Wire names of the required fields, in declaration order
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Whether this operation needs a shrink request variant
    pub fn has_structured_fields(&self) -> bool {
        self.fields.iter().any(|f| f.field_type.is_structured())
    }
}

impl CatalogField {
    /// The style the field is shrunk with, or `None` for scalars
    pub fn shrink_style(&self) -> Option<ShrinkStyle> {
        if self.field_type.is_structured() {
            Some(self.style.unwrap_or_default())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
product: imm
display_name: Intelligent Media Management
api_version: "2020-09-30"
models:
  - name: WorkflowParameter
    fields:
      - name: Name
        type: string
      - name: Value
        type: string
operations:
  - name: CreateDataset
    fields:
      - name: ProjectName
        type: string
        required: true
      - name: DatasetName
        type: string
        required: true
      - name: WorkflowParameters
        type:
          list:
            object: WorkflowParameter
    response:
      - name: RequestId
        type: string
  - name: DeleteDataset
    fields:
      - name: ProjectName
        type: string
        required: true
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = ApiCatalog::from_yaml(CATALOG).unwrap();
        assert_eq!(catalog.product, "imm");
        assert_eq!(catalog.endpoint_type, EndpointType::Regional);
        assert_eq!(catalog.operations.len(), 2);

        let create = catalog.find_operation("CreateDataset").unwrap();
        assert_eq!(create.required_fields(), vec!["ProjectName", "DatasetName"]);
        assert!(create.has_structured_fields());
        assert_eq!(
            create.fields[2].field_type,
            FieldType::List(Box::new(FieldType::Object("WorkflowParameter".to_string())))
        );
        assert_eq!(create.fields[2].shrink_style(), Some(ShrinkStyle::Json));
        assert_eq!(create.fields[0].shrink_style(), None);

        let delete = catalog.find_operation("DeleteDataset").unwrap();
        assert!(!delete.has_structured_fields());
    }

    #[test]
    fn test_duplicate_operation_rejected() {
        let yaml = r#"
product: imm
display_name: IMM
api_version: "2020-09-30"
operations:
  - name: GetTask
  - name: GetTask
"#;
        let err = ApiCatalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate operation GetTask"));
    }

    #[test]
    fn test_scalar_with_style_rejected() {
        let yaml = r#"
product: imm
display_name: IMM
api_version: "2020-09-30"
operations:
  - name: GetTask
    fields:
      - name: TaskId
        type: string
        style: simple
"#;
        let err = ApiCatalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("GetTask.TaskId"));
    }

    #[test]
    fn test_unknown_model_rejected() {
        let yaml = r#"
product: imm
display_name: IMM
api_version: "2020-09-30"
operations:
  - name: CreateProject
    fields:
      - name: Tag
        type:
          list:
            object: Tag
"#;
        let err = ApiCatalog::from_yaml(yaml).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: field CreateProject.Tag references unknown model Tag"
        );
    }

    #[test]
    fn test_duplicate_model_field_rejected() {
        let yaml = r#"
product: imm
display_name: IMM
api_version: "2020-09-30"
models:
  - name: Tag
    fields:
      - name: TagKey
        type: string
      - name: TagKey
        type: string
"#;
        let err = ApiCatalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate field TagKey in Tag"));
    }

    #[test]
    fn test_duplicate_response_field_rejected() {
        let yaml = r#"
product: imm
display_name: IMM
api_version: "2020-09-30"
operations:
  - name: GetTask
    response:
      - name: RequestId
        type: string
      - name: RequestId
        type: string
"#;
        let err = ApiCatalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate field RequestId in GetTask"));
    }

    #[test]
    fn test_model_scalar_with_style_rejected() {
        let yaml = r#"
product: imm
display_name: IMM
api_version: "2020-09-30"
models:
  - name: Tag
    fields:
      - name: TagKey
        type: string
        style: json
"#;
        let err = ApiCatalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("Tag.TagKey"));
    }

    #[test]
    fn test_nested_field_types_parse() {
        let yaml = r#"
product: imm
display_name: IMM
api_version: "2020-09-30"
models:
  - name: Tag
    fields:
      - name: TagKey
        type: string
operations:
  - name: ListProjects
    fields:
      - name: Tag
        type:
          list:
            object: Tag
      - name: Labels
        type:
          map: [string, integer]
"#;
        let catalog = ApiCatalog::from_yaml(yaml).unwrap();
        let op = catalog.find_operation("ListProjects").unwrap();
        assert_eq!(
            op.fields[0].field_type,
            FieldType::List(Box::new(FieldType::Object("Tag".to_string())))
        );
        assert_eq!(
            op.fields[1].field_type,
            FieldType::Map(Box::new(FieldType::String), Box::new(FieldType::Integer))
        );
    }
}
