//! Template context built from the catalog
//!
//! Names and types are resolved here once so the templates stay free of
//! naming rules.

use crate::naming::{rust_ident, rust_type, snake_case, uses_map};
use cloud_bindings_common::{
    ApiCatalog, CatalogField, CatalogModel, CatalogOperation, FieldType, ShrinkStyle,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub wire_name: String,
    pub ident: String,
    /// Name of the shrink struct member
    pub shrink_ident: String,
    pub rust_type: String,
    /// Type of the member on a response body
    pub body_type: String,
    /// Type of the constructor argument for required fields
    pub param_type: String,
    pub into: bool,
    pub required: bool,
    pub structured: bool,
    /// `ShrinkStyle` variant name
    pub style: &'static str,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelView {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationView {
    pub name: String,
    pub description: Option<String>,
    pub required: Vec<String>,
    pub fields: Vec<FieldView>,
    pub required_fields: Vec<FieldView>,
    pub response: Vec<FieldView>,
    pub structured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub product: String,
    pub display_name: String,
    pub api_version: String,
    pub crate_name: String,
    pub client_name: String,
    pub endpoint_type: &'static str,
    pub models: Vec<ModelView>,
    pub operations: Vec<OperationView>,
    pub has_structured: bool,
    pub uses_map: bool,
}

fn style_variant(style: ShrinkStyle) -> &'static str {
    match style {
        ShrinkStyle::Json => "Json",
        ShrinkStyle::Simple => "Simple",
        ShrinkStyle::SpaceDelimited => "SpaceDelimited",
        ShrinkStyle::PipeDelimited => "PipeDelimited",
        ShrinkStyle::RepeatList => "RepeatList",
    }
}

fn field_view(field: &CatalogField) -> FieldView {
    let ident = rust_ident(&field.name);
    let rust_type = rust_type(&field.field_type);
    let body_type = match field.field_type {
        FieldType::List(_) | FieldType::Map(_, _) => rust_type.clone(),
        _ => format!("Option<{}>", rust_type),
    };
    let into = field.field_type == FieldType::String;
    let param_type = if into {
        "impl Into<String>".to_string()
    } else {
        rust_type.clone()
    };

    FieldView {
        wire_name: field.name.clone(),
        shrink_ident: format!("{}_shrink", snake_case(&field.name)),
        ident,
        rust_type,
        body_type,
        param_type,
        into,
        required: field.required,
        structured: field.field_type.is_structured(),
        style: style_variant(field.shrink_style().unwrap_or_default()),
        description: field.description.clone(),
    }
}

fn model_view(model: &CatalogModel) -> ModelView {
    ModelView {
        name: model.name.clone(),
        description: model.description.clone(),
        fields: model.fields.iter().map(field_view).collect(),
    }
}

fn operation_view(op: &CatalogOperation) -> OperationView {
    let fields: Vec<FieldView> = op.fields.iter().map(field_view).collect();
    OperationView {
        name: op.name.clone(),
        description: op.description.clone(),
        required: op.required_fields().into_iter().map(String::from).collect(),
        required_fields: fields.iter().filter(|f| f.required).cloned().collect(),
        fields,
        response: op.response.iter().map(field_view).collect(),
        structured: op.has_structured_fields(),
    }
}

/// Capitalized product code, e.g. `imm` -> `Imm`
pub fn type_prefix(product: &str) -> String {
    product
        .split(['-', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

impl CatalogView {
    pub fn new(catalog: &ApiCatalog) -> Self {
        let all_fields = || {
            catalog
                .models
                .iter()
                .flat_map(|m| m.fields.iter())
                .chain(catalog.operations.iter().flat_map(|op| {
                    op.fields.iter().chain(op.response.iter())
                }))
        };

        Self {
            product: catalog.product.clone(),
            display_name: catalog.display_name.clone(),
            api_version: catalog.api_version.clone(),
            crate_name: format!("cloud-bindings-{}", catalog.product),
            client_name: format!("{}Client", type_prefix(&catalog.product)),
            endpoint_type: match catalog.endpoint_type {
                cloud_bindings_common::EndpointType::Regional => "Regional",
                cloud_bindings_common::EndpointType::Central => "Central",
            },
            models: catalog.models.iter().map(model_view).collect(),
            operations: catalog.operations.iter().map(operation_view).collect(),
            has_structured: catalog.operations.iter().any(|op| op.has_structured_fields()),
            uses_map: all_fields().any(|f| uses_map(&f.field_type)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_prefix() {
        assert_eq!(type_prefix("imm"), "Imm");
        assert_eq!(type_prefix("video-enhance"), "VideoEnhance");
    }

    #[test]
    fn test_field_view_for_structured_list() {
        let field = CatalogField {
            name: "URIs".to_string(),
            field_type: FieldType::List(Box::new(FieldType::String)),
            required: true,
            style: Some(ShrinkStyle::Simple),
            description: None,
        };
        let view = field_view(&field);

        assert_eq!(view.ident, "uris");
        assert_eq!(view.shrink_ident, "uris_shrink");
        assert_eq!(view.rust_type, "Vec<String>");
        assert_eq!(view.body_type, "Vec<String>");
        assert_eq!(view.param_type, "Vec<String>");
        assert!(view.structured);
        assert_eq!(view.style, "Simple");
    }

    #[test]
    fn test_keyword_field_keeps_plain_shrink_name() {
        let field = CatalogField {
            name: "Type".to_string(),
            field_type: FieldType::Object("TypeSpec".to_string()),
            required: false,
            style: None,
            description: None,
        };
        let view = field_view(&field);
        assert_eq!(view.ident, "r#type");
        assert_eq!(view.shrink_ident, "type_shrink");
        assert_eq!(view.body_type, "Option<TypeSpec>");
        assert_eq!(view.style, "Json");
    }
}
