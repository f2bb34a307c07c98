use super::{shrink_json, File};
use cloud_bindings_client::OperationRequest;
use cloud_bindings_common::{ParamMap, Result};
use serde::{Deserialize, Serialize};

/// A field condition, or a boolean combination of sub-conditions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// `eq`, `gt`, `prefix`, `match`, `and`, `or`, `not`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_queries: Vec<QueryCondition>,
}

impl QueryCondition {
    pub fn field(
        field: impl Into<String>,
        operation: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: Some(field.into()),
            value: Some(value.into()),
            operation: Some(operation.into()),
            sub_queries: Vec::new(),
        }
    }

    pub fn and(sub_queries: Vec<QueryCondition>) -> Self {
        Self {
            operation: Some("and".to_string()),
            sub_queries,
            ..Default::default()
        }
    }

    pub fn or(sub_queries: Vec<QueryCondition>) -> Self {
        Self {
            operation: Some("or".to_string()),
            sub_queries,
            ..Default::default()
        }
    }
}

/// Aggregation requested alongside a query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AggregationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// `sum`, `count`, `average`, `max`, `min`, `distinct` or `group`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AggregationGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// Aggregation result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Aggregation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub groups: Vec<AggregationGroup>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleQueryRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub query: Option<QueryCondition>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    pub with_fields: Option<Vec<String>>,
    pub aggregations: Option<Vec<AggregationRequest>>,
    pub without_total_hits: Option<bool>,
}

impl SimpleQueryRequest {
    pub fn new(project_name: impl Into<String>, dataset_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<SimpleQueryShrinkRequest> {
        Ok(SimpleQueryShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            query_shrink: shrink_json("Query", self.query.as_ref())?,
            sort: self.sort.clone(),
            order: self.order.clone(),
            max_results: self.max_results,
            next_token: self.next_token.clone(),
            with_fields_shrink: shrink_json("WithFields", self.with_fields.as_ref())?,
            aggregations_shrink: shrink_json("Aggregations", self.aggregations.as_ref())?,
            without_total_hits: self.without_total_hits,
        })
    }
}

impl OperationRequest for SimpleQueryRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleQueryShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    #[serde(rename = "Query")]
    pub query_shrink: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    #[serde(rename = "WithFields")]
    pub with_fields_shrink: Option<String>,
    #[serde(rename = "Aggregations")]
    pub aggregations_shrink: Option<String>,
    pub without_total_hits: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SimpleQueryResponseBody {
    pub request_id: Option<String>,
    pub next_token: Option<String>,
    pub total_hits: Option<i64>,
    pub files: Vec<File>,
    pub aggregations: Vec<Aggregation>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FuzzyQueryRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    /// Free text matched against every indexed field
    pub query: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    pub with_fields: Option<Vec<String>>,
}

impl FuzzyQueryRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<FuzzyQueryShrinkRequest> {
        Ok(FuzzyQueryShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            query: self.query.clone(),
            max_results: self.max_results,
            next_token: self.next_token.clone(),
            with_fields_shrink: shrink_json("WithFields", self.with_fields.as_ref())?,
        })
    }
}

impl OperationRequest for FuzzyQueryRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "Query"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FuzzyQueryShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub query: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    #[serde(rename = "WithFields")]
    pub with_fields_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FuzzyQueryResponseBody {
    pub request_id: Option<String>,
    pub next_token: Option<String>,
    pub total_hits: Option<i64>,
    pub files: Vec<File>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SemanticQueryRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    /// Natural-language description of the wanted content
    pub query: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    pub media_types: Option<Vec<String>>,
    pub with_fields: Option<Vec<String>>,
}

impl SemanticQueryRequest {
    pub fn new(
        project_name: impl Into<String>,
        dataset_name: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            project_name: Some(project_name.into()),
            dataset_name: Some(dataset_name.into()),
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn shrink(&self) -> Result<SemanticQueryShrinkRequest> {
        Ok(SemanticQueryShrinkRequest {
            project_name: self.project_name.clone(),
            dataset_name: self.dataset_name.clone(),
            query: self.query.clone(),
            max_results: self.max_results,
            next_token: self.next_token.clone(),
            media_types_shrink: shrink_json("MediaTypes", self.media_types.as_ref())?,
            with_fields_shrink: shrink_json("WithFields", self.with_fields.as_ref())?,
        })
    }
}

impl OperationRequest for SemanticQueryRequest {
    const REQUIRED: &'static [&'static str] = &["ProjectName", "DatasetName", "Query"];

    fn to_params(&self) -> Result<ParamMap> {
        ParamMap::from_serialize(&self.shrink()?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SemanticQueryShrinkRequest {
    pub project_name: Option<String>,
    pub dataset_name: Option<String>,
    pub query: Option<String>,
    pub max_results: Option<i64>,
    pub next_token: Option<String>,
    #[serde(rename = "MediaTypes")]
    pub media_types_shrink: Option<String>,
    #[serde(rename = "WithFields")]
    pub with_fields_shrink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SemanticQueryResponseBody {
    pub request_id: Option<String>,
    pub next_token: Option<String>,
    pub files: Vec<File>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_query_shrinks_nested_condition() {
        let request = SimpleQueryRequest {
            query: Some(QueryCondition::and(vec![
                QueryCondition::field("MediaType", "eq", "image"),
                QueryCondition::field("Size", "gt", "1024"),
            ])),
            max_results: Some(50),
            ..SimpleQueryRequest::new("p", "d")
        };

        let params = request.to_params().unwrap();
        assert_eq!(
            params.get("Query").unwrap().to_string(),
            concat!(
                r#"{"Operation":"and","SubQueries":["#,
                r#"{"Field":"MediaType","Operation":"eq","Value":"image"},"#,
                r#"{"Field":"Size","Operation":"gt","Value":"1024"}]}"#
            )
        );
        assert_eq!(params.get("MaxResults").unwrap().to_string(), "50");
        assert!(!params.keys().any(|k| k.starts_with("Query.")));
    }

    #[test]
    fn test_fuzzy_query_is_plain_string() {
        let params = FuzzyQueryRequest::new("p", "d", "beach sunset")
            .to_params()
            .unwrap();
        assert_eq!(params.get("Query").unwrap().to_string(), "beach sunset");
    }

    #[test]
    fn test_semantic_query_requires_query() {
        let request = SemanticQueryRequest {
            query: None,
            ..SemanticQueryRequest::new("p", "d", "x")
        };
        assert_eq!(
            request.validate().unwrap_err().to_string(),
            "Missing required field: Query"
        );
    }
}
