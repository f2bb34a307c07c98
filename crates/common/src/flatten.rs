//! Shrinking structured fields into single wire strings
//!
//! The RPC wire format only carries flat `name=value` pairs. Nested models
//! and arrays are therefore serialized into one string per field, using the
//! style the operation declares for that field.

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a structured field is rendered into its wire string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShrinkStyle {
    /// JSON text of the whole value
    #[default]
    Json,
    /// Array elements joined with `,`
    Simple,
    /// Array elements joined with a space
    SpaceDelimited,
    /// Array elements joined with `|`
    PipeDelimited,
    /// Dotted `Name.1.Key=value` pairs joined with `&&`
    RepeatList,
}

/// Serialize `value` into the wire string for parameter `name`.
///
/// Returns the parameter name together with the rendered string so callers
/// can insert the pair directly into a parameter map.
pub fn flatten<S: Serialize + ?Sized>(
    name: &str,
    value: &S,
    style: ShrinkStyle,
) -> Result<(String, String)> {
    let value = serde_json::to_value(value)?;

    let rendered = match style {
        ShrinkStyle::Json => serde_json::to_string(&value)?,
        ShrinkStyle::Simple => join_elements(&value, ",")?,
        ShrinkStyle::SpaceDelimited => join_elements(&value, " ")?,
        ShrinkStyle::PipeDelimited => join_elements(&value, "|")?,
        ShrinkStyle::RepeatList => flatten_query(name, &value)
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&&"),
    };

    Ok((name.to_string(), rendered))
}

/// Expand a nested value into dotted `Prefix.N.Key` pairs.
///
/// Array elements are numbered from 1. Null members are dropped.
pub fn flatten_query(prefix: &str, value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    flatten_into(prefix, value, &mut pairs);
    pairs
}

fn flatten_into(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {},
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(&join_key(prefix, &(i + 1).to_string()), item, pairs);
            }
        },
        Value::Object(members) => {
            for (key, member) in members {
                flatten_into(&join_key(prefix, key), member, pairs);
            }
        },
        scalar => pairs.push((prefix.to_string(), scalar_to_string(scalar))),
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn join_elements(value: &Value, separator: &str) -> Result<String> {
    match value {
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    Value::Array(_) | Value::Object(_) => serde_json::to_string(item),
                    scalar => Ok(scalar_to_string(scalar)),
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(parts.join(separator))
        },
        Value::Object(_) => Ok(serde_json::to_string(value)?),
        scalar => Ok(scalar_to_string(scalar)),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_json() {
        let tags = json!([{"Key": "env", "Value": "prod"}]);
        let (name, value) = flatten("Tag", &tags, ShrinkStyle::Json).unwrap();
        assert_eq!(name, "Tag");
        assert_eq!(value, r#"[{"Key":"env","Value":"prod"}]"#);
    }

    #[test]
    fn test_flatten_delimited() {
        let uris = vec!["oss://a/1.jpg", "oss://a/2.jpg"];
        assert_eq!(
            flatten("URIs", &uris, ShrinkStyle::Simple).unwrap().1,
            "oss://a/1.jpg,oss://a/2.jpg"
        );
        assert_eq!(
            flatten("URIs", &uris, ShrinkStyle::SpaceDelimited).unwrap().1,
            "oss://a/1.jpg oss://a/2.jpg"
        );
        assert_eq!(
            flatten("URIs", &uris, ShrinkStyle::PipeDelimited).unwrap().1,
            "oss://a/1.jpg|oss://a/2.jpg"
        );
    }

    #[test]
    fn test_flatten_repeat_list() {
        let tags = json!([{"Key": "env", "Value": "prod"}, {"Key": "team"}]);
        let (_, value) = flatten("Tag", &tags, ShrinkStyle::RepeatList).unwrap();
        assert_eq!(value, "Tag.1.Key=env&&Tag.1.Value=prod&&Tag.2.Key=team");
    }

    #[test]
    fn test_flatten_query_drops_nulls() {
        let value = json!({"Field": "Size", "Value": null, "SubQueries": [{"Field": "a"}]});
        let pairs = flatten_query("Query", &value);
        assert_eq!(
            pairs,
            vec![
                ("Query.Field".to_string(), "Size".to_string()),
                ("Query.SubQueries.1.Field".to_string(), "a".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_scalar() {
        let (_, value) = flatten("Threshold", &0.75, ShrinkStyle::Simple).unwrap();
        assert_eq!(value, "0.75");
    }
}
