//! Flat wire parameter map

use crate::{BindingError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A scalar parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    /// Values above `i64::MAX`
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(s) => f.write_str(s),
            ParamValue::Integer(i) => write!(f, "{}", i),
            ParamValue::Unsigned(u) => write!(f, "{}", u),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => ParamValue::Integer(i),
            Err(_) => ParamValue::Unsigned(value),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

/// Ordered mapping of wire parameter names to scalar values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParamMap(BTreeMap<String, ParamValue>);

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a flat serializable value.
    ///
    /// Null members are dropped. Arrays and objects are rejected: structured
    /// fields have to be flattened into strings before they reach this point.
    pub fn from_serialize<S: Serialize + ?Sized>(value: &S) -> Result<Self> {
        let value = serde_json::to_value(value)?;
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(BindingError::Validation(format!(
                    "expected a parameter object, got {}",
                    other
                )))
            },
        };

        let mut params = ParamMap::new();
        for (name, value) in object {
            let param = match value {
                Value::Null => continue,
                Value::Bool(b) => ParamValue::Boolean(b),
                Value::String(s) => ParamValue::String(s),
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        ParamValue::Integer(i)
                    } else if let Some(u) = n.as_u64() {
                        ParamValue::Unsigned(u)
                    } else {
                        ParamValue::Float(n.as_f64().unwrap_or_default())
                    }
                },
                Value::Array(_) | Value::Object(_) => {
                    return Err(BindingError::Validation(format!(
                        "parameter {} is structured and must be flattened first",
                        name
                    )))
                },
            };
            params.0.insert(name, param);
        }

        Ok(params)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Insert only when the value is set
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render every value to its wire string
    pub fn to_wire_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Flat {
        project_name: Option<String>,
        max_results: Option<i64>,
        with_statistics: Option<bool>,
        threshold: Option<f64>,
    }

    #[test]
    fn test_from_serialize_skips_unset() {
        let flat = Flat {
            project_name: Some("demo".to_string()),
            max_results: None,
            with_statistics: Some(true),
            threshold: Some(0.5),
        };
        let params = ParamMap::from_serialize(&flat).unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(
            params.get("ProjectName"),
            Some(&ParamValue::String("demo".to_string()))
        );
        assert!(!params.contains("MaxResults"));
        assert_eq!(params.get("WithStatistics"), Some(&ParamValue::Boolean(true)));
        assert_eq!(params.get("Threshold"), Some(&ParamValue::Float(0.5)));
    }

    #[test]
    fn test_from_serialize_rejects_structured() {
        let value = serde_json::json!({"Tag": [{"Key": "a"}]});
        let err = ParamMap::from_serialize(&value).unwrap_err();
        assert!(err.to_string().contains("Tag"));
    }

    #[test]
    fn test_insert_opt() {
        let mut params = ParamMap::new();
        params.insert_opt("A", Some(1i64));
        params.insert_opt::<i64>("B", None);
        assert!(params.contains("A"));
        assert!(!params.contains("B"));
    }

    #[test]
    fn test_wire_pairs() {
        let mut params = ParamMap::new();
        params.insert("MaxResults", 100i64);
        params.insert("WithStatistics", false);
        assert_eq!(
            params.to_wire_pairs(),
            vec![
                ("MaxResults".to_string(), "100".to_string()),
                ("WithStatistics".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_large_unsigned_kept_exact() {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct Blob {
            file_size: u64,
        }

        let params = ParamMap::from_serialize(&Blob { file_size: u64::MAX }).unwrap();
        assert_eq!(params.get("FileSize"), Some(&ParamValue::Unsigned(u64::MAX)));
        assert_eq!(
            params.to_wire_pairs(),
            vec![("FileSize".to_string(), "18446744073709551615".to_string())]
        );
        assert_eq!(ParamValue::from(7u64), ParamValue::Integer(7));
    }

    #[test]
    fn test_from_unsized_value() {
        let name: &str = "demo";
        let err = ParamMap::from_serialize(name).unwrap_err();
        assert!(err.to_string().contains("expected a parameter object"));
    }
}
