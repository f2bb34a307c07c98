//! Meta-arguments shared by every resource block

use serde::Serialize;

/// `lifecycle` block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lifecycle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_before_destroy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_destroy: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_changes: Vec<String>,
}

/// How many instances to create
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Count {
    Fixed(u32),
    /// An expression such as `${var.replicas}`
    Expression(String),
}

/// Meta-arguments accepted on any resource block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetaArguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<Count>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_each: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
}

impl MetaArguments {
    pub fn with_count(mut self, count: Count) -> Self {
        self.count = Some(count);
        self
    }

    /// Add a dependency by resource address, e.g. `akamai_gtm_domain.main`
    pub fn depends_on(mut self, address: impl Into<String>) -> Self {
        self.depends_on.push(address.into());
        self
    }

    pub fn with_for_each(mut self, expression: impl Into<String>) -> Self {
        self.for_each = Some(expression.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &MetaArguments::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_meta_serializes_to_empty_object() {
        let meta = MetaArguments::default();
        assert!(meta.is_empty());
        assert_eq!(serde_json::to_value(&meta).unwrap(), json!({}));
    }

    #[test]
    fn test_meta_fields() {
        let meta = MetaArguments::default()
            .with_count(Count::Fixed(2))
            .depends_on("akamai_gtm_domain.main")
            .with_provider("akamai.edge")
            .with_lifecycle(Lifecycle {
                prevent_destroy: Some(true),
                ignore_changes: vec!["notes".to_string()],
                ..Default::default()
            });

        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({
                "count": 2,
                "depends_on": ["akamai_gtm_domain.main"],
                "provider": "akamai.edge",
                "lifecycle": {"prevent_destroy": true, "ignore_changes": ["notes"]}
            })
        );
    }
}
