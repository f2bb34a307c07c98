//! A set of resources synthesized into one Terraform JSON document

use crate::error::{Result, TerraformError};
use crate::resource::{address, TerraformResource};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// An `import` block: adopt an existing remote object into a resource address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportBlock {
    pub to: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl ImportBlock {
    pub fn new(
        resource_type: &str,
        import_to_id: &str,
        import_from_id: impl Into<String>,
        provider: Option<&str>,
    ) -> Self {
        Self {
            to: address(resource_type, import_to_id),
            id: import_from_id.into(),
            provider: provider.map(str::to_string),
        }
    }
}

#[derive(Default)]
pub struct TerraformStack {
    resources: Vec<Box<dyn TerraformResource>>,
    imports: Vec<ImportBlock>,
    construct_ids: BTreeSet<String>,
    required_providers: BTreeMap<String, String>,
}

impl TerraformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource; construct ids must be unique within the stack
    pub fn add<R: TerraformResource + 'static>(&mut self, resource: R) -> Result<()> {
        let id = resource.construct_id().to_string();
        if !self.construct_ids.insert(id.clone()) {
            return Err(TerraformError::DuplicateConstruct(id));
        }
        if let Some((name, source)) = resource.provider_requirement() {
            self.require_provider(name, source);
        }
        self.resources.push(Box::new(resource));
        Ok(())
    }

    /// Pin a provider under `terraform.required_providers`
    pub fn require_provider(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.required_providers.insert(name.into(), source.into());
    }

    pub fn add_import(&mut self, import: ImportBlock) {
        self.imports.push(import);
    }

    pub fn resources(&self) -> impl Iterator<Item = &dyn TerraformResource> {
        self.resources.iter().map(|r| r.as_ref())
    }

    pub fn imports(&self) -> &[ImportBlock] {
        &self.imports
    }

    /// Render `{"terraform": {...}, "resource": {type: {id: {...}}}, "import": [...]}`
    pub fn synth(&self) -> Result<Value> {
        let mut by_type: Map<String, Value> = Map::new();
        for resource in &self.resources {
            let blocks = by_type
                .entry(resource.resource_type().to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(blocks) = blocks {
                blocks.insert(
                    resource.construct_id().to_string(),
                    resource.to_terraform()?,
                );
            }
        }

        let mut document = Map::new();
        if !self.required_providers.is_empty() {
            let providers: Map<String, Value> = self
                .required_providers
                .iter()
                .map(|(name, source)| {
                    let mut entry = Map::new();
                    entry.insert("source".to_string(), Value::String(source.clone()));
                    (name.clone(), Value::Object(entry))
                })
                .collect();
            let mut terraform = Map::new();
            terraform.insert("required_providers".to_string(), Value::Object(providers));
            document.insert("terraform".to_string(), Value::Object(terraform));
        }
        document.insert("resource".to_string(), Value::Object(by_type));
        if !self.imports.is_empty() {
            document.insert("import".to_string(), serde_json::to_value(&self.imports)?);
        }
        Ok(Value::Object(document))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.synth()?)?)
    }

    /// Write the synthesized document, e.g. to `main.tf.json`
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

impl std::fmt::Debug for TerraformStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerraformStack")
            .field("resources", &self.construct_ids)
            .field("imports", &self.imports)
            .field("required_providers", &self.required_providers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_import_block_shape() {
        let import = ImportBlock::new("akamai_gtm_property", "www", "example.akadns.net:www", None);
        assert_eq!(
            serde_json::to_value(&import).unwrap(),
            json!({"to": "akamai_gtm_property.www", "id": "example.akadns.net:www"})
        );
    }

    #[test]
    fn test_empty_stack_synth() {
        let stack = TerraformStack::new();
        assert_eq!(stack.synth().unwrap(), json!({"resource": {}}));
    }

    #[test]
    fn test_required_providers_rendered() {
        let mut stack = TerraformStack::new();
        stack.require_provider("akamai", "akamai/akamai");
        assert_eq!(
            stack.synth().unwrap(),
            json!({
                "terraform": {"required_providers": {"akamai": {"source": "akamai/akamai"}}},
                "resource": {}
            })
        );
    }
}
