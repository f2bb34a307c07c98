//! `akamai_clientlist_list` from the Akamai provider
//!
//! Registry docs: <https://registry.terraform.io/providers/akamai/akamai/5.6.0/docs/resources/clientlist_list>

use super::PROVIDER_SOURCE;
use crate::error::{require, Result};
use crate::meta::MetaArguments;
use crate::resource::{attributes_of, TerraformResource};
use crate::stack::{ImportBlock, TerraformStack};
use serde::Serialize;
use serde_json::{Map, Value};

/// One entry of the list: an IP, CIDR, ASN, geo code or TLS fingerprint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientlistListItems {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ClientlistListItems {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }
}

/// Declared attributes of `akamai_clientlist_list`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientlistListConfig {
    pub contract_id: String,
    pub group_id: i64,
    pub name: String,
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ClientlistListItems>>,
    #[serde(skip)]
    pub meta: MetaArguments,
}

impl ClientlistListConfig {
    pub fn builder() -> ClientlistListConfigBuilder {
        ClientlistListConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientlistListConfigBuilder {
    contract_id: Option<String>,
    group_id: Option<i64>,
    name: Option<String>,
    r#type: Option<String>,
    id: Option<String>,
    notes: Option<String>,
    tags: Option<Vec<String>>,
    items: Option<Vec<ClientlistListItems>>,
    meta: MetaArguments,
}

impl ClientlistListConfigBuilder {
    pub fn contract_id(mut self, value: impl Into<String>) -> Self {
        self.contract_id = Some(value.into());
        self
    }

    pub fn group_id(mut self, value: i64) -> Self {
        self.group_id = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn notes(mut self, value: impl Into<String>) -> Self {
        self.notes = Some(value.into());
        self
    }

    pub fn tags(mut self, value: Vec<String>) -> Self {
        self.tags = Some(value);
        self
    }

    pub fn items(mut self, value: Vec<ClientlistListItems>) -> Self {
        self.items = Some(value);
        self
    }

    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn build(self) -> Result<ClientlistListConfig> {
        let resource = ClientlistList::TF_RESOURCE_TYPE;
        Ok(ClientlistListConfig {
            contract_id: require(self.contract_id, resource, "contract_id")?,
            group_id: require(self.group_id, resource, "group_id")?,
            name: require(self.name, resource, "name")?,
            r#type: require(self.r#type, resource, "type")?,
            id: self.id,
            notes: self.notes,
            tags: self.tags,
            items: self.items,
            meta: self.meta,
        })
    }
}

/// `akamai_clientlist_list` resource block
#[derive(Debug, Clone)]
pub struct ClientlistList {
    construct_id: String,
    config: ClientlistListConfig,
}

impl ClientlistList {
    pub const TF_RESOURCE_TYPE: &'static str = "akamai_clientlist_list";

    pub fn new(construct_id: impl Into<String>, config: ClientlistListConfig) -> Self {
        Self {
            construct_id: construct_id.into(),
            config,
        }
    }

    /// Register an `import` block that adopts an existing remote object
    pub fn generate_config_for_import(
        stack: &mut TerraformStack,
        import_to_id: &str,
        import_from_id: &str,
        provider: Option<&str>,
    ) -> ImportBlock {
        let import =
            ImportBlock::new(Self::TF_RESOURCE_TYPE, import_to_id, import_from_id, provider);
        stack.add_import(import.clone());
        import
    }

    pub fn config(&self) -> &ClientlistListConfig {
        &self.config
    }

    pub fn meta_mut(&mut self) -> &mut MetaArguments {
        &mut self.config.meta
    }

    pub fn contract_id(&self) -> String {
        self.reference("contract_id")
    }

    pub fn contract_id_input(&self) -> &str {
        &self.config.contract_id
    }

    pub fn set_contract_id(&mut self, value: impl Into<String>) {
        self.config.contract_id = value.into();
    }

    pub fn group_id(&self) -> String {
        self.reference("group_id")
    }

    pub fn group_id_input(&self) -> i64 {
        self.config.group_id
    }

    pub fn set_group_id(&mut self, value: i64) {
        self.config.group_id = value;
    }

    pub fn name(&self) -> String {
        self.reference("name")
    }

    pub fn name_input(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.config.name = value.into();
    }

    pub fn r#type(&self) -> String {
        self.reference("type")
    }

    pub fn type_input(&self) -> &str {
        &self.config.r#type
    }

    pub fn set_type(&mut self, value: impl Into<String>) {
        self.config.r#type = value.into();
    }

    pub fn id(&self) -> String {
        self.reference("id")
    }

    pub fn id_input(&self) -> Option<&str> {
        self.config.id.as_deref()
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.config.id = Some(value.into());
    }

    pub fn reset_id(&mut self) {
        self.config.id = None;
    }

    pub fn notes(&self) -> String {
        self.reference("notes")
    }

    pub fn notes_input(&self) -> Option<&str> {
        self.config.notes.as_deref()
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.config.notes = Some(value.into());
    }

    pub fn reset_notes(&mut self) {
        self.config.notes = None;
    }

    pub fn tags(&self) -> String {
        self.reference("tags")
    }

    pub fn tags_input(&self) -> Option<&[String]> {
        self.config.tags.as_deref()
    }

    pub fn set_tags(&mut self, value: Vec<String>) {
        self.config.tags = Some(value);
    }

    pub fn reset_tags(&mut self) {
        self.config.tags = None;
    }

    pub fn items(&self) -> String {
        self.reference("items")
    }

    pub fn items_input(&self) -> Option<&[ClientlistListItems]> {
        self.config.items.as_deref()
    }

    pub fn put_items(&mut self, value: Vec<ClientlistListItems>) {
        self.config.items = Some(value);
    }

    pub fn reset_items(&mut self) {
        self.config.items = None;
    }

    /// Computed by the provider
    pub fn items_count(&self) -> String {
        self.reference("items_count")
    }

    /// Computed by the provider
    pub fn list_id(&self) -> String {
        self.reference("list_id")
    }

    /// Computed by the provider
    pub fn version(&self) -> String {
        self.reference("version")
    }
}

impl TerraformResource for ClientlistList {
    fn resource_type(&self) -> &'static str {
        Self::TF_RESOURCE_TYPE
    }

    fn construct_id(&self) -> &str {
        &self.construct_id
    }

    fn synthesize_attributes(&self) -> Result<Map<String, Value>> {
        attributes_of(&self.config)
    }

    fn meta(&self) -> &MetaArguments {
        &self.config.meta
    }

    fn provider_requirement(&self) -> Option<(&'static str, &'static str)> {
        Some(("akamai", PROVIDER_SOURCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TerraformError;
    use serde_json::json;

    fn config() -> ClientlistListConfig {
        ClientlistListConfig::builder()
            .contract_id("C-1")
            .group_id(42)
            .name("blocked")
            .r#type("IP")
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_contract_id() {
        let err = ClientlistListConfig::builder()
            .group_id(42)
            .name("blocked")
            .r#type("IP")
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            TerraformError::MissingProperty {
                resource: "akamai_clientlist_list",
                property: "contract_id",
            }
        ));
    }

    #[test]
    fn test_optionals_omitted_until_set() {
        let mut list = ClientlistList::new("blocked", config());
        assert_eq!(
            serde_json::Value::Object(list.synthesize_attributes().unwrap()),
            json!({"contract_id": "C-1", "group_id": 42, "name": "blocked", "type": "IP"})
        );

        list.set_notes("managed by terraform");
        list.put_items(vec![ClientlistListItems {
            description: Some("office".to_string()),
            ..ClientlistListItems::new("10.0.0.0/8")
        }]);
        let attributes = list.synthesize_attributes().unwrap();
        assert_eq!(attributes["notes"], "managed by terraform");
        assert_eq!(
            attributes["items"],
            json!([{"value": "10.0.0.0/8", "description": "office"}])
        );

        list.reset_notes();
        list.reset_items();
        let attributes = list.synthesize_attributes().unwrap();
        assert!(!attributes.contains_key("notes"));
        assert!(!attributes.contains_key("items"));
    }

    #[test]
    fn test_inputs_and_references() {
        let mut list = ClientlistList::new("blocked", config());
        list.set_type("GEO");
        list.set_tags(vec!["edge".to_string()]);

        assert_eq!(list.type_input(), "GEO");
        assert_eq!(list.group_id_input(), 42);
        assert_eq!(list.tags_input(), Some(&["edge".to_string()][..]));
        assert_eq!(list.notes_input(), None);
        assert_eq!(list.list_id(), "${akamai_clientlist_list.blocked.list_id}");
        assert_eq!(list.version(), "${akamai_clientlist_list.blocked.version}");
        assert_eq!(list.r#type(), "${akamai_clientlist_list.blocked.type}");
    }
}
