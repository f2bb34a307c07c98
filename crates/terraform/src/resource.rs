//! The trait every resource binding implements, plus reference helpers

use crate::error::Result;
use crate::meta::MetaArguments;
use serde_json::{Map, Value};

/// Resource address as Terraform prints it: `<type>.<id>`
pub fn address(resource_type: &str, construct_id: &str) -> String {
    format!("{}.{}", resource_type, construct_id)
}

/// Interpolation token for an attribute of another resource
///
/// The value is resolved by Terraform at apply time, so computed
/// attributes (ids, versions) can be wired into other resources.
pub fn interpolate(resource_type: &str, construct_id: &str, attribute: &str) -> String {
    format!("${{{}.{}}}", address(resource_type, construct_id), attribute)
}

pub trait TerraformResource {
    /// Provider resource type, e.g. `akamai_gtm_property`
    fn resource_type(&self) -> &'static str;

    /// Local name of the block inside the configuration
    fn construct_id(&self) -> &str;

    /// Configured attributes under their Terraform names; unset optionals are omitted
    fn synthesize_attributes(&self) -> Result<Map<String, Value>>;

    fn meta(&self) -> &MetaArguments;

    /// `(local name, source address)` of the provider that owns this type
    fn provider_requirement(&self) -> Option<(&'static str, &'static str)> {
        None
    }

    fn address(&self) -> String {
        address(self.resource_type(), self.construct_id())
    }

    fn reference(&self, attribute: &str) -> String {
        interpolate(self.resource_type(), self.construct_id(), attribute)
    }

    /// Body of the resource block: attributes merged with meta-arguments
    fn to_terraform(&self) -> Result<Value> {
        let mut block = self.synthesize_attributes()?;
        if let Value::Object(meta) = serde_json::to_value(self.meta())? {
            block.extend(meta);
        }
        Ok(Value::Object(block))
    }
}

/// Serialize a config struct into an attribute map
pub(crate) fn attributes_of<T: serde::Serialize>(config: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(config)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_token() {
        assert_eq!(
            interpolate("akamai_clientlist_list", "blocked", "list_id"),
            "${akamai_clientlist_list.blocked.list_id}"
        );
        assert_eq!(
            address("akamai_gtm_property", "www"),
            "akamai_gtm_property.www"
        );
    }
}
