use thiserror::Error;

/// Result alias used across the Terraform bindings
pub type Result<T> = std::result::Result<T, TerraformError>;

#[derive(Error, Debug)]
pub enum TerraformError {
    #[error("Missing required property '{property}' for {resource}")]
    MissingProperty {
        resource: &'static str,
        property: &'static str,
    },

    #[error("Duplicate construct id '{0}' in stack")]
    DuplicateConstruct(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unwrap a staged required value or report which property is missing
pub(crate) fn require<T>(
    value: Option<T>,
    resource: &'static str,
    property: &'static str,
) -> Result<T> {
    value.ok_or(TerraformError::MissingProperty { resource, property })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_message() {
        let err = require::<String>(None, "akamai_clientlist_list", "contract_id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required property 'contract_id' for akamai_clientlist_list"
        );
    }

    #[test]
    fn test_require_passes_value_through() {
        assert_eq!(require(Some(7), "r", "p").unwrap(), 7);
    }
}
