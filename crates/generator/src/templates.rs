//! Template loading and filters

use crate::naming;
use cloud_bindings_common::{BindingError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

const TEMPLATES: &[(&str, &str)] = &[
    ("Cargo.toml", include_str!("../templates/Cargo.toml.tera")),
    ("README.md", include_str!("../templates/README.md.tera")),
    ("lib.rs", include_str!("../templates/lib.rs.tera")),
    ("models.rs", include_str!("../templates/models.rs.tera")),
    ("operations.rs", include_str!("../templates/operations.rs.tera")),
    ("client.rs", include_str!("../templates/client.rs.tera")),
];

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.register_filter("snake_case", snake_case_filter);

    for (name, source) in TEMPLATES {
        tera.add_raw_template(name, source).map_err(|e| {
            BindingError::Generation(format!("Failed to load {} template: {}", name, e))
        })?;
    }

    Ok(tera)
}

/// Names of the loaded templates, in render order
pub fn template_names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|(name, _)| *name)
}

fn snake_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("snake_case filter expects a string"))?;
    Ok(Value::String(naming::snake_case(name)))
}
