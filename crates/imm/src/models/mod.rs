//! Requests, shrink requests and response bodies for every IMM operation
//!
//! Requests serialize with their wire names, so `validate` and the
//! parameter map share one source of truth. Operations with structured
//! fields also have a `*ShrinkRequest` whose structured members are JSON
//! strings under the same wire name.

mod binding;
mod common;
mod dataset;
mod detection;
mod file_meta;
mod project;
mod query;
mod task;
mod weboffice;

pub use binding::*;
pub use common::*;
pub use dataset::*;
pub use detection::*;
pub use file_meta::*;
pub use project::*;
pub use query::*;
pub use task::*;
pub use weboffice::*;

use cloud_bindings_common::{flatten, Result, ShrinkStyle};
use serde::Serialize;

/// Shrink an optional structured field into its JSON wire string
pub(crate) fn shrink_json<T: Serialize + ?Sized>(
    name: &str,
    value: Option<&T>,
) -> Result<Option<String>> {
    value
        .map(|v| flatten(name, v, ShrinkStyle::Json).map(|(_, rendered)| rendered))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink_json() {
        let tags = vec![Tag::new("env", "prod")];
        assert_eq!(
            shrink_json("Tag", Some(&tags)).unwrap().as_deref(),
            Some(r#"[{"TagKey":"env","TagValue":"prod"}]"#)
        );
        assert_eq!(shrink_json::<Vec<Tag>>("Tag", None).unwrap(), None);
    }
}
