//! Resources of the Akamai provider (5.6.0 schema)

mod clientlist_list;
mod gtm_property;

pub use clientlist_list::*;
pub use gtm_property::*;

/// Provider source address for `required_providers`
pub const PROVIDER_SOURCE: &str = "akamai/akamai";
