//! Typed Terraform resource bindings
//!
//! Resources are built from config objects, collected into a
//! [`TerraformStack`] and synthesized into Terraform JSON configuration.
//!
//! ```
//! use cloud_bindings_terraform::akamai::{ClientlistList, ClientlistListConfig};
//! use cloud_bindings_terraform::TerraformStack;
//!
//! let config = ClientlistListConfig::builder()
//!     .contract_id("C-0N7RAC7")
//!     .group_id(12345)
//!     .name("blocked-ips")
//!     .r#type("IP")
//!     .build()?;
//!
//! let mut stack = TerraformStack::new();
//! stack.add(ClientlistList::new("blocked", config))?;
//! println!("{}", stack.to_json_pretty()?);
//! # Ok::<(), cloud_bindings_terraform::TerraformError>(())
//! ```

pub mod akamai;
pub mod error;
pub mod meta;
pub mod resource;
pub mod stack;

pub use error::{Result, TerraformError};
pub use meta::{Count, Lifecycle, MetaArguments};
pub use resource::{address, interpolate, TerraformResource};
pub use stack::{ImportBlock, TerraformStack};
