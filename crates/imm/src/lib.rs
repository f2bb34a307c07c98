//! Intelligent Media Management (IMM) API bindings, version 2020-09-30
//!
//! ```no_run
//! use cloud_bindings_common::ClientConfig;
//! use cloud_bindings_imm::{CreateDatasetRequest, ImmClient};
//!
//! # async fn run() -> cloud_bindings_common::Result<()> {
//! let config = ClientConfig::default()
//!     .with_credentials("<access-key-id>", "<access-key-secret>")
//!     .with_region("cn-hangzhou");
//! let client = ImmClient::new(&config)?;
//!
//! let response = client
//!     .create_dataset(&CreateDatasetRequest::new("my-project", "photos"))
//!     .await?;
//! println!("{:?}", response.body.dataset);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod models;
pub mod operations;

pub use client::ImmClient;
pub use models::*;

use cloud_bindings_common::EndpointType;

/// API version sent with every call
pub const API_VERSION: &str = "2020-09-30";

/// Product code used for endpoint resolution
pub const PRODUCT: &str = "imm";

/// IMM endpoints are per region
pub const ENDPOINT_TYPE: EndpointType = EndpointType::Regional;
