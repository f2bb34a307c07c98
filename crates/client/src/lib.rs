//! Operation execution over a single transport interface
//!
//! Every generated operation wrapper funnels into [`ApiClient::execute`],
//! which runs the same five steps for any [`Operation`]:
//!
//! 1. validate the request against its required fields
//! 2. shrink structured fields into strings
//! 3. build the flat wire parameter map
//! 4. invoke the [`Transport`] with the operation's fixed metadata
//! 5. deserialize the raw response into the typed body
//!
//! The transport is composed into the client rather than inherited from, so
//! tests swap in a [`RecordingTransport`] or a mock while production code
//! uses [`HttpTransport`].

mod api_client;
mod blocking;
mod http;
mod operation;
mod recording;
mod signer;
mod transport;

pub use api_client::{prepare, ApiClient, PreparedCall};
pub use blocking::Blocking;
pub use http::HttpTransport;
pub use operation::{ApiResponse, Operation, OperationRequest};
pub use recording::{RecordedCall, RecordingTransport};
pub use signer::{percent_encode, RpcSigner};
pub use transport::{RuntimeOptions, Transport, TransportResponse};

pub use cloud_bindings_common::{BindingError, OperationMetadata, ParamMap, ParamValue, Result};
