//! Multi-region access point endpoint resolution for ArnPoint.
//!
//! When a caller puts an ARN in the bucket field of a request, the endpoint
//! can no longer be derived from the bucket name: the ARN names
//! infrastructure of its own, and the client configuration decides whether
//! routing there is even permitted. This crate makes that decision for
//! multi-region access points.
//!
//! ```text
//! bucket field (plain name or ARN)
//!        |
//!        v
//! ResourceArn::parse + classification
//!        |
//!        v
//! resolver::resolve (configuration checks, partition table)
//!        |
//!        v
//! OutboundRequest (URI rewritten, or the rejection surfaced)
//! ```
//!
//! Resolution is a pure function of the parsed ARN and the per-request
//! [`ClientEndpointConfig`] snapshot: it performs no I/O and holds no shared
//! state, so it is safe to call concurrently from any number of tasks.
//! Rejections are deliberate and fatal; a request that fails any
//! compatibility check must never reach the transport layer.

pub mod config;
pub mod error;
pub mod partition;
pub mod request;
pub mod resolver;

pub use config::ClientEndpointConfig;
pub use error::{Incompatibility, ResolveError, ResolveResult};
pub use request::{ArnAddressing, OutboundRequest};
pub use resolver::{MRAP_SIGNING_REGION, ResolvedEndpoint, resolve};
