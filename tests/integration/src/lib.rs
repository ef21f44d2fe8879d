//! End-to-end tests for ArnPoint endpoint resolution.
//!
//! Resolution is a pure in-process function, so these tests run hermetically
//! with plain `cargo test`; no server or network is involved. They drive the
//! full path a real client takes: a bucket field lands in an
//! [`OutboundRequest`], ARN addressing is applied against a configuration
//! snapshot, and the test asserts on the final URI or on the rejection text,
//! matching reasons by substring the way calling code does.

use std::sync::Once;

use arnpoint_core::{ClientEndpointConfig, OutboundRequest};
use http::{Method, Uri};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// The multi-region access point ARN used across the scenarios.
pub const MRAP_ARN: &str = "arn:aws:s3:global:123456789012:accesspoint:myaccesspoint";

/// The global endpoint [`MRAP_ARN`] resolves to.
pub const MRAP_ENDPOINT: &str =
    "https://myaccesspoint.123456789012.mrap.global-s3.amazonaws.com";

/// Configuration that permits multi-region resolution: `ap-south-1` client,
/// cross-region ARN use enabled, every other flag off.
#[must_use]
pub fn base_config() -> ClientEndpointConfig {
    init_tracing();

    ClientEndpointConfig::builder()
        .client_region("ap-south-1".into())
        .use_arn_region_enabled(true)
        .build()
}

/// A GET request against the regional endpoint, carrying `bucket` in its
/// bucket field the way a list-objects call would.
#[must_use]
pub fn list_request(bucket: &str) -> OutboundRequest {
    init_tracing();

    OutboundRequest::new(
        Method::GET,
        Uri::from_static("https://s3.ap-south-1.amazonaws.com/?list-type=2&prefix="),
        bucket,
    )
}

mod test_arn_addressing;
