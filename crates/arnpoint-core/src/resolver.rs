//! Multi-region access point endpoint resolution.
//!
//! The resolver is a pure validation-and-construction function: given a
//! parsed access-point ARN and the client configuration snapshot, it either
//! computes the global endpoint host or rejects the request before any
//! network I/O can happen.
//!
//! Checks run as a short-circuiting chain in a fixed order; the first
//! conflict found is the one reported:
//!
//! 1. endpoint override
//! 2. dualstack
//! 3. FIPS client region
//! 4. transfer acceleration
//! 5. path-style addressing
//! 6. the ARN-region gate (`use_arn_region_enabled` must be on)
//!
//! Only then is the ARN's partition resolved to a DNS suffix and the host
//! assembled.

use arnpoint_arn::{InvalidArn, ResourceArn};

use crate::config::ClientEndpointConfig;
use crate::error::{Incompatibility, ResolveError, ResolveResult};
use crate::partition;

/// Region scope multi-region access point requests are signed for.
///
/// The wildcard scope covers every region the access point fronts; the
/// client's own region never participates in signing these requests.
pub const MRAP_SIGNING_REGION: &str = "*";

/// Endpoint computed for a multi-region access point request.
///
/// Constructed once per request and consumed immediately by the transport
/// and signing layers; resolution is a pure function of its inputs, so there
/// is nothing to cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    /// Host the request must be routed to.
    pub host: String,
    /// Region scope the request must be signed for. Always
    /// [`MRAP_SIGNING_REGION`], never the client region.
    pub signing_region: String,
}

/// Resolve a multi-region access point ARN against the client configuration.
///
/// The caller must already have classified `arn` as a multi-region access
/// point (see [`ResourceArn::is_multi_region_access_point`]); other ARN
/// shapes belong to other resolution paths and are not rejected here.
///
/// On success the host is
/// `{resource_name}.{account_id}.mrap.global-s3.{partition_dns_suffix}` and
/// the signing region is [`MRAP_SIGNING_REGION`].
///
/// # Errors
/// Returns [`ResolveError::UnsupportedConfiguration`] when a configuration
/// check fails, and [`ResolveError::MalformedArn`] when the ARN's partition
/// is unrecognized.
///
/// # Examples
/// ```
/// use arnpoint_arn::ResourceArn;
/// use arnpoint_core::config::ClientEndpointConfig;
/// use arnpoint_core::resolver::resolve;
///
/// let arn = ResourceArn::parse("arn:aws:s3:global:123456789012:accesspoint:myaccesspoint")?;
/// let config = ClientEndpointConfig::builder()
///     .client_region("ap-south-1".into())
///     .use_arn_region_enabled(true)
///     .build();
///
/// let endpoint = resolve(&arn, &config)?;
/// assert_eq!(endpoint.host, "myaccesspoint.123456789012.mrap.global-s3.amazonaws.com");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve(
    arn: &ResourceArn,
    config: &ClientEndpointConfig,
) -> ResolveResult<ResolvedEndpoint> {
    if let Some(conflict) = first_incompatibility(config) {
        return Err(ResolveError::UnsupportedConfiguration(conflict));
    }

    let suffix = partition::dns_suffix(arn.partition()).ok_or_else(|| {
        ResolveError::MalformedArn(InvalidArn::UnknownPartition {
            partition: arn.partition().to_owned(),
            arn: arn.to_string(),
        })
    })?;

    Ok(ResolvedEndpoint {
        host: format!(
            "{}.{}.mrap.global-s3.{}",
            arn.resource_name(),
            arn.account_id(),
            suffix
        ),
        signing_region: MRAP_SIGNING_REGION.to_owned(),
    })
}

/// Run the configuration checks in priority order, returning the first
/// conflict found.
fn first_incompatibility(config: &ClientEndpointConfig) -> Option<Incompatibility> {
    check_endpoint_override(config)
        .or_else(|| check_dualstack(config))
        .or_else(|| check_fips(config))
        .or_else(|| check_accelerate(config))
        .or_else(|| check_path_style(config))
        .or_else(|| check_arn_region(config))
}

// A multi-region access point always computes its own host; a custom
// endpoint cannot be honored.
fn check_endpoint_override(config: &ClientEndpointConfig) -> Option<Incompatibility> {
    config
        .endpoint_override
        .is_some()
        .then_some(Incompatibility::EndpointOverride)
}

// The global endpoint has no dual-stack variant.
fn check_dualstack(config: &ClientEndpointConfig) -> Option<Incompatibility> {
    config
        .dualstack_enabled
        .then_some(Incompatibility::Dualstack)
}

// No FIPS-compliant multi-region access point endpoint exists.
fn check_fips(config: &ClientEndpointConfig) -> Option<Incompatibility> {
    config.is_fips_region().then_some(Incompatibility::Fips)
}

fn check_accelerate(config: &ClientEndpointConfig) -> Option<Incompatibility> {
    config
        .accelerate_mode_enabled
        .then_some(Incompatibility::Accelerate)
}

// Multi-region access points are host-addressed only.
fn check_path_style(config: &ClientEndpointConfig) -> Option<Incompatibility> {
    config
        .path_style_access_enabled
        .then_some(Incompatibility::PathStyle)
}

// The ARN names infrastructure outside the client's own region context, so
// cross-region ARN use must be opted into.
fn check_arn_region(config: &ClientEndpointConfig) -> Option<Incompatibility> {
    (!config.use_arn_region_enabled).then_some(Incompatibility::ArnRegionDisabled)
}
