//! Error types for endpoint resolution.
//!
//! Resolution has a closed failure taxonomy: the ARN itself is malformed, the
//! client configuration is incompatible with multi-region access points, or
//! the computed host cannot be assembled into a request target. Every error
//! is fatal to the request that produced it and is surfaced to the caller
//! unchanged; nothing here is retried or downgraded to a warning.

use std::fmt;

use arnpoint_arn::InvalidArn;

/// A client configuration setting that conflicts with multi-region access
/// point resolution.
///
/// The variants are listed in the order the resolver checks them; the first
/// conflict found is the one reported. [`Incompatibility::as_str`] returns a
/// stable reason fragment that callers and tests match by substring, so the
/// fragments are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Incompatibility {
    /// A custom endpoint override is configured.
    EndpointOverride,
    /// Dual-stack endpoints are enabled.
    Dualstack,
    /// The client region is a FIPS region.
    Fips,
    /// Transfer acceleration is enabled.
    Accelerate,
    /// Path-style addressing is forced.
    PathStyle,
    /// Cross-region ARN use is disabled.
    ArnRegionDisabled,
}

impl Incompatibility {
    /// Returns the stable reason fragment for this conflict.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndpointOverride => "endpoint override",
            Self::Dualstack => "dualstack",
            Self::Fips => "FIPS",
            Self::Accelerate => "accelerate",
            Self::PathStyle => "path style addressing",
            Self::ArnRegionDisabled => "ARN region",
        }
    }

    /// Returns the full rejection sentence; it always contains
    /// [`Incompatibility::as_str`].
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::EndpointOverride => {
                "a multi-region access point ARN cannot be used with an endpoint override"
            }
            Self::Dualstack => "multi-region access points do not support dualstack endpoints",
            Self::Fips => "multi-region access points do not support FIPS regions",
            Self::Accelerate => "multi-region access points do not support accelerate mode",
            Self::PathStyle => "multi-region access points do not support path style addressing",
            Self::ArnRegionDisabled => {
                "the ARN region setting must be enabled to address resources by ARN"
            }
        }
    }
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while resolving an ARN-addressed request to an endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The bucket field claims to be an ARN but is not a usable one.
    #[error(transparent)]
    MalformedArn(#[from] InvalidArn),

    /// The ARN is well formed but the client configuration conflicts with
    /// multi-region access point resolution.
    #[error("{}", .0.message())]
    UnsupportedConfiguration(Incompatibility),

    /// The resolved host could not be assembled into a request target.
    #[error("resolved endpoint is not a valid request target: {host}")]
    InvalidEndpoint {
        /// The host that failed to form a URI authority.
        host: String,
        /// The underlying URI construction error.
        #[source]
        source: http::Error,
    },
}

/// Convenience result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
