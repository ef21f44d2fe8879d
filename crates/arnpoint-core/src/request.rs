//! Outbound request descriptor and the ARN addressing rewrite.
//!
//! This is the seam between the pure resolver and the request pipeline: the
//! request-building layer hands over a fully-formed request whose bucket
//! field may be an ARN, and this module either leaves it alone, rewrites its
//! URI to the resolved endpoint, or raises the rejection before transport.

use arnpoint_arn::ResourceArn;
use http::{HeaderMap, Method, Uri};
use tracing::debug;

use crate::config::ClientEndpointConfig;
use crate::error::{ResolveError, ResolveResult};
use crate::resolver::{self, ResolvedEndpoint};

/// A fully-formed outbound request, before transport.
///
/// Only `uri` is ever mutated here, and only when the bucket field resolves
/// to a multi-region access point. Everything else is carried for the
/// downstream transport and signing layers.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// HTTP method of the operation.
    pub method: Method,
    /// Headers accumulated so far.
    pub headers: HeaderMap,
    /// Target URI; the host/URI slot this module may rewrite.
    pub uri: Uri,
    /// Raw bucket field as supplied by the caller: a bucket name or an ARN.
    pub bucket: String,
}

/// Outcome of [`OutboundRequest::apply_arn_addressing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArnAddressing {
    /// The bucket field is a literal bucket name; the request was left
    /// untouched.
    PlainBucket,
    /// The bucket field was a multi-region access point ARN; the request URI
    /// now points at the resolved endpoint.
    Applied(ResolvedEndpoint),
    /// The bucket field is a well-formed ARN of a shape this resolver does
    /// not handle (single-region access point, another service); the request
    /// was left untouched for another resolution path.
    Deferred(ResourceArn),
}

impl OutboundRequest {
    /// Create a request descriptor with empty headers.
    #[must_use]
    pub fn new(method: Method, uri: Uri, bucket: impl Into<String>) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            uri,
            bucket: bucket.into(),
        }
    }

    /// Apply ARN addressing to this request.
    ///
    /// Checks the bucket field with a cheap prefix test, parses it as an ARN
    /// when it is one, and for multi-region access point ARNs resolves the
    /// endpoint against `config` and rewrites `self.uri` in place. The
    /// rewritten URI keeps the original path and query; the scheme is always
    /// `https`, whatever the original request carried.
    ///
    /// Rewrites, deferrals, and rejections are logged at debug level with
    /// the bucket field; rejections also carry the reason.
    ///
    /// # Errors
    /// Propagates [`ResolveError`] unchanged: malformed ARNs, configuration
    /// conflicts, and hosts that cannot form a request target. On error the
    /// request is untouched and must not be sent.
    pub fn apply_arn_addressing(
        &mut self,
        config: &ClientEndpointConfig,
    ) -> ResolveResult<ArnAddressing> {
        match self.resolve_and_rewrite(config) {
            Ok(outcome) => Ok(outcome),
            Err(reason) => {
                debug!(bucket = %self.bucket, reason = %reason, "rejected ARN-addressed request");
                Err(reason)
            }
        }
    }

    fn resolve_and_rewrite(
        &mut self,
        config: &ClientEndpointConfig,
    ) -> ResolveResult<ArnAddressing> {
        if !ResourceArn::looks_like_arn(&self.bucket) {
            return Ok(ArnAddressing::PlainBucket);
        }

        let arn = ResourceArn::parse(&self.bucket)?;
        if !arn.is_multi_region_access_point() {
            debug!(bucket = %self.bucket, "ARN addressing deferred to another resolution path");
            return Ok(ArnAddressing::Deferred(arn));
        }

        let endpoint = resolver::resolve(&arn, config)?;

        let path_and_query = self
            .uri
            .path_and_query()
            .map_or("/", http::uri::PathAndQuery::as_str);
        let rewritten = Uri::builder()
            .scheme("https")
            .authority(endpoint.host.as_str())
            .path_and_query(path_and_query)
            .build()
            .map_err(|source| ResolveError::InvalidEndpoint {
                host: endpoint.host.clone(),
                source,
            })?;
        self.uri = rewritten;

        debug!(
            bucket = %self.bucket,
            host = %endpoint.host,
            "rewrote request endpoint for multi-region access point"
        );

        Ok(ArnAddressing::Applied(endpoint))
    }
}
