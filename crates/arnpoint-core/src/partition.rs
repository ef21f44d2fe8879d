//! Partition metadata.
//!
//! A partition is the top-level grouping of regions sharing a DNS suffix and
//! account namespace. Endpoint construction needs nothing else from the
//! partition, so the table carries only the suffix.

/// Look up the DNS suffix for an ARN partition.
///
/// Returns `None` for unrecognized partitions; the resolver treats that as a
/// malformed ARN rather than guessing a suffix.
///
/// # Examples
/// ```
/// use arnpoint_core::partition::dns_suffix;
///
/// assert_eq!(dns_suffix("aws"), Some("amazonaws.com"));
/// assert_eq!(dns_suffix("aws-cn"), Some("amazonaws.com.cn"));
/// assert_eq!(dns_suffix("aws-moon"), None);
/// ```
#[must_use]
pub fn dns_suffix(partition: &str) -> Option<&'static str> {
    match partition {
        "aws" => Some("amazonaws.com"),
        "aws-cn" => Some("amazonaws.com.cn"),
        "aws-us-gov" => Some("amazonaws.com"),
        "aws-iso" => Some("c2s.ic.gov"),
        "aws-iso-b" => Some("sc2s.sgov.gov"),
        _ => None,
    }
}
