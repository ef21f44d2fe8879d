//! Error types for ARN parsing.

/// Reasons a string that claims to be an ARN fails to parse.
///
/// Each variant carries the offending input so the failure is actionable
/// without re-parsing. Parse failures are fatal to the request that produced
/// them and are surfaced to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArn {
    /// The string does not begin with the `arn:` prefix.
    #[error("malformed ARN (must begin with `arn:`): {0}")]
    MissingPrefix(String),

    /// Fewer than the six required colon-delimited components are present.
    #[error("malformed ARN (expected arn:partition:service:region:account-id:resource): {0}")]
    MissingComponents(String),

    /// The account id component is empty.
    #[error("malformed ARN (account id must not be empty): {0}")]
    EmptyAccountId(String),

    /// The resource name component is empty.
    #[error("malformed ARN (resource name must not be empty): {0}")]
    EmptyResourceName(String),

    /// The partition component does not name a known partition.
    #[error("malformed ARN (unknown partition `{partition}`): {arn}")]
    UnknownPartition {
        /// The unrecognized partition token.
        partition: String,
        /// The full ARN the token came from.
        arn: String,
    },
}

/// Convenience result type for ARN parsing.
pub type ArnResult<T> = Result<T, InvalidArn>;
