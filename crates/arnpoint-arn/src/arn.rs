//! The `ResourceArn` value type and its parser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ArnResult, InvalidArn};

/// A parsed AWS resource identifier of the form
/// `arn:<partition>:<service>:<region>:<account-id>:<resource-type><sep><resource-name>`
/// where `<sep>` is `:` or `/`.
///
/// Values are immutable once parsed and hold exact substrings of the input;
/// no case-folding or trimming is applied. [`fmt::Display`] renders the
/// canonical colon-separated form (a `/` resource separator parses but is not
/// preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceArn {
    partition: String,
    service: String,
    region: String,
    account_id: String,
    resource_type: String,
    resource_name: String,
}

impl ResourceArn {
    /// Literal prefix every ARN starts with.
    pub const PREFIX: &str = "arn:";

    /// Cheap discriminator between an ARN and a literal bucket name.
    ///
    /// Request-building code calls this before [`ResourceArn::parse`]; a
    /// `false` here means the value is a plain bucket name, not a malformed
    /// ARN.
    ///
    /// # Examples
    /// ```
    /// use arnpoint_arn::ResourceArn;
    ///
    /// assert!(ResourceArn::looks_like_arn("arn:aws:s3:global:123456789012:accesspoint:ap"));
    /// assert!(!ResourceArn::looks_like_arn("my-bucket"));
    /// ```
    #[must_use]
    pub fn looks_like_arn(value: &str) -> bool {
        value.starts_with(Self::PREFIX)
    }

    /// Parse a raw ARN string into its six components.
    ///
    /// The resource field splits on the first `:` or `/` into a resource type
    /// and a resource name; anything after that separator (including further
    /// colons) belongs to the name.
    ///
    /// # Errors
    /// Returns [`InvalidArn`] when the prefix is missing, fewer than six
    /// components are present, the account id is empty, or the resource name
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// use arnpoint_arn::ResourceArn;
    ///
    /// let arn = ResourceArn::parse("arn:aws:s3:global:123456789012:accesspoint:myaccesspoint")?;
    /// assert_eq!(arn.account_id(), "123456789012");
    /// assert_eq!(arn.resource_name(), "myaccesspoint");
    /// assert!(arn.is_multi_region_access_point());
    /// # Ok::<(), arnpoint_arn::InvalidArn>(())
    /// ```
    pub fn parse(raw: &str) -> ArnResult<Self> {
        if !Self::looks_like_arn(raw) {
            return Err(InvalidArn::MissingPrefix(raw.to_owned()));
        }

        let mut fields = raw.splitn(6, ':');
        fields.next(); // the `arn` literal, guaranteed by the prefix check

        let (Some(partition), Some(service), Some(region), Some(account_id), Some(resource)) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) else {
            return Err(InvalidArn::MissingComponents(raw.to_owned()));
        };

        if account_id.is_empty() {
            return Err(InvalidArn::EmptyAccountId(raw.to_owned()));
        }

        // Both separators are single-byte ASCII, so the index arithmetic is
        // safe on any UTF-8 input.
        let (resource_type, resource_name) = match resource.find([':', '/']) {
            Some(sep) => (&resource[..sep], &resource[sep + 1..]),
            None => (resource, ""),
        };

        if resource_name.is_empty() {
            return Err(InvalidArn::EmptyResourceName(raw.to_owned()));
        }

        Ok(Self {
            partition: partition.to_owned(),
            service: service.to_owned(),
            region: region.to_owned(),
            account_id: account_id.to_owned(),
            resource_type: resource_type.to_owned(),
            resource_name: resource_name.to_owned(),
        })
    }

    /// Partition the resource lives in, e.g. `aws` or `aws-cn`.
    #[must_use]
    pub fn partition(&self) -> &str {
        &self.partition
    }

    /// Service namespace, e.g. `s3`.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region token. Empty (or the literal `global`) for region-agnostic
    /// resources.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Twelve-digit-style account id, treated opaquely.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Resource type, e.g. `accesspoint`.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Resource name; never empty.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// True when this ARN names an S3 access point, single- or multi-region.
    #[must_use]
    pub fn is_access_point(&self) -> bool {
        self.service == "s3" && self.resource_type == "accesspoint"
    }

    /// True when this ARN names a multi-region access point: an S3 access
    /// point whose region field is the global token (empty or `global`).
    #[must_use]
    pub fn is_multi_region_access_point(&self) -> bool {
        self.is_access_point() && matches!(self.region.as_str(), "" | "global")
    }
}

impl fmt::Display for ResourceArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}:{}",
            self.partition,
            self.service,
            self.region,
            self.account_id,
            self.resource_type,
            self.resource_name
        )
    }
}

impl FromStr for ResourceArn {
    type Err = InvalidArn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
