//! Client endpoint configuration.
//!
//! Provides [`ClientEndpointConfig`], the read-only snapshot of the client
//! settings that endpoint resolution consumes. A snapshot is assembled once
//! per request by the configuration layer and never mutated by the resolver.
//!
//! Region-name knowledge lives here: whether the configured region is a FIPS
//! region is derived from its name in this module and exposed to the resolver
//! as a plain boolean, so the resolver never pattern-matches region names.

use http::Uri;
use typed_builder::TypedBuilder;

/// Effective client configuration for one outbound request.
///
/// All fields default to the plain, non-feature-flagged client: region
/// `us-east-1`, every flag off, no endpoint override. Configuration can also
/// be loaded from environment variables via
/// [`ClientEndpointConfig::from_env`].
///
/// # Examples
///
/// ```
/// use arnpoint_core::config::ClientEndpointConfig;
///
/// let config = ClientEndpointConfig::default();
/// assert_eq!(config.client_region, "us-east-1");
/// assert!(!config.use_arn_region_enabled);
/// assert!(!config.is_fips_region());
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct ClientEndpointConfig {
    /// Region the client is configured for.
    #[builder(default = String::from("us-east-1"))]
    pub client_region: String,

    /// Whether resolving ARNs outside the client's own region context is
    /// permitted.
    #[builder(default = false)]
    pub use_arn_region_enabled: bool,

    /// Whether dual-stack (IPv4/IPv6) endpoints are enabled.
    #[builder(default = false)]
    pub dualstack_enabled: bool,

    /// Whether transfer acceleration is enabled.
    #[builder(default = false)]
    pub accelerate_mode_enabled: bool,

    /// Whether path-style addressing is forced.
    #[builder(default = false)]
    pub path_style_access_enabled: bool,

    /// Custom endpoint the client routes every request to, if any.
    #[builder(default)]
    pub endpoint_override: Option<Uri>,
}

impl Default for ClientEndpointConfig {
    fn default() -> Self {
        Self {
            client_region: String::from("us-east-1"),
            use_arn_region_enabled: false,
            dualstack_enabled: false,
            accelerate_mode_enabled: false,
            path_style_access_enabled: false,
            endpoint_override: None,
        }
    }
}

impl ClientEndpointConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` | `us-east-1` |
    /// | `AWS_S3_USE_ARN_REGION` | `false` |
    /// | `AWS_USE_DUALSTACK_ENDPOINT` | `false` |
    /// | `AWS_S3_FORCE_PATH_STYLE` | `false` |
    /// | `AWS_ENDPOINT_URL` | unset |
    ///
    /// Transfer acceleration has no environment-variable convention and is
    /// builder-only. An `AWS_ENDPOINT_URL` value that does not parse as a URI
    /// is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use arnpoint_core::config::ClientEndpointConfig;
    ///
    /// let config = ClientEndpointConfig::from_env();
    /// assert!(!config.client_region.is_empty());
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AWS_REGION") {
            config.client_region = v;
        }
        if let Ok(v) = std::env::var("AWS_S3_USE_ARN_REGION") {
            config.use_arn_region_enabled = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("AWS_USE_DUALSTACK_ENDPOINT") {
            config.dualstack_enabled = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("AWS_S3_FORCE_PATH_STYLE") {
            config.path_style_access_enabled = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("AWS_ENDPOINT_URL") {
            if let Ok(uri) = v.parse::<Uri>() {
                config.endpoint_override = Some(uri);
            }
        }

        config
    }

    /// Whether the configured region is a FIPS region, derived from its name.
    #[must_use]
    pub fn is_fips_region(&self) -> bool {
        is_fips_region_name(&self.client_region)
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// FIPS pseudo-regions carry the marker as a prefix (`fips-us-east-1`) or a
/// suffix (`us-east-1-fips`).
fn is_fips_region_name(region: &str) -> bool {
    region.starts_with("fips-") || region.ends_with("-fips")
}
