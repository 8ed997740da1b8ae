//! URL builder façade.

use tracing::{debug, trace};

use crate::config::BuilderConfig;
use crate::domain::{FalseParamPolicy, Params, SrcsetOptions, UrlOptions};
use crate::error::Result;
use crate::service::ImgixUrl;
use crate::service::srcset;

/// Builds URLs and srcsets for one imgix source.
///
/// The configuration is fixed once the builder is shared: every URL method
/// takes `&self`, so a builder can be used from many threads at once.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    config: BuilderConfig,
}

impl UrlBuilder {
    /// Create a builder for `domain` with default settings (HTTPS, unsigned,
    /// library parameter included).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ImgixError::InvalidDomain`] if `domain` is not a
    /// fully-qualified host name.
    pub fn new(domain: impl Into<String>) -> Result<Self> {
        Self::from_config(BuilderConfig::new(domain))
    }

    /// Create a builder from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ImgixError::InvalidDomain`] if the configured domain
    /// is not a fully-qualified host name.
    pub fn from_config(config: BuilderConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            domain = %config.domain,
            https = config.use_https,
            signed = config.sign_key.is_some(),
            "URL builder created"
        );

        Ok(Self { config })
    }

    /// Select `https` (default) or `http`.
    #[must_use]
    pub const fn with_https(mut self, use_https: bool) -> Self {
        self.config.use_https = use_https;
        self
    }

    /// Sign every URL with `sign_key`.
    #[must_use]
    pub fn with_sign_key(mut self, sign_key: impl Into<String>) -> Self {
        self.config.sign_key = Some(sign_key.into());
        self
    }

    /// Include or omit the `ixlib` parameter.
    #[must_use]
    pub const fn with_library_param(mut self, include: bool) -> Self {
        self.config.include_library_param = include;
        self
    }

    /// Choose how boolean `false` values are emitted.
    #[must_use]
    pub const fn with_false_params(mut self, policy: FalseParamPolicy) -> Self {
        self.config.false_params = policy;
        self
    }

    /// Builder configuration.
    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Start a URL for `path` whose parameters can be set one at a time.
    #[must_use]
    pub fn url(&self, path: impl Into<String>) -> ImgixUrl<'_> {
        ImgixUrl::new(&self.config, path)
    }

    /// Create a URL for `path` with `params`.
    #[must_use]
    pub fn create_url(&self, path: &str, params: &Params) -> String {
        self.create_url_with(path, params, &UrlOptions::default())
    }

    /// Create a URL for `path` with `params` and per-call options.
    #[must_use]
    pub fn create_url_with(&self, path: &str, params: &Params, options: &UrlOptions) -> String {
        let url = self
            .url(path)
            .with_params(params.clone())
            .with_path_encoding_disabled(options.disable_path_encoding)
            .to_string();

        trace!(%url, "Created URL");
        url
    }

    /// Create a srcset for `path` with default options.
    ///
    /// # Errors
    ///
    /// Never fails with default options; see [`Self::create_srcset_with`].
    pub fn create_srcset(&self, path: &str, params: &Params) -> Result<String> {
        self.create_srcset_with(path, params, &SrcsetOptions::default())
    }

    /// Create a srcset for `path`.
    ///
    /// Width descriptors are used unless `params` pins the width (`w`, or
    /// `h` with `ar`), in which case device pixel ratio descriptors are used.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid width bounds, tolerance,
    /// explicit widths, qualities or device pixel ratios.
    pub fn create_srcset_with(
        &self,
        path: &str,
        params: &Params,
        options: &SrcsetOptions,
    ) -> Result<String> {
        srcset::generate(params, options, self.config.false_params, |candidate| {
            self.create_url(path, candidate)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_invalid_domain() {
        let err = UrlBuilder::new("http://demos.imgix.net").unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::INVALID_DOMAIN);
        assert!(UrlBuilder::new("demos.imgix.net/").is_err());
    }

    #[test]
    fn test_setters_update_config() {
        let builder = UrlBuilder::new("demos.imgix.net")
            .unwrap()
            .with_https(false)
            .with_sign_key("test1234")
            .with_library_param(false)
            .with_false_params(FalseParamPolicy::Omit);

        let config = builder.config();
        assert!(!config.use_https);
        assert_eq!(config.sign_key.as_deref(), Some("test1234"));
        assert!(!config.include_library_param);
        assert_eq!(config.false_params, FalseParamPolicy::Omit);
    }

    #[test]
    fn test_create_url_does_not_mutate_params() {
        let builder = UrlBuilder::new("demos.imgix.net").unwrap();
        let params = Params::from([("w", 100)]);
        let _ = builder.create_url("/bridge.png", &params);
        assert_eq!(params, Params::from([("w", 100)]));
    }

    #[test]
    fn test_builder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UrlBuilder>();
    }
}
