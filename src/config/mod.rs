//! Configuration management module.
//!
//! Supports loading builder configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `IMGIX__<KEY>` pattern

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::domain::{FalseParamPolicy, is_valid_domain};
use crate::error::{ImgixError, Result};

/// URL builder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Fully-qualified imgix source domain, e.g. `demos.imgix.net`.
    pub domain: String,

    /// Generate `https` URLs.
    #[serde(default = "default_use_https")]
    pub use_https: bool,

    /// Secret used to sign generated URLs.
    #[serde(default)]
    pub sign_key: Option<String>,

    /// Append the `ixlib` library identifier to every URL.
    #[serde(default = "default_include_library_param")]
    pub include_library_param: bool,

    /// Treatment of boolean `false` parameter values.
    #[serde(default)]
    pub false_params: FalseParamPolicy,
}

const fn default_use_https() -> bool {
    true
}

const fn default_include_library_param() -> bool {
    true
}

impl BuilderConfig {
    /// Create a configuration with default flags for `domain`.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            use_https: default_use_https(),
            sign_key: None,
            include_library_param: default_include_library_param(),
            false_params: FalseParamPolicy::default(),
        }
    }

    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{IMGIX_PROFILE}.toml` (if `IMGIX_PROFILE` is set)
    /// 3. Environment variables with `IMGIX__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the domain is invalid.
    pub fn load() -> Result<Self> {
        let profile = std::env::var("IMGIX_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // IMGIX__SIGN_KEY=secret -> sign_key = "secret"
            .add_source(environment())
            .build()?;

        Self::from_source(config)
    }

    /// Load configuration from a single file, with environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the domain is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::from_source(config)
    }

    fn from_source(config: Config) -> Result<Self> {
        let builder_config: Self = config.try_deserialize()?;
        builder_config.validate()?;
        Ok(builder_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ImgixError::InvalidDomain`] if the domain is not a
    /// fully-qualified host name.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_domain(&self.domain) {
            return Err(ImgixError::InvalidDomain(self.domain.clone()));
        }
        Ok(())
    }

    /// URL scheme selected by `use_https`.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        if self.use_https { "https" } else { "http" }
    }
}

fn environment() -> Environment {
    Environment::with_prefix("IMGIX")
        .separator("__")
        .try_parsing(true)
}
