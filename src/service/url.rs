//! A single imgix URL under construction.

use std::fmt;

use crate::config::BuilderConfig;
use crate::domain::{ParamValue, Params};
use crate::service::path::{raw_path, sanitize_path};
use crate::service::query::build_query;
use crate::service::signature::{append_signature, sign};

/// Path and parameters for one URL, bound to a builder configuration.
///
/// Rendering (via [`fmt::Display`]) encodes the path, builds the canonical
/// query and signs it when the configuration carries a sign key.
#[derive(Debug, Clone)]
pub struct ImgixUrl<'a> {
    config: &'a BuilderConfig,
    path: String,
    params: Params,
    disable_path_encoding: bool,
}

impl<'a> ImgixUrl<'a> {
    /// Create a URL for `path` with no parameters.
    #[must_use]
    pub fn new(config: &'a BuilderConfig, path: impl Into<String>) -> Self {
        Self {
            config,
            path: path.into(),
            params: Params::new(),
            disable_path_encoding: false,
        }
    }

    /// Replace all parameters.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Use the path verbatim instead of encoding it.
    #[must_use]
    pub const fn with_path_encoding_disabled(mut self, disabled: bool) -> Self {
        self.disable_path_encoding = disabled;
        self
    }

    /// Set one parameter.
    pub fn set_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> &mut Self {
        self.params.insert(key, value);
        self
    }

    /// Remove one parameter.
    pub fn delete_parameter(&mut self, key: &str) -> &mut Self {
        self.params.remove(key);
        self
    }

    /// Current parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// The encoded path, always starting with `/`.
    #[must_use]
    pub fn encoded_path(&self) -> String {
        if self.disable_path_encoding {
            raw_path(&self.path)
        } else {
            sanitize_path(&self.path)
        }
    }

    /// The query string without the leading `?`, including the signature.
    #[must_use]
    pub fn query(&self) -> String {
        let mut query = build_query(
            &self.params,
            self.config.false_params,
            self.config.include_library_param,
        );

        if let Some(sign_key) = &self.config.sign_key {
            let signature = sign(sign_key, &self.encoded_path(), &query);
            append_signature(&mut query, &signature);
        }

        query
    }
}

impl fmt::Display for ImgixUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}{}",
            self.config.scheme(),
            self.config.domain,
            self.encoded_path()
        )?;

        let query = self.query();
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BuilderConfig {
        BuilderConfig {
            include_library_param: false,
            ..BuilderConfig::new("my-social-network.imgix.net")
        }
    }

    #[test]
    fn test_set_parameter() {
        let config = config();
        let mut url = ImgixUrl::new(&config, "/users/1.png");

        url.set_parameter("w", 400);
        assert_eq!(
            url.to_string(),
            "https://my-social-network.imgix.net/users/1.png?w=400"
        );

        url.set_parameter("h", 300);
        assert_eq!(
            url.to_string(),
            "https://my-social-network.imgix.net/users/1.png?h=300&w=400"
        );
    }

    #[test]
    fn test_set_parameter_with_initial_params() {
        let config = config();
        let mut url =
            ImgixUrl::new(&config, "/users/1.png").with_params(Params::from([("or", 0)]));
        url.set_parameter("w", 400).set_parameter("h", 300);
        assert_eq!(
            url.to_string(),
            "https://my-social-network.imgix.net/users/1.png?h=300&or=0&w=400"
        );
    }

    #[test]
    fn test_set_false_parameter() {
        let config = config();
        let mut url = ImgixUrl::new(&config, "/users/1.png")
            .with_params(Params::from([("h", 300), ("w", 400)]));
        url.set_parameter("w", false);
        assert_eq!(
            url.to_string(),
            "https://my-social-network.imgix.net/users/1.png?h=300&w=False"
        );
    }

    #[test]
    fn test_delete_parameters() {
        let config = config();
        let mut url = ImgixUrl::new(&config, "/users/1.png")
            .with_params(Params::from([("h", 300), ("w", 400)]));

        url.delete_parameter("w");
        assert_eq!(
            url.to_string(),
            "https://my-social-network.imgix.net/users/1.png?h=300"
        );

        url.delete_parameter("h");
        assert_eq!(
            url.to_string(),
            "https://my-social-network.imgix.net/users/1.png"
        );
    }

    #[test]
    fn test_signed_proxy_path_with_special_chars() {
        let config = BuilderConfig {
            sign_key: Some("FOO123bar".to_string()),
            ..config()
        };
        let url = ImgixUrl::new(&config, "http://avatars.com/でのパ.png");
        assert_eq!(
            url.to_string(),
            "https://my-social-network.imgix.net/http%3A%2F%2Favatars.com%2F\
             %E3%81%A7%E3%81%AE%E3%83%91.png?s=8e04a5dd9a659a6a540d7c817d3df1d3"
        );
    }

    #[test]
    fn test_disabled_path_encoding() {
        let config = config();
        let url = ImgixUrl::new(&config, "pre%20encoded.png").with_path_encoding_disabled(true);
        assert_eq!(url.encoded_path(), "/pre%20encoded.png");
        assert_eq!(
            url.to_string(),
            "https://my-social-network.imgix.net/pre%20encoded.png"
        );
    }
}
