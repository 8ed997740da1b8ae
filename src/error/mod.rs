//! Error handling module.
//!
//! Every fallible operation returns [`ImgixError`]. Each variant maps to a
//! stable [`ErrorCode`] so callers can tell malformed width bounds apart from
//! a malformed tolerance without matching on messages.

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode};

/// Library-level error type.
#[derive(Debug, thiserror::Error)]
pub enum ImgixError {
    /// Domain is not a fully-qualified host name.
    #[error(
        "Invalid domain {0:?}: domains must be passed in as fully-qualified domain names \
         and should not include a protocol or any path element, i.e. \"example.imgix.net\""
    )]
    InvalidDomain(String),

    /// Configuration source failed to load.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Invalid width bounds or explicit width list.
    #[error("Invalid width range: {0}")]
    WidthRange(String),

    /// Width tolerance below the minimum.
    #[error("Invalid width tolerance: {0}")]
    WidthTolerance(String),

    /// Output quality outside `0..=100`.
    #[error("Invalid quality: {0}")]
    QualityRange(String),

    /// Invalid device pixel ratio list.
    #[error("Invalid device pixel ratio: {0}")]
    DevicePixelRatio(String),
}

impl ImgixError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidDomain(_) => ErrorCode::INVALID_DOMAIN,
            Self::Config(_) => ErrorCode::CONFIG_SOURCE,
            Self::WidthRange(_) => ErrorCode::WIDTH_RANGE,
            Self::WidthTolerance(_) => ErrorCode::WIDTH_TOLERANCE,
            Self::QualityRange(_) => ErrorCode::QUALITY_RANGE,
            Self::DevicePixelRatio(_) => ErrorCode::DEVICE_PIXEL_RATIO,
        }
    }

    /// Get the error category for this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.error_code().category()
    }
}

/// Result type alias using `ImgixError`.
pub type Result<T> = std::result::Result<T, ImgixError>;
