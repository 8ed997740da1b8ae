//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Configuration errors
//! - 3xxx: Validation errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Configuration Errors (1xxx) =====

    /// Domain is not a fully-qualified host name.
    pub const INVALID_DOMAIN: Self = Self(1001);

    /// Configuration source could not be read or deserialized.
    pub const CONFIG_SOURCE: Self = Self(1002);

    // ===== Validation Errors (3xxx) =====

    /// Width bounds or explicit width list out of range.
    pub const WIDTH_RANGE: Self = Self(3001);

    /// Width tolerance below the allowed minimum.
    pub const WIDTH_TOLERANCE: Self = Self(3002);

    /// Output quality outside `0..=100`.
    pub const QUALITY_RANGE: Self = Self(3003);

    /// Device pixel ratio list empty or holding a non-positive ratio.
    pub const DEVICE_PIXEL_RATIO: Self = Self(3004);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Configuration,
            3000..=3999 => ErrorCategory::Validation,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Builder configuration errors (1xxx).
    Configuration,
    /// Input validation errors (3xxx).
    Validation,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Validation => write!(f, "validation"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
