//! Service layer module.
//!
//! Contains the encoding, signing and srcset logic behind the builder.

pub mod path;
pub mod query;
pub mod signature;
pub mod srcset;
pub mod url;
pub mod widths;

pub use query::{LIBRARY_PARAM, LIBRARY_TAG};
pub use signature::SIGNATURE_PARAM;
pub use srcset::{DEFAULT_DEVICE_PIXEL_RATIOS, DEFAULT_DPR_QUALITIES, QualityTable, SrcsetMode};
pub use self::url::ImgixUrl;
pub use widths::{DEFAULT_TARGET_WIDTHS, MAX_WIDTH, MIN_WIDTH, target_widths};
