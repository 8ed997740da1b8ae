//! # imgix-url
//!
//! Builds URLs for the imgix image CDN:
//!
//! - **Canonical URLs**: percent-encoded paths and a sorted, reproducible query string
//! - **Signing**: optional `s` parameter derived from the source's sign key
//! - **Srcsets**: width-descriptor or pixel-density-descriptor candidate lists
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            UrlBuilder                             │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌─────────────┐   ┌─────────────┐              │
//! │  │   Srcset   │ → │  ImgixUrl   │ → │ path/query/ │              │
//! │  │ generator  │   │             │   │  signature  │              │
//! │  └────────────┘   └─────────────┘   └─────────────┘              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use imgix_url::{Params, UrlBuilder};
//!
//! let builder = UrlBuilder::new("demos.imgix.net")?.with_library_param(false);
//! let url = builder.create_url("/bridge.png", &Params::from([("w", 100), ("h", 100)]));
//! assert_eq!(url, "https://demos.imgix.net/bridge.png?h=100&w=100");
//!
//! let srcset = builder.create_srcset("/bridge.png", &Params::from([("w", 100)]))?;
//! assert_eq!(srcset.lines().count(), 5);
//! # Ok::<(), imgix_url::ImgixError>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use crate::builder::UrlBuilder;
pub use crate::config::BuilderConfig;
pub use crate::domain::{FalseParamPolicy, ParamValue, Params, SrcsetOptions, UrlOptions};
pub use crate::error::{ErrorCode, ImgixError, Result};
pub use crate::service::{ImgixUrl, target_widths};
