//! Domain models for imgix URL building.
//!
//! This module contains the parameter and option types passed into the
//! builder, and the host name rules every builder domain must satisfy.

pub mod host;
pub mod options;
pub mod params;

pub use host::is_valid_domain;
pub use options::{SrcsetOptions, UrlOptions};
pub use params::{FalseParamPolicy, ParamValue, Params};
