//! Per-call option types for URL and srcset generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::service::widths::{DEFAULT_TOLERANCE, MAX_WIDTH, MIN_WIDTH};

/// Options for a single URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Use the path exactly as given; the caller asserts it is already encoded.
    pub disable_path_encoding: bool,
}

/// Options for srcset generation.
///
/// `start`, `stop` and `tol` drive the geometric width list unless explicit
/// `widths` are given. The DPR fields only apply when the parameters pin a
/// width (`w`, or `h` together with `ar`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SrcsetOptions {
    /// Smallest generated width.
    pub start: u32,

    /// Largest generated width, always the last entry.
    pub stop: u32,

    /// Tolerated width difference between neighbours, as a fraction.
    pub tol: f64,

    /// Explicit widths that replace the generated list.
    pub widths: Option<Vec<u32>>,

    /// Skip the per-ratio `q` parameter in DPR mode.
    pub disable_variable_quality: bool,

    /// Device pixel ratios that replace the default `1..=5`.
    pub device_pixel_ratios: Option<Vec<f64>>,

    /// Quality overrides keyed by device pixel ratio.
    pub variable_qualities: BTreeMap<u32, u32>,
}

impl Default for SrcsetOptions {
    fn default() -> Self {
        Self {
            start: MIN_WIDTH,
            stop: MAX_WIDTH,
            tol: DEFAULT_TOLERANCE,
            widths: None,
            disable_variable_quality: false,
            device_pixel_ratios: None,
            variable_qualities: BTreeMap::new(),
        }
    }
}

impl SrcsetOptions {
    /// Set the width bounds.
    #[must_use]
    pub const fn with_range(mut self, start: u32, stop: u32) -> Self {
        self.start = start;
        self.stop = stop;
        self
    }

    /// Set the width tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Use an explicit width list.
    #[must_use]
    pub fn with_widths(mut self, widths: impl Into<Vec<u32>>) -> Self {
        self.widths = Some(widths.into());
        self
    }

    /// Use custom device pixel ratios.
    #[must_use]
    pub fn with_device_pixel_ratios(mut self, ratios: impl Into<Vec<f64>>) -> Self {
        self.device_pixel_ratios = Some(ratios.into());
        self
    }

    /// Override qualities for some ratios.
    #[must_use]
    pub fn with_variable_qualities(
        mut self,
        qualities: impl IntoIterator<Item = (u32, u32)>,
    ) -> Self {
        self.variable_qualities.extend(qualities);
        self
    }

    /// Disable the per-ratio quality parameter.
    #[must_use]
    pub const fn without_variable_quality(mut self) -> Self {
        self.disable_variable_quality = true;
        self
    }
}
