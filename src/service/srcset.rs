//! Srcset generation.
//!
//! When the parameters leave the width free, candidates vary the width and
//! carry `w` descriptors. When the width is pinned (explicit `w`, or `h`
//! together with `ar`), candidates vary the device pixel ratio instead and
//! carry `x` descriptors, each with a lower output quality as density rises.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{FalseParamPolicy, Params, SrcsetOptions};
use crate::error::{ImgixError, Result};
use crate::service::widths::{target_widths, validate_widths};

/// Device pixel ratios used when none are given.
pub const DEFAULT_DEVICE_PIXEL_RATIOS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Output quality per device pixel ratio.
pub const DEFAULT_DPR_QUALITIES: [(u32, u32); 5] = [(1, 75), (2, 50), (3, 35), (4, 23), (5, 20)];

/// Highest accepted output quality.
pub const MAX_QUALITY: u32 = 100;

/// Separator between srcset candidates.
const CANDIDATE_SEPARATOR: &str = ",\n";

/// Descriptor kind used by a srcset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrcsetMode {
    /// Candidates differ in width (`480w`).
    Width,
    /// Candidates differ in pixel density (`2x`).
    DevicePixelRatio,
}

impl SrcsetMode {
    /// Pick the mode for a parameter set.
    ///
    /// Only parameters that `policy` emits count, so an omitted `w=false`
    /// leaves the width free.
    #[must_use]
    pub fn select(params: &Params, policy: FalseParamPolicy) -> Self {
        let emitted = |key: &str| params.get(key).is_some_and(|value| policy.emits(value));
        let pinned_width = emitted("w") || (emitted("h") && emitted("ar"));

        if pinned_width {
            Self::DevicePixelRatio
        } else {
            Self::Width
        }
    }
}

/// Quality lookup for DPR candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityTable(BTreeMap<u32, u32>);

impl QualityTable {
    /// Default qualities with `overrides` applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`ImgixError::QualityRange`] if an override exceeds 100.
    pub fn with_overrides(overrides: &BTreeMap<u32, u32>) -> Result<Self> {
        if let Some((ratio, quality)) = overrides.iter().find(|(_, q)| **q > MAX_QUALITY) {
            return Err(ImgixError::QualityRange(format!(
                "quality for {ratio}x must be between 0 and {MAX_QUALITY}, got {quality}"
            )));
        }

        let mut table: BTreeMap<u32, u32> = DEFAULT_DPR_QUALITIES.into_iter().collect();
        table.extend(overrides);
        Ok(Self(table))
    }

    /// Quality for `ratio`; fractional ratios have no entry.
    #[must_use]
    #[allow(
        clippy::float_cmp,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn lookup(&self, ratio: f64) -> Option<u32> {
        if ratio.fract() != 0.0 || ratio < 0.0 || ratio > f64::from(u32::MAX) {
            return None;
        }
        self.0.get(&(ratio as u32)).copied()
    }
}

impl Default for QualityTable {
    fn default() -> Self {
        Self(DEFAULT_DPR_QUALITIES.into_iter().collect())
    }
}

/// Validate a device pixel ratio list.
///
/// # Errors
///
/// Returns [`ImgixError::DevicePixelRatio`] if the list is empty or holds a
/// ratio that is not a finite positive number.
pub fn validate_device_pixel_ratios(ratios: &[f64]) -> Result<()> {
    if ratios.is_empty() {
        return Err(ImgixError::DevicePixelRatio(
            "device pixel ratios cannot be empty".to_string(),
        ));
    }
    if let Some(ratio) = ratios.iter().find(|r| !r.is_finite() || **r <= 0.0) {
        return Err(ImgixError::DevicePixelRatio(format!(
            "device pixel ratios must be positive, got {ratio}"
        )));
    }
    Ok(())
}

/// Generate a srcset, rendering each candidate's parameters with `render`.
///
/// `params` is never modified; each candidate renders from its own copy.
///
/// # Errors
///
/// Returns a validation error if the options hold invalid widths, tolerance,
/// qualities or ratios.
pub fn generate<F>(
    params: &Params,
    options: &SrcsetOptions,
    policy: FalseParamPolicy,
    render: F,
) -> Result<String>
where
    F: Fn(&Params) -> String,
{
    let mode = SrcsetMode::select(params, policy);

    let candidates = match mode {
        SrcsetMode::Width => width_candidates(params, options, &render)?,
        SrcsetMode::DevicePixelRatio => dpr_candidates(params, options, &render)?,
    };

    debug!(?mode, candidates = candidates.len(), "Generated srcset");
    Ok(candidates.join(CANDIDATE_SEPARATOR))
}

fn width_candidates<F>(params: &Params, options: &SrcsetOptions, render: &F) -> Result<Vec<String>>
where
    F: Fn(&Params) -> String,
{
    let widths = match &options.widths {
        Some(widths) => {
            validate_widths(widths)?;
            widths.clone()
        }
        None => target_widths(options.start, options.stop, options.tol)?,
    };

    Ok(widths
        .into_iter()
        .map(|width| {
            let candidate = params.clone().with("w", width);
            format!("{} {width}w", render(&candidate))
        })
        .collect())
}

fn dpr_candidates<F>(params: &Params, options: &SrcsetOptions, render: &F) -> Result<Vec<String>>
where
    F: Fn(&Params) -> String,
{
    let ratios = options
        .device_pixel_ratios
        .as_deref()
        .unwrap_or(&DEFAULT_DEVICE_PIXEL_RATIOS);
    validate_device_pixel_ratios(ratios)?;

    let qualities = QualityTable::with_overrides(&options.variable_qualities)?;
    // An explicit `q` travels with the cloned params and wins over the table.
    let assign_quality = !options.disable_variable_quality && !params.contains_key("q");

    Ok(ratios
        .iter()
        .map(|&ratio| {
            let mut candidate = params.clone().with("dpr", ratio);
            if assign_quality && let Some(quality) = qualities.lookup(ratio) {
                candidate.insert("q", quality);
            }
            format!("{} {ratio}x", render(&candidate))
        })
        .collect())
}
