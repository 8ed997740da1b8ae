//! Target width generation for width-descriptor srcsets.
//!
//! Widths grow geometrically from `start` by a factor of `1 + 2 * tol`, are
//! rounded to whole pixels, and always end exactly at `stop`.

use crate::error::{ImgixError, Result};

/// Default smallest width.
pub const MIN_WIDTH: u32 = 100;

/// Largest width the CDN renders.
pub const MAX_WIDTH: u32 = 8192;

/// Default tolerance (8%).
pub const DEFAULT_TOLERANCE: f64 = 0.08;

/// Smallest accepted tolerance (1%).
pub const MIN_TOLERANCE: f64 = 0.01;

/// Output of [`target_widths`] for the default bounds and tolerance.
pub const DEFAULT_TARGET_WIDTHS: [u32; 31] = [
    100, 116, 135, 156, 181, 210, 244, 283, 328, 380, 441, 512, 594, 689, 799, 927, 1075, 1247,
    1446, 1678, 1946, 2257, 2619, 3038, 3524, 4087, 4741, 5500, 6380, 7401, 8192,
];

/// Compute the target width list for `start..=stop` at tolerance `tol`.
///
/// # Errors
///
/// Returns [`ImgixError::WidthRange`] unless `0 < start <= stop <= 8192`, and
/// [`ImgixError::WidthTolerance`] if `tol` is below 1%.
#[allow(clippy::float_cmp)]
pub fn target_widths(start: u32, stop: u32, tol: f64) -> Result<Vec<u32>> {
    validate_range(start, stop)?;
    validate_tolerance(tol)?;

    if start == MIN_WIDTH && stop == MAX_WIDTH && tol == DEFAULT_TOLERANCE {
        return Ok(DEFAULT_TARGET_WIDTHS.to_vec());
    }

    Ok(compute_widths(start, stop, tol))
}

/// Geometric growth without validation or the constant fast path.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn compute_widths(start: u32, stop: u32, tol: f64) -> Vec<u32> {
    if start == stop {
        return vec![start];
    }

    let growth = 1.0 + tol * 2.0;
    let upper = f64::from(stop.min(MAX_WIDTH));
    let mut widths: Vec<u32> = Vec::new();
    let mut width = f64::from(start);

    while width < upper {
        let rounded = width.round_ties_even() as u32;
        // Small starts can round two steps onto the same pixel.
        if widths.last() != Some(&rounded) {
            widths.push(rounded);
        }
        width *= growth;
    }

    if widths.last().is_none_or(|&last| last < stop) {
        widths.push(stop);
    }

    widths
}

/// Validate the smallest width.
///
/// # Errors
///
/// Returns [`ImgixError::WidthRange`] if `start` is zero.
pub fn validate_min_width(start: u32) -> Result<()> {
    if start == 0 {
        return Err(ImgixError::WidthRange(
            "start must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Validate the largest width.
///
/// # Errors
///
/// Returns [`ImgixError::WidthRange`] if `stop` is zero or above 8192.
pub fn validate_max_width(stop: u32) -> Result<()> {
    if stop == 0 || stop > MAX_WIDTH {
        return Err(ImgixError::WidthRange(format!(
            "stop must be between 1 and {MAX_WIDTH}, got {stop}"
        )));
    }
    Ok(())
}

/// Validate a `start..=stop` pair.
///
/// # Errors
///
/// Returns [`ImgixError::WidthRange`] if either bound is invalid or `start > stop`.
pub fn validate_range(start: u32, stop: u32) -> Result<()> {
    validate_min_width(start)?;
    validate_max_width(stop)?;

    if start > stop {
        return Err(ImgixError::WidthRange(format!(
            "start ({start}) cannot be greater than stop ({stop})"
        )));
    }
    Ok(())
}

/// Validate the width tolerance.
///
/// # Errors
///
/// Returns [`ImgixError::WidthTolerance`] if `tol` is below 1% or NaN.
pub fn validate_tolerance(tol: f64) -> Result<()> {
    if tol.is_nan() || tol < MIN_TOLERANCE {
        return Err(ImgixError::WidthTolerance(format!(
            "tol must be at least {MIN_TOLERANCE}, got {tol}"
        )));
    }
    Ok(())
}

/// Validate an explicit width list.
///
/// # Errors
///
/// Returns [`ImgixError::WidthRange`] if the list is empty, holds a width
/// outside `1..=8192`, or is not strictly increasing.
pub fn validate_widths(widths: &[u32]) -> Result<()> {
    if widths.is_empty() {
        return Err(ImgixError::WidthRange(
            "widths cannot be empty".to_string(),
        ));
    }
    if let Some(width) = widths.iter().find(|&&w| w == 0 || w > MAX_WIDTH) {
        return Err(ImgixError::WidthRange(format!(
            "widths must be between 1 and {MAX_WIDTH}, got {width}"
        )));
    }
    if let Some(pair) = widths.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(ImgixError::WidthRange(format!(
            "widths must be strictly increasing, got {} before {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}
