//! Descriptive statistics: central tendency, dispersion and percentiles.
//!
//! ## Purpose
//!
//! This module provides the location and scale statistics the detectors and
//! effect-size measures are built on, in three flavours:
//!
//! * plain kernels over `&[T]` (`mean`, `median`, `std_dev`, `percentile`) where
//!   any NaN poisons the result;
//! * NaN-aware kernels (`nan_mean`, `nan_median`, `nan_std`) that skip NaNs
//!   and return NaN only when nothing is left;
//! * `*_none` statistics over dirty [`Value`] datasets, which strip nulls,
//!   booleans, strings and zeros first.
//!
//! ## Design notes
//!
//! * **Percentiles**: Linear interpolation between closest ranks, the
//!   `(n - 1) * p / 100` convention.
//! * **Variance**: Two-pass (mean first, then squared deviations) with
//!   divisor `n - ddof`; when `n <= ddof` the result is NaN.
//!
//! ## Invariants
//!
//! * Kernels never reorder or mutate the caller's data.
//!
//! ## Non-goals
//!
//! * Weighted statistics and streaming (single pass) accumulators.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::math::filters::clean_numeric;
use crate::math::mad::median_inplace;
use crate::primitives::errors::StatsError;
use crate::primitives::value::Value;

// ============================================================================
// Plain Kernels
// ============================================================================

/// Arithmetic mean. Empty input yields NaN.
pub fn mean<T: Float>(data: &[T]) -> T {
    if data.is_empty() {
        return T::nan();
    }
    let sum = data.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(data.len()).unwrap()
}

/// Median. Empty input or any NaN yields NaN.
pub fn median<T: Float>(data: &[T]) -> T {
    if data.iter().any(|v| v.is_nan()) {
        return T::nan();
    }
    let mut buf = data.to_vec();
    median_inplace(&mut buf)
}

/// Variance with divisor `n - ddof`.
pub fn variance<T: Float>(data: &[T], ddof: usize) -> T {
    let n = data.len();
    if n <= ddof {
        return T::nan();
    }
    let m = mean(data);
    let ss = data
        .iter()
        .fold(T::zero(), |acc, &v| acc + (v - m) * (v - m));
    ss / T::from(n - ddof).unwrap()
}

/// Standard deviation with divisor `n - ddof` (`ddof = 0` for the population
/// value, `ddof = 1` for the sample value).
pub fn std_dev<T: Float>(data: &[T], ddof: usize) -> T {
    variance(data, ddof).sqrt()
}

/// The `p`-th percentile (`p` in `[0, 100]`) with linear interpolation.
///
/// Any NaN in `data` yields NaN.
pub fn percentile<T: Float>(data: &[T], p: T) -> Result<T, StatsError> {
    validate_percentile(p)?;
    if data.is_empty() {
        return Err(StatsError::TooSmall { got: 0, min: 1 });
    }
    if data.iter().any(|v| v.is_nan()) {
        return Ok(T::nan());
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    Ok(percentile_sorted(&sorted, p))
}

/// Percentile of data that is already sorted ascending and NaN-free.
fn percentile_sorted<T: Float>(sorted: &[T], p: T) -> T {
    let hundred = T::from(100.0).unwrap();
    let rank = p / hundred * T::from(sorted.len() - 1).unwrap();

    let lo = rank.floor();
    let i = lo.to_usize().unwrap_or(0);
    let j = (i + 1).min(sorted.len() - 1);
    let t = rank - lo;

    let (a, b) = (sorted[i], sorted[j]);
    let diff = b - a;
    // Interpolate from the nearer end to keep the result inside [a, b].
    if t >= T::from(0.5).unwrap() {
        b - diff * (T::one() - t)
    } else {
        a + diff * t
    }
}

fn validate_percentile<T: Float>(p: T) -> Result<(), StatsError> {
    let hundred = T::from(100.0).unwrap();
    if !(p >= T::zero() && p <= hundred) {
        return Err(StatsError::InvalidPercentile(p.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(())
}

// ============================================================================
// NaN-aware Kernels
// ============================================================================

fn without_nan<T: Float>(data: &[T]) -> Vec<T> {
    data.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Mean ignoring NaNs; NaN only if every value is NaN.
pub fn nan_mean<T: Float>(data: &[T]) -> T {
    mean(&without_nan(data))
}

/// Median ignoring NaNs; NaN only if every value is NaN.
pub fn nan_median<T: Float>(data: &[T]) -> T {
    let mut buf = without_nan(data);
    median_inplace(&mut buf)
}

/// Standard deviation ignoring NaNs.
pub fn nan_std<T: Float>(data: &[T], ddof: usize) -> T {
    std_dev(&without_nan(data), ddof)
}

// ============================================================================
// Statistics over Dirty Data
// ============================================================================

/// Mean after stripping nulls, booleans, strings and zeros; NaNs are ignored.
pub fn mean_none(data: &[Value]) -> f64 {
    nan_mean(&clean_numeric(data, true))
}

/// Median after stripping nulls, booleans, strings and zeros; NaNs are ignored.
pub fn median_none(data: &[Value]) -> f64 {
    nan_median(&clean_numeric(data, true))
}

/// Standard deviation after stripping nulls, booleans, strings and zeros;
/// NaNs are ignored.
pub fn std_none(data: &[Value], ddof: usize) -> f64 {
    nan_std(&clean_numeric(data, true), ddof)
}

/// Percentile after stripping nulls, booleans, strings, zeros and NaNs.
///
/// Fails with [`StatsError::TooSmall`] if fewer than two values remain.
pub fn percentile_none(data: &[Value], p: f64) -> Result<f64, StatsError> {
    validate_percentile(p)?;
    let cleaned = without_nan(&clean_numeric(data, true));
    if cleaned.len() < 2 {
        return Err(StatsError::TooSmall {
            got: cleaned.len(),
            min: 2,
        });
    }
    percentile(&cleaned, p)
}

/// Interquartile range `Q3 - Q1` of the cleaned data.
pub fn iqr_none(data: &[Value]) -> Result<f64, StatsError> {
    let q1 = percentile_none(data, 25.0)?;
    let q3 = percentile_none(data, 75.0)?;
    Ok(q3 - q1)
}

// ============================================================================
// Coercing Aggregates
// ============================================================================

/// Coerce every element to a float (`Null` to NaN, booleans to 0/1, strings
/// parsed). Unparsable strings are an error.
fn coerce_all(data: &[Value]) -> Result<Vec<f64>, StatsError> {
    data.iter()
        .map(|v| {
            v.coerce_f64().ok_or_else(|| {
                StatsError::InvalidData(format!("could not convert {:?} to float", v))
            })
        })
        .collect()
}

/// Mean of all elements coerced to floats, ignoring `Null` and NaN.
pub fn nanmean(data: &[Value]) -> Result<f64, StatsError> {
    Ok(nan_mean(&coerce_all(data)?))
}

/// Population standard deviation of all elements coerced to floats,
/// ignoring `Null` and NaN.
pub fn nanstd(data: &[Value]) -> Result<f64, StatsError> {
    Ok(nan_std(&coerce_all(data)?, 0))
}

/// Relative standard deviation `nanstd / |nanmean|`.
pub fn nanrsd(data: &[Value]) -> Result<f64, StatsError> {
    let values = coerce_all(data)?;
    Ok(nan_std(&values, 0) / nan_mean(&values).abs())
}
