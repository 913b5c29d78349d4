//! Outlier detection for one-dimensional datasets.
//!
//! ## Purpose
//!
//! This module splits a dataset into outliers and inliers under four
//! policies: MAD ratio, distance from the mean in standard deviations,
//! quartile fences, and the two-tier SPSS fences (extremes and outliers).
//!
//! ## Design notes
//!
//! * **Filtering**: MAD, standard-deviation and quartile detection drop
//!   nulls, booleans and strings, and zeros unless `strip_zero` is false.
//!   SPSS detection drops nulls, empty strings, zeros and `false` only.
//! * **Small inputs**: Fewer than two cleaned values means no outliers,
//!   except for SPSS, which rejects raw inputs shorter than two.
//! * **Fences are strict**: A value sitting exactly on a fence is outside.
//!
//! ## Key concepts
//!
//! * **MAD ratio**: `|x - median| / median(|x - median|)`, unscaled.
//! * **Standard deviation fences**: `mean + rng * sd` above and
//!   `-(mean + rng * sd)` below, with the sample standard deviation (`ddof = 1`).
//!   The lower fence is the negated upper fence, not `mean - rng * sd`.
//! * **Quartile fences**: `Q3 - 3 * IQR` and `Q3 + 3 * IQR`.
//! * **SPSS fences**: `Q3 +/- 1.5 * IQR` for outliers, `Q3 +/- 3 * IQR` for extremes.
//!
//! ## Invariants
//!
//! * Every cleaned value lands in exactly one group.
//! * Order within each group matches input order.
//!
//! ## Non-goals
//!
//! * This module does not remove outliers from the caller's data.
//! * This module does not iterate detection to convergence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::descriptive::{mean, percentile, std_dev};
use crate::math::filters::clean_numeric;
use crate::math::mad::deviation_ratios;
use crate::primitives::errors::StatsError;
use crate::primitives::partition::{OutlierPartition, SpssPartition};
use crate::primitives::value::Value;

// ============================================================================
// Constants
// ============================================================================

/// Default MAD ratio above which a value is an outlier.
pub const DEFAULT_MAD_THRESHOLD: f64 = 3.0;

/// Default number of standard deviations from the mean.
pub const DEFAULT_STDEV_RANGE: f64 = 2.0;

/// IQR multiple for the quartile fences and the SPSS extreme fences.
const OUTER_FENCE: f64 = 3.0;

/// IQR multiple for the SPSS outlier fences.
const INNER_FENCE: f64 = 1.5;

// ============================================================================
// Helpers
// ============================================================================

fn to_values<V: Clone + Into<Value>>(dataset: &[V]) -> Vec<Value> {
    dataset.iter().cloned().map(Into::into).collect()
}

/// Split `data` in order, sending values that satisfy `is_outlier` left.
fn split_by<F>(data: Vec<f64>, is_outlier: F) -> OutlierPartition<f64>
where
    F: Fn(usize, f64) -> bool,
{
    let mut partition = OutlierPartition::default();
    for (i, value) in data.into_iter().enumerate() {
        if is_outlier(i, value) {
            partition.outliers.push(value);
        } else {
            partition.inliers.push(value);
        }
    }
    partition
}

/// First and third quartile of a dataset with at least one value.
fn quartiles(data: &[f64]) -> (f64, f64) {
    let q1 = percentile(data, 25.0).unwrap_or(f64::NAN);
    let q3 = percentile(data, 75.0).unwrap_or(f64::NAN);
    (q1, q3)
}

#[inline]
fn inside(lower: f64, value: f64, upper: f64) -> bool {
    lower < value && value < upper
}

// ============================================================================
// Detectors
// ============================================================================

/// Flag values whose MAD ratio exceeds `threshold`.
///
/// A NaN in the cleaned data makes every ratio NaN, so nothing is flagged.
pub fn mad_outliers<V>(dataset: &[V], strip_zero: bool, threshold: f64) -> OutlierPartition<f64>
where
    V: Clone + Into<Value>,
{
    let data = clean_numeric(&to_values(dataset), strip_zero);
    if data.len() < 2 {
        return OutlierPartition::all_inliers(data);
    }

    let ratios = deviation_ratios(&data);
    split_by(data, |i, _| {
        let r = ratios[i];
        r > threshold || -threshold > r
    })
}

/// Flag values more than `rng` sample standard deviations above the mean,
/// or below the negated upper fence.
pub fn stdev_outliers<V>(dataset: &[V], strip_zero: bool, rng: f64) -> OutlierPartition<f64>
where
    V: Clone + Into<Value>,
{
    let data = clean_numeric(&to_values(dataset), strip_zero);
    if data.len() < 2 {
        return OutlierPartition::all_inliers(data);
    }

    let upper = mean(&data) + rng * std_dev(&data, 1);
    let lower = -upper;
    split_by(data, |_, v| v > upper || lower > v)
}

/// [`stdev_outliers`] with the default range of two standard deviations.
pub fn two_stdev<V>(dataset: &[V], strip_zero: bool) -> OutlierPartition<f64>
where
    V: Clone + Into<Value>,
{
    stdev_outliers(dataset, strip_zero, DEFAULT_STDEV_RANGE)
}

/// Flag values outside `Q3 +/- 3 * IQR`.
pub fn quartile_outliers<V>(dataset: &[V], strip_zero: bool) -> OutlierPartition<f64>
where
    V: Clone + Into<Value>,
{
    let data = clean_numeric(&to_values(dataset), strip_zero);
    if data.len() < 2 {
        return OutlierPartition::all_inliers(data);
    }

    let (q1, q3) = quartiles(&data);
    let iqr = q3 - q1;
    let (lower, upper) = (q3 - OUTER_FENCE * iqr, q3 + OUTER_FENCE * iqr);
    split_by(data, |_, v| !inside(lower, v, upper))
}

/// Two-tier SPSS classification into extremes, outliers and inliers.
///
/// Fails with [`StatsError::TooSmall`] if the raw dataset has fewer than two
/// elements, and with [`StatsError::InvalidData`] if a non-empty string
/// survives cleaning. `true` counts as 1.
///
/// Every zero-like element (`0`, `0.0`, `false`, null, `""`) is dropped, so
/// `[0, 0, 0, 0, 0, 1, 2, 3]` is classified as `[1, 2, 3]`. Removing zeros
/// twice while walking the same list would keep one `0` from a run of five
/// or more; this filter does not.
pub fn spss_outliers<V>(dataset: &[V]) -> Result<SpssPartition<f64>, StatsError>
where
    V: Clone + Into<Value>,
{
    if dataset.len() < 2 {
        return Err(StatsError::TooSmall {
            got: dataset.len(),
            min: 2,
        });
    }

    let mut data = Vec::with_capacity(dataset.len());
    for value in to_values(dataset) {
        if value.is_zero_like() {
            continue;
        }
        match value {
            Value::Int(i) => data.push(i as f64),
            Value::Float(x) => data.push(x),
            Value::Bool(_) => data.push(1.0),
            other => {
                return Err(StatsError::InvalidData(format!(
                    "{:?} is not numeric",
                    other
                )));
            }
        }
    }

    if data.is_empty() {
        return Ok(SpssPartition::default());
    }

    let (q1, q3) = quartiles(&data);
    let iqr = q3 - q1;
    let (inner_lo, inner_hi) = (q3 - INNER_FENCE * iqr, q3 + INNER_FENCE * iqr);
    let (outer_lo, outer_hi) = (q3 - OUTER_FENCE * iqr, q3 + OUTER_FENCE * iqr);

    let mut partition = SpssPartition::default();
    for value in data {
        if !inside(outer_lo, value, outer_hi) {
            partition.extremes.push(value);
        } else if !inside(inner_lo, value, inner_hi) {
            partition.outliers.push(value);
        } else {
            partition.inliers.push(value);
        }
    }
    Ok(partition)
}
