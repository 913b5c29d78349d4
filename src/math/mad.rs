//! Median Absolute Deviation (MAD) and absolute deviations for robust scale estimation.
//!
//! ## Purpose
//!
//! This module provides robust scale estimation using the Median Absolute
//! Deviation (MAD), which is resistant to outliers, together with the
//! per-element absolute deviations it is built from. Functions work on
//! slices and on n-dimensional `ndarray` arrays, either over the whole array
//! or lane by lane along one axis.
//!
//! ## Design notes
//!
//! * **Algorithm**: Uses Quickselect for O(n) median finding.
//! * **Formula**: MAD = scale * median(|x_i - center(x)|).
//! * **Axis handling**: With `Some(axis)` the center is taken per lane along
//!   `axis` and broadcast back over that lane; with `None` one center is taken
//!   over every element.
//! * **Degenerate results**: An empty input, or a NaN under
//!   [`NanPolicy::Propagate`], yields a zero-dimensional array holding NaN.
//!
//! ## Key concepts
//!
//! * **Robustness**: 50% breakdown point (safe against 50% outliers).
//! * **Consistency**: `scale = 1.4826` makes the MAD estimate the standard
//!   deviation of normally distributed data.
//! * **Deviation ratio**: `|x_i - median| / median(|x - median|)`, the unscaled
//!   statistic the MAD outlier detector compares against its threshold.
//!
//! ## Invariants
//!
//! * MAD >= 0 for any NaN-free input.
//! * Handles even and odd population sizes correctly.
//!
//! ## Non-goals
//!
//! * This module does not provide weighted MAD variants.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use ndarray::{Array1, ArrayBase, ArrayD, Axis, Data, Dimension, IxDyn};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::StatsError;

/// Default MAD scale factor (normal consistency constant).
pub const DEFAULT_MAD_SCALE: f64 = 1.4826;

// ============================================================================
// Policies
// ============================================================================

/// How NaN values in the input are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Any NaN makes the whole result NaN.
    #[default]
    Propagate,

    /// Any NaN is an error.
    Raise,

    /// NaNs are dropped; the remaining values are treated as one flat sequence.
    Omit,
}

/// Central value that deviations are measured from.
#[derive(Debug, Clone, Copy)]
pub enum Center<T> {
    /// Median (default).
    Median,

    /// Arithmetic mean.
    Mean,

    /// Caller-supplied reduction of a lane to a single value.
    Custom(fn(&[T]) -> T),
}

impl<T> Default for Center<T> {
    fn default() -> Self {
        Self::Median
    }
}

impl<T: Float> Center<T> {
    /// Reduce `values` to the central value. Empty input yields NaN.
    pub fn apply(&self, values: &[T]) -> T {
        if values.is_empty() {
            return T::nan();
        }
        match self {
            Self::Median => {
                let mut buf = values.to_vec();
                median_inplace(&mut buf)
            }
            Self::Mean => {
                let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
                sum / T::from(values.len()).unwrap()
            }
            Self::Custom(f) => f(values),
        }
    }
}

// ============================================================================
// Slice Kernels
// ============================================================================

/// Compute the Median Absolute Deviation (MAD) in-place, avoiding extra allocations.
///
/// # Formula
///
/// Calculated as:
/// ```text
/// MAD = median(|r_i - median(r)|)
/// ```
///
/// # Safety
///
/// This function modifies the provided `vals` slice.
#[inline]
pub fn compute_mad<T: Float>(vals: &mut [T]) -> T {
    if vals.is_empty() {
        return T::nan();
    }

    // Step 1: Compute median of the values
    let median: T = median_inplace(vals);

    // Step 2: Compute absolute deviations from median
    for val in vals.iter_mut() {
        *val = (*val - median).abs();
    }

    // Step 3: Return median of absolute deviations
    median_inplace(vals)
}

/// Compute the median in-place using Quickselect.
///
/// Reorders `vals`. Returns NaN for an empty slice.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::nan();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Even length: average of two middle values
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / T::from(2.0).unwrap()
    } else {
        upper
    }
}

/// Scaled MAD of a slice under [`NanPolicy::Propagate`].
///
/// Empty input or any NaN yields NaN.
pub fn mad<T: Float>(data: &[T], scale: T) -> T {
    if data.iter().any(|v| v.is_nan()) {
        return T::nan();
    }
    let mut buf = data.to_vec();
    scale * compute_mad(&mut buf)
}

/// Per-element `|x_i - median| / MAD` of a slice, in input order.
///
/// A NaN anywhere makes every ratio NaN. When the MAD is zero, values off
/// the median get an infinite ratio and values on it get NaN.
pub fn deviation_ratios<T: Float>(data: &[T]) -> Vec<T> {
    if data.iter().any(|v| v.is_nan()) {
        return data.iter().map(|_| T::nan()).collect();
    }

    let mut buf = data.to_vec();
    let median = median_inplace(&mut buf);
    let deviations: Vec<T> = data.iter().map(|&v| (v - median).abs()).collect();

    buf.copy_from_slice(&deviations);
    let mad = median_inplace(&mut buf);

    deviations.into_iter().map(|d| d / mad).collect()
}

// ============================================================================
// Array Operations
// ============================================================================

/// Absolute deviations plus the axis they should be reduced along.
struct Deviations<T> {
    values: ArrayD<T>,
    axis: Option<Axis>,
}

fn nan_scalar<T: Float>() -> ArrayD<T> {
    ArrayD::from_elem(IxDyn(&[]), T::nan())
}

fn deviations<T, S, D>(
    x: &ArrayBase<S, D>,
    axis: Option<Axis>,
    center: Center<T>,
    nan_policy: NanPolicy,
) -> Result<Option<Deviations<T>>, StatsError>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    if x.is_empty() {
        return Ok(None);
    }

    if let Some(ax) = axis {
        if ax.index() >= x.ndim() {
            return Err(StatsError::InvalidArgument(format!(
                "axis {} is out of bounds for array of dimension {}",
                ax.index(),
                x.ndim()
            )));
        }
    }

    let contains_nan = x.iter().any(|v| v.is_nan());
    let (mut values, axis) = match (contains_nan, nan_policy) {
        (true, NanPolicy::Propagate) => return Ok(None),
        (true, NanPolicy::Raise) => {
            return Err(StatsError::InvalidData(
                "The input contains nan values".to_string(),
            ));
        }
        (true, NanPolicy::Omit) => {
            let kept: Vec<T> = x.iter().copied().filter(|v| !v.is_nan()).collect();
            if kept.is_empty() {
                return Ok(None);
            }
            (Array1::from_vec(kept).into_dyn(), None)
        }
        (false, _) => (x.view().into_dyn().to_owned(), axis),
    };

    match axis {
        None => {
            let flat: Vec<T> = values.iter().copied().collect();
            let c = center.apply(&flat);
            values.mapv_inplace(|v| (v - c).abs());
        }
        Some(ax) => {
            for mut lane in values.lanes_mut(ax) {
                let flat: Vec<T> = lane.iter().copied().collect();
                let c = center.apply(&flat);
                lane.mapv_inplace(|v| (v - c).abs());
            }
        }
    }

    Ok(Some(Deviations { values, axis }))
}

/// Absolute deviation of every element from the center of its lane.
///
/// `axis = None` measures every element against one center computed over the
/// whole array. The result has the shape of the input, except that
/// [`NanPolicy::Omit`] flattens it to the NaN-free values and an empty input
/// (or a NaN under [`NanPolicy::Propagate`]) yields a zero-dimensional NaN.
pub fn absolute_deviation<T, S, D>(
    x: &ArrayBase<S, D>,
    axis: Option<Axis>,
    center: Center<T>,
    nan_policy: NanPolicy,
) -> Result<ArrayD<T>, StatsError>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    Ok(deviations(x, axis, center, nan_policy)?.map_or_else(nan_scalar, |d| d.values))
}

/// Scaled median absolute deviation.
///
/// With `Some(axis)` the MAD of each lane is returned and `axis` is removed
/// from the shape; with `None` (or after [`NanPolicy::Omit`]) the result is
/// zero-dimensional.
///
/// ```
/// use mathstats_rs::prelude::*;
/// use ndarray::{array, Axis};
///
/// let x = array![[10.0, 7.0, 4.0], [3.0, 2.0, 1.0]];
/// let per_column = median_absolute_deviation(
///     &x, Some(Axis(0)), Center::Median, DEFAULT_MAD_SCALE, NanPolicy::Propagate,
/// )?;
/// assert!((per_column[[0]] - 5.1891).abs() < 1e-9);
///
/// let whole = median_absolute_deviation(
///     &x, None, Center::Median, DEFAULT_MAD_SCALE, NanPolicy::Propagate,
/// )?;
/// assert!((whole[[]] - 2.9652).abs() < 1e-9);
/// # Result::<(), StatsError>::Ok(())
/// ```
pub fn median_absolute_deviation<T, S, D>(
    x: &ArrayBase<S, D>,
    axis: Option<Axis>,
    center: Center<T>,
    scale: T,
    nan_policy: NanPolicy,
) -> Result<ArrayD<T>, StatsError>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    if axis.is_none()
        && matches!(center, Center::Median)
        && matches!(nan_policy, NanPolicy::Propagate)
    {
        let flat: Vec<T> = x.iter().copied().collect();
        return Ok(ArrayD::from_elem(IxDyn(&[]), mad(&flat, scale)));
    }

    let Some(dev) = deviations(x, axis, center, nan_policy)? else {
        return Ok(nan_scalar());
    };

    let mad = match dev.axis {
        None => {
            let mut flat: Vec<T> = dev.values.iter().copied().collect();
            ArrayD::from_elem(IxDyn(&[]), median_inplace(&mut flat))
        }
        Some(ax) => dev.values.map_axis(ax, |lane| {
            let mut flat: Vec<T> = lane.iter().copied().collect();
            median_inplace(&mut flat)
        }),
    };

    Ok(mad.mapv(|m| scale * m))
}

/// Absolute deviation of every element expressed in units of the (unscaled) MAD.
///
/// Each lane is divided by the median of its own deviations; with `axis = None`
/// one MAD is computed over the whole array.
pub fn absolute_deviation_from_median<T, S, D>(
    x: &ArrayBase<S, D>,
    axis: Option<Axis>,
    center: Center<T>,
    nan_policy: NanPolicy,
) -> Result<ArrayD<T>, StatsError>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    let Some(mut dev) = deviations(x, axis, center, nan_policy)? else {
        return Ok(nan_scalar());
    };

    match dev.axis {
        None => {
            let mut flat: Vec<T> = dev.values.iter().copied().collect();
            let mad = median_inplace(&mut flat);
            dev.values.mapv_inplace(|d| d / mad);
        }
        Some(ax) => {
            for mut lane in dev.values.lanes_mut(ax) {
                let mut flat: Vec<T> = lane.iter().copied().collect();
                let mad = median_inplace(&mut flat);
                lane.mapv_inplace(|d| d / mad);
            }
        }
    }

    Ok(dev.values)
}
