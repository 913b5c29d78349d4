//! Floating-point range with integer-range semantics.
//!
//! ## Purpose
//!
//! This module provides [`FRange`], an immutable arithmetic progression
//! `start, start + step, start + 2 * step, ...` that stops before `stop`,
//! following the same half-open convention as an integer range.
//!
//! ## Design notes
//!
//! * **Construct-then-freeze**: Constructors validate all three parameters and
//!   return a value whose fields are private; there is no way to reassign them.
//! * **No accumulation**: The k-th element is always `start + k * step`, never
//!   a running sum, so iteration, indexing and containment see identical values.
//! * **Length reconciliation**: `ceil((stop - start) / step)` is corrected
//!   against the generated values so that `len()` equals the iteration count.
//! * **Reversal without recounting**: A reversed range keeps the forward
//!   progression and its length and walks it from the back, so its values
//!   are bit-identical to the forward values in reverse order.
//! * **Sequence identity**: Equality and hashing compare the materialised
//!   values, not the `(start, stop, step)` triple.
//!
//! ## Invariants
//!
//! * `step != 0`.
//! * `magnitude(v) <= 14` for each of `start`, `stop` and `step`.
//! * `|step|` spans at least [`MIN_STEP_ULPS`] float spacings at the larger
//!   bound, and `len() <= 2^53`.
//! * Elements never repeat, so `count(v)` is 0 or 1.
//!
//! ## Non-goals
//!
//! * Slicing and ordering comparisons are not supported.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Range;
use num_traits::Float;

// Internal dependencies
use crate::math::numeric::magnitude;
use crate::primitives::errors::StatsError;
use crate::primitives::value::Value;

/// Largest order of magnitude accepted for `start`, `stop` and `step`.
pub const MAX_MAGNITUDE: i32 = 14;

/// Smallest step accepted, in float spacings at the larger bound.
pub const MIN_STEP_ULPS: f64 = 4.0;

/// Longest range whose indices are exact as `f64`.
const MAX_LEN: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// FRange
// ============================================================================

/// An immutable, lazily iterated range of `f64` values.
///
/// ```
/// use mathstats_rs::prelude::*;
///
/// let r = FRange::with_step(1.0, 10.0, 3.0)?;
/// assert_eq!(r.to_vec(), vec![1.0, 4.0, 7.0]);
/// assert!(r.contains(4.0));
/// assert_eq!(r.index(7.0)?, 2);
/// # Result::<(), StatsError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FRange {
    start: f64,
    stop: f64,
    step: f64,
    len: usize,
    // Forward progression the values are drawn from.
    origin: f64,
    stride: f64,
    backward: bool,
}

impl FRange {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Range `0, 1, ..` up to (excluding) `stop`.
    pub fn new(stop: f64) -> Result<Self, StatsError> {
        Self::with_step(0.0, stop, 1.0)
    }

    /// Range from `start` up to (excluding) `stop` with a unit step.
    pub fn between(start: f64, stop: f64) -> Result<Self, StatsError> {
        Self::with_step(start, stop, 1.0)
    }

    /// Range from `start` up to (excluding) `stop` in increments of `step`.
    pub fn with_step(start: f64, stop: f64, step: f64) -> Result<Self, StatsError> {
        for (name, value) in [("start", start), ("stop", stop), ("step", step)] {
            if value.is_nan() {
                return Err(StatsError::InvalidArgument(format!(
                    "'{}' must be a number, got NaN",
                    name
                )));
            }
            if magnitude(value) > MAX_MAGNITUDE {
                return Err(StatsError::ValueTooLarge { name, value });
            }
        }

        if step == 0.0 {
            return Err(StatsError::InvalidStep);
        }

        let reach = Float::max(Float::abs(start), Float::abs(stop));
        if Float::abs(step) < MIN_STEP_ULPS * spacing(reach) {
            return Err(StatsError::InvalidArgument(format!(
                "step {:?} is finer than the float spacing near {:?}",
                step, reach
            )));
        }

        Ok(Self {
            start,
            stop,
            step,
            len: Self::count_values(start, stop, step)?,
            origin: start,
            stride: step,
            backward: false,
        })
    }

    /// Build a range from positional arguments, as `range(stop)`,
    /// `range(start, stop)` or `range(start, stop, step)`.
    ///
    /// Booleans count as 0 and 1 and strings are parsed as floats.
    pub fn from_args(args: &[Value]) -> Result<Self, StatsError> {
        if args.is_empty() {
            return Err(StatsError::InvalidArgument(
                "Invalid argument types.".to_string(),
            ));
        }
        if args.len() > 3 {
            return Err(StatsError::InvalidArgument(format!(
                "FRange takes from 1 to 3 positional arguments but {} were given",
                args.len()
            )));
        }

        let mut bounds = [0.0; 3];
        for (slot, arg) in bounds.iter_mut().zip(args) {
            *slot = Self::coerce_arg(arg)?;
        }

        match args.len() {
            1 => Self::new(bounds[0]),
            2 => Self::between(bounds[0], bounds[1]),
            _ => Self::with_step(bounds[0], bounds[1], bounds[2]),
        }
    }

    fn coerce_arg(arg: &Value) -> Result<f64, StatsError> {
        match arg {
            Value::Int(i) => Ok(*i as f64),
            Value::Float(x) => Ok(*x),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Str(s) => s.trim().parse::<f64>().map_err(|_| {
                StatsError::InvalidArgument(format!("could not convert string to float: '{}'", s))
            }),
            Value::Null => Err(StatsError::InvalidArgument(
                "Invalid argument types.".to_string(),
            )),
        }
    }

    fn count_values(start: f64, stop: f64, step: f64) -> Result<usize, StatsError> {
        let before_stop = |v: f64| if step > 0.0 { v < stop } else { v > stop };
        if !before_stop(start) {
            return Ok(0);
        }

        let estimate = Float::ceil((stop - start) / step);
        if estimate > MAX_LEN {
            return Err(StatsError::InvalidArgument(format!(
                "FRange({:?}, {:?}, {:?}) has too many values",
                start, stop, step
            )));
        }
        let mut n = (estimate as usize).max(1);

        // The estimate can be one off once `start + k * step` is rounded.
        for _ in 0..2 {
            if n > 1 && !before_stop(start + (n - 1) as f64 * step) {
                n -= 1;
            }
        }
        for _ in 0..2 {
            if before_stop(start + n as f64 * step) {
                n += 1;
            }
        }
        Ok(n)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// First value of the progression.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive bound.
    #[inline]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Increment between consecutive values.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of values produced by iteration.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the range produces no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn forward_at(&self, j: usize) -> f64 {
        self.origin + j as f64 * self.stride
    }

    #[inline]
    fn value_at(&self, k: usize) -> f64 {
        if self.backward {
            self.forward_at(self.len - 1 - k)
        } else {
            self.forward_at(k)
        }
    }

    #[inline]
    fn within_bounds(&self, value: f64) -> bool {
        if self.step > 0.0 {
            self.start <= value && value < self.stop
        } else {
            self.stop < value && value <= self.start
        }
    }

    // ========================================================================
    // Sequence Operations
    // ========================================================================

    /// Iterate over the values. Each call starts a fresh iterator.
    pub fn iter(&self) -> Iter {
        Iter {
            range: *self,
            front: 0,
            back: self.len,
        }
    }

    /// Materialise all values.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Whether `value` is produced by iteration.
    pub fn contains(&self, value: f64) -> bool {
        self.position(value).is_some()
    }

    /// Membership test for dataset elements; only numbers and booleans can match.
    pub fn contains_value(&self, value: &Value) -> bool {
        match value {
            Value::Int(_) | Value::Float(_) => value.as_f64().is_some_and(|v| self.contains(v)),
            Value::Bool(b) => self.contains(if *b { 1.0 } else { 0.0 }),
            Value::Str(_) | Value::Null => false,
        }
    }

    /// Position of `value` in the iteration order.
    pub fn index(&self, value: f64) -> Result<usize, StatsError> {
        self.position(value).ok_or(StatsError::NotFound(value))
    }

    /// Number of occurrences of `value` (0 or 1).
    pub fn count(&self, value: f64) -> usize {
        usize::from(self.contains(value))
    }

    fn position(&self, value: f64) -> Option<usize> {
        if self.len == 0 || !value.is_finite() || !self.within_bounds(value) {
            return None;
        }

        let j = Float::round((value - self.origin) / self.stride);
        if j < 0.0 || j > self.len as f64 {
            return None;
        }

        // Rounding in the division can land one slot off the true position.
        let j = j as usize;
        let lo = j.saturating_sub(1);
        let hi = (j + 1).min(self.len - 1);
        let j = (lo..=hi).find(|&i| self.forward_at(i) == value)?;
        Some(if self.backward { self.len - 1 - j } else { j })
    }

    /// Value at position `index`.
    ///
    /// Non-negative indices count from `start`. Negative indices are offset
    /// from `stop` (`stop + index * step`), which differs from the last
    /// element whenever `stop` is not itself on the progression.
    pub fn get(&self, index: isize) -> Result<f64, StatsError> {
        if index >= 0 {
            return match index as usize {
                i if i < self.len => Ok(self.value_at(i)),
                _ => Err(StatsError::IndexOutOfRange(index)),
            };
        }

        let value = self.stop + index as f64 * self.step;
        if self.within_bounds(value) {
            Ok(value)
        } else {
            Err(StatsError::IndexOutOfRange(index))
        }
    }

    /// The same values in reverse order, as a new range.
    ///
    /// The reversed range starts at the last value, stops before `start` and
    /// steps by `-step`. An empty range reverses to start at
    /// `stop - remainder`, where `remainder = (stop - start) mod step`
    /// (or `step` when that is zero).
    pub fn reversed(&self) -> Self {
        let start = match self.len {
            0 => {
                let remainder = floor_mod(self.stop - self.start, self.step);
                let remainder = if remainder == 0.0 {
                    self.step
                } else {
                    remainder
                };
                self.stop - remainder
            }
            n => self.value_at(n - 1),
        };

        Self {
            start,
            stop: self.start - self.step,
            step: -self.step,
            backward: !self.backward,
            ..*self
        }
    }
}

/// Remainder carrying the sign of the divisor.
fn floor_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
        r + b
    } else {
        r
    }
}

/// Gap between a non-negative finite `x` and the next float up.
fn spacing(x: f64) -> f64 {
    f64::from_bits(x.to_bits() + 1) - x
}

// ============================================================================
// Equality, Hashing, Display
// ============================================================================

impl PartialEq for FRange {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

// Values are finite by construction.
impl Eq for FRange {}

impl PartialEq<Range<i64>> for FRange {
    fn eq(&self, other: &Range<i64>) -> bool {
        self.iter().eq(other.clone().map(|i| i as f64))
    }
}

impl Hash for FRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for v in self.iter() {
            // -0.0 == 0.0, so both must hash alike
            let v = if v == 0.0 { 0.0 } else { v };
            v.to_bits().hash(state);
        }
    }
}

impl fmt::Display for FRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 1.0 {
            write!(f, "FRange({:?}, {:?})", self.start, self.stop)
        } else {
            write!(f, "FRange({:?}, {:?}, {:?})", self.start, self.stop, self.step)
        }
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Iterator over the values of an [`FRange`].
#[derive(Debug, Clone)]
pub struct Iter {
    range: FRange,
    front: usize,
    back: usize,
}

impl Iterator for Iter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let v = self.range.value_at(self.front);
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<f64> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.range.value_at(self.back))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

impl IntoIterator for FRange {
    type Item = f64;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &FRange {
    type Item = f64;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}
