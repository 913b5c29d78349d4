//! Effect-size statistics for two-sample comparisons.
//!
//! ## Purpose
//!
//! This module computes standardised mean differences between two samples:
//! pooled standard deviation, Cohen's d, Hedge's g with Durlak's small-sample
//! bias correction, and a qualitative reading of the resulting value.
//!
//! ## Design notes
//!
//! * **Population SD**: All per-sample standard deviations use `ddof = 0`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Unweighted pooled SD**: `sqrt((sd1^2 + sd2^2) / 2)`.
//! * **Weighted pooled SD**: `sqrt(((n1 - 1) sd1^2 + (n2 - 1) sd2^2) / (n1 + n2 - 2))`.
//! * **Durlak correction**: `g * ((n - 3) / (n - 2.25)) * sqrt((n - 2) / n)`.
//! * **Interpretation**: `|d|` below 0.2 is no effect, below 0.5 small, below
//!   0.8 intermediate, otherwise large; negative values are adverse.
//!
//! ## Non-goals
//!
//! * Confidence intervals and significance tests for the effect size.

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::math::descriptive::{mean, std_dev};

// ============================================================================
// Options
// ============================================================================

/// Which sample supplies the standard deviation in [`d_cohen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sample {
    /// Standard deviation of the first sample.
    #[default]
    First,

    /// Standard deviation of the second sample.
    Second,
}

/// One-tailed (signed) or two-tailed (absolute) effect size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tail {
    /// Keep the sign of `mean1 - mean2`.
    #[default]
    One,

    /// Report the magnitude only.
    Two,
}

// ============================================================================
// Statistics
// ============================================================================

/// Pooled standard deviation of two samples.
pub fn pooled_sd<T: Float>(sample1: &[T], sample2: &[T], weighted: bool) -> T {
    let sd1 = std_dev(sample1, 0);
    let sd2 = std_dev(sample2, 0);
    let two = T::from(2.0).unwrap();

    if weighted {
        let n1 = T::from(sample1.len()).unwrap();
        let n2 = T::from(sample2.len()).unwrap();
        let one = T::one();
        (((n1 - one) * sd1 * sd1 + (n2 - one) * sd2 * sd2) / (n1 + n2 - two)).sqrt()
    } else {
        ((sd1 * sd1 + sd2 * sd2) / two).sqrt()
    }
}

/// Cohen's d: `(mean1 - mean2) / sd`.
///
/// `sd` is the standard deviation of the sample picked by `which`, or the
/// unweighted pooled SD when `pooled` is set (which then overrides `which`).
pub fn d_cohen<T: Float>(
    sample1: &[T],
    sample2: &[T],
    which: Sample,
    tail: Tail,
    pooled: bool,
) -> T {
    let diff = mean(sample1) - mean(sample2);

    let sd = if pooled {
        pooled_sd(sample1, sample2, false)
    } else {
        match which {
            Sample::First => std_dev(sample1, 0),
            Sample::Second => std_dev(sample2, 0),
        }
    };

    match tail {
        Tail::One => diff / sd,
        Tail::Two => diff.abs() / sd,
    }
}

/// Hedge's g: `(mean1 - mean2)` over the weighted pooled SD.
pub fn g_hedge<T: Float>(sample1: &[T], sample2: &[T]) -> T {
    (mean(sample1) - mean(sample2)) / pooled_sd(sample1, sample2, true)
}

/// Durlak's bias correction of Hedge's `g` for total sample size `n = n1 + n2`.
pub fn g_durlak_bias<T: Float>(g: T, n: T) -> T {
    let two = T::from(2.0).unwrap();
    let three = T::from(3.0).unwrap();
    let correction = T::from(2.25).unwrap();

    g * ((n - three) / (n - correction)) * ((n - two) / n).sqrt()
}

// ============================================================================
// Interpretation
// ============================================================================

/// Size class of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Magnitude {
    /// `|d| < 0.2`.
    None,

    /// `0.2 <= |d| < 0.5`.
    Small,

    /// `0.5 <= |d| < 0.8`.
    Intermediate,

    /// `|d| >= 0.8`.
    Large,
}

impl Magnitude {
    fn label(self) -> &'static str {
        match self {
            Self::None => "No",
            Self::Small => "Small",
            Self::Intermediate => "Intermediate",
            Self::Large => "Large",
        }
    }
}

/// Qualitative reading of a Cohen's d or Hedge's g value.
///
/// Displays as `"Small Effect"`, or `"Small Adverse Effect"` for negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    /// Size class of `|d|`.
    pub magnitude: Magnitude,

    /// Whether `d` is negative.
    pub adverse: bool,
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.adverse {
            write!(f, "{} Adverse Effect", self.magnitude.label())
        } else {
            write!(f, "{} Effect", self.magnitude.label())
        }
    }
}

/// Interpret a Cohen's d or Hedge's g value.
///
/// Thresholds are 0.2, 0.5 and 0.8. NaN reads as no effect.
pub fn interpret_d<T: Float>(d_or_g: T) -> Interpretation {
    let d = d_or_g.to_f64().unwrap_or(f64::NAN);
    let magnitude_of = |v: f64| {
        if v >= 0.8 {
            Magnitude::Large
        } else if v >= 0.5 {
            Magnitude::Intermediate
        } else if v >= 0.2 {
            Magnitude::Small
        } else {
            Magnitude::None
        }
    };

    Interpretation {
        magnitude: magnitude_of(d.abs()),
        adverse: d < 0.0,
    }
}
