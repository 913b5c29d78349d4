//! # mathstats: Robust Statistics for Row-Oriented Data in Rust
//!
//! A small, dependency-light collection of statistical routines for the
//! numeric columns of tabular data: outlier detection, central tendency and
//! dispersion statistics, effect sizes, a floating-point range type and a
//! handful of numeric helpers.
//!
//! ## What is in the box?
//!
//! **Outlier detection** with four policies:
//! - **MAD**: values whose deviation from the median exceeds a multiple of
//!   the median absolute deviation
//! - **Standard deviation**: values more than `rng` standard deviations from the mean
//! - **Quartile**: values outside `Q3 +/- 3 * IQR`
//! - **SPSS**: two-tier fences splitting extremes from ordinary outliers
//!
//! **Robust and descriptive statistics**:
//! - Median absolute deviation over slices or n-dimensional `ndarray` arrays,
//!   per axis, with a configurable center and NaN policy
//! - Mean, median, standard deviation, percentiles and IQR that ignore
//!   missing markers, booleans, strings and zeros in dirty rows
//!
//! **Effect sizes**: pooled standard deviation, Cohen's d, Hedge's g,
//! Durlak's bias correction and a qualitative interpretation.
//!
//! **`FRange`**: an immutable floating-point range with integer-range
//! semantics (length, containment, indexing, reversal, equality, hashing).
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use mathstats_rs::prelude::*;
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 1000.0];
//!
//! // Build the detector
//! let detector = Outliers::new()
//!     .method(Mad)       // Median absolute deviation (default)
//!     .threshold(3.0)    // Ratio above which a value is an outlier
//!     .build()?;
//!
//! // Classify the data
//! let result = detector.detect(&data)?;
//! assert_eq!(result.outliers(), &[1000.0]);
//!
//! println!("{}", result);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 5
//!
//! Groups:
//!   Outliers       1  [1000]
//!   Inliers        4  [1, 2, 3, 4]
//! ```
//!
//! ### SPSS Fences
//!
//! ```rust
//! use mathstats_rs::prelude::*;
//!
//! let detector = Outliers::new().method(Spss).build()?;
//! let result = detector.detect(&[1.0, 2.0, 3.0, 4.0, 1000.0])?;
//!
//! assert_eq!(result.extremes(), Some(&[1000.0][..]));
//! assert_eq!(result.outliers(), &[1.0]);
//! assert_eq!(result.inliers(), &[2.0, 3.0, 4.0]);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ### Dirty Rows
//!
//! Rows pulled out of a table often mix numbers with missing markers,
//! booleans and text. [`Value`](prelude::Value) keeps those apart:
//!
//! ```rust
//! use mathstats_rs::prelude::*;
//!
//! let row = vec![
//!     Value::from(1), Value::from(2), Value::from(3), Value::from(4), Value::from(5),
//!     Value::from(0), Value::from("abc"), Value::from(false), Value::Null,
//!     Value::from(f64::NAN),
//! ];
//!
//! assert_eq!(mean_none(&row), 3.0);
//! assert_eq!(median_none(&row), 3.0);
//! assert_eq!(iqr_none(&row)?, 2.0);
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ### Effect Sizes
//!
//! ```rust
//! use mathstats_rs::prelude::*;
//!
//! let treated = [25.0, 75.0, 50.0];
//! let control = [30.0, 80.0, 50.0];
//!
//! let g = g_hedge(&treated, &control);
//! let corrected = g_durlak_bias(g, 6.0);
//! println!("{}", interpret_d(corrected)); // "No Adverse Effect"
//! ```
//!
//! ### Floating-point Ranges
//!
//! ```rust
//! use mathstats_rs::prelude::*;
//!
//! let r = FRange::with_step(5.0, -5.0, -3.0)?;
//! assert_eq!(r.to_vec(), vec![5.0, 2.0, -1.0, -4.0]);
//! assert_eq!(r.reversed().to_vec(), vec![-4.0, -1.0, 2.0, 5.0]);
//! assert!(r.contains(-1.0));
//! println!("{}", r); // FRange(5.0, -5.0, -3.0)
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter    | Default | Method             | Description                                  |
//! |--------------|---------|--------------------|----------------------------------------------|
//! | `method`     | `Mad`   | all                | Detection policy                             |
//! | `threshold`  | 3.0     | `Mad`              | MAD ratio above which a value is an outlier  |
//! | `range`      | 2.0     | `StandardDeviation`| Standard deviations allowed from the mean    |
//! | `strip_zero` | `true`  | all (`Spss`: only `true`) | Drop zeros before detection           |
//!
//! Setting a parameter twice, or a parameter the method does not use, makes
//! `.build()` fail with a descriptive [`StatsError`](prelude::StatsError).
//!
//! Methods can also be selected by name or by legacy integer code:
//!
//! ```rust
//! use mathstats_rs::prelude::*;
//!
//! assert_eq!("IQR".parse::<OutlierMethod>()?, Quartile);
//! assert_eq!(OutlierMethod::try_from(3)?, StandardDeviation);
//! assert!("median".parse::<OutlierMethod>().is_err());
//! # Result::<(), StatsError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate is `no_std` compatible (it requires `alloc`). Disable default
//! features in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mathstats-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Floating-point functions then come from `libm` through `num-traits`.
//!
//! ## References
//!
//! - Leys, C., et al. (2013). "Detecting outliers: Do not use standard deviation
//!   around the mean, use absolute deviation around the median."
//!   *Journal of Experimental Social Psychology*, 49(4), 764-766.
//! - Cohen, J. (1988). *Statistical power analysis for the behavioral sciences*
//!   (2nd Edition). Lawrence Erlbaum Associates.
//! - Sullivan, G. and Feinn, R. (2012). "Using Effect Size, or Why the P Value
//!   Is Not Enough." *Journal of Graduate Medical Education*, 4(3), 279-282.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error taxonomy (`StatsError`), the tagged dataset element
// (`Value`) and the outlier partition types.
mod primitives;

// Layer 2: Math - pure numeric functions.
//
// Contains dataset filters, descriptive statistics, robust scale
// estimation (MAD), numeric helpers and the `FRange` type.
mod math;

// Layer 3: Algorithms - statistical procedures.
//
// Contains the four outlier detectors and the effect-size measures.
mod algorithms;

// Layer 4: Engine - validation and dispatch.
//
// Contains fail-fast parameter validation and the detection executor.
mod engine;

// High-level fluent API for outlier detection.
//
// Provides the `Outliers` builder and the public re-exports.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard mathstats prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types and functions:
///
/// ```
/// use mathstats_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Center, Classification, DEFAULT_MAD_SCALE, DEFAULT_MAD_THRESHOLD, DEFAULT_STDEV_RANGE,
        FRange, FRangeIter, Interpretation, Magnitude, NanPolicy, OutlierDetector,
        OutlierMethod::{self, Mad, Quartile, Spss, StandardDeviation},
        OutlierPartition, OutliersBuilder as Outliers, Sample, SpssPartition, StatsError, Tail,
        Value, absolute_deviation, absolute_deviation_from_median, d_cohen, g_durlak_bias,
        g_hedge, gcd, gcd_array, intdiv, interpret_d, iqr_none, is_int, lcm, log_factorial,
        mad_outliers, magnitude, mean, mean_none, median, median_absolute_deviation,
        median_none, mod_inverse, nanmean, nanrsd, nanstd, percentile, percentile_none,
        pooled_sd, quartile_outliers, remove_zero, represents_int, roman, rounders,
        spss_outliers, std_dev, std_none, stdev_outliers, strip_booleans,
        strip_none_bool_string, strip_nonetype, strip_strings, two_stdev, within_one_minute,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal statistical algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
