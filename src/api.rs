//! High-level API for outlier detection and the public surface of the crate.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for outlier
//! detection. It implements a fluent builder for choosing a detection method
//! and its parameters, and re-exports the statistics, effect-size and range
//! functionality of the lower layers.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting a parameter twice, or setting one that the chosen
//!   method ignores, is an error rather than a silent no-op.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create an [`OutliersBuilder`] via `Outliers::new()`.
//! 2. Chain configuration methods (`.method()`, `.threshold()`, etc.).
//! 3. Call `.build()` to get an [`OutlierDetector`].
//! 4. Call `.detect(&data)` for each dataset.

// Internal dependencies
use crate::engine::executor::{DetectionConfig, DetectionExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::effect_size::{
    Interpretation, Magnitude, Sample, Tail, d_cohen, g_durlak_bias, g_hedge, interpret_d,
    pooled_sd,
};
pub use crate::algorithms::outliers::{
    DEFAULT_MAD_THRESHOLD, DEFAULT_STDEV_RANGE, mad_outliers, quartile_outliers, spss_outliers,
    stdev_outliers, two_stdev,
};
pub use crate::engine::executor::OutlierMethod;
pub use crate::math::descriptive::{
    iqr_none, mean, mean_none, median, median_none, nanmean, nanrsd, nanstd, percentile,
    percentile_none, std_dev, std_none,
};
pub use crate::math::filters::{
    remove_zero, strip_booleans, strip_none_bool_string, strip_nonetype, strip_strings,
};
pub use crate::math::frange::{FRange, Iter as FRangeIter};
pub use crate::math::mad::{
    Center, DEFAULT_MAD_SCALE, NanPolicy, absolute_deviation, absolute_deviation_from_median,
    median_absolute_deviation,
};
pub use crate::math::numeric::{
    gcd, gcd_array, intdiv, is_int, lcm, log_factorial, magnitude, mod_inverse, represents_int,
    roman, rounders, within_one_minute,
};
pub use crate::primitives::errors::StatsError;
pub use crate::primitives::partition::{Classification, OutlierPartition, SpssPartition};
pub use crate::primitives::value::Value;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an outlier detector.
#[derive(Debug, Clone)]
pub struct OutliersBuilder {
    /// Detection method (default: MAD).
    pub method: Option<OutlierMethod>,

    /// MAD ratio threshold (MAD only, default: 3).
    pub threshold: Option<f64>,

    /// Number of standard deviations (standard deviation only, default: 2).
    pub range: Option<f64>,

    /// Whether zeros are stripped before detection (default: true).
    pub strip_zero: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for OutliersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OutliersBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            threshold: None,
            range: None,
            strip_zero: None,
            duplicate_param: None,
        }
    }

    /// Set the detection method.
    pub fn method(mut self, method: OutlierMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the MAD ratio above which a value is an outlier.
    pub fn threshold(mut self, threshold: f64) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Set how many standard deviations from the mean a value may lie.
    pub fn range(mut self, range: f64) -> Self {
        if self.range.is_some() {
            self.duplicate_param = Some("range");
        }
        self.range = Some(range);
        self
    }

    /// Set whether zero values are removed before detection.
    pub fn strip_zero(mut self, strip_zero: bool) -> Self {
        if self.strip_zero.is_some() {
            self.duplicate_param = Some("strip_zero");
        }
        self.strip_zero = Some(strip_zero);
        self
    }

    /// Validate the configuration and build the detector.
    pub fn build(self) -> Result<OutlierDetector, StatsError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = DetectionConfig::default();
        if let Some(method) = self.method {
            config.method = method;
        }

        // Reject parameters the method would ignore
        Validator::validate_method_parameters(
            config.method,
            self.threshold,
            self.range,
            self.strip_zero,
        )?;

        if let Some(threshold) = self.threshold {
            Validator::validate_threshold(threshold)?;
            config.threshold = threshold;
        }
        if let Some(range) = self.range {
            Validator::validate_range(range)?;
            config.range = range;
        }
        if let Some(strip_zero) = self.strip_zero {
            config.strip_zero = strip_zero;
        }

        Ok(OutlierDetector {
            executor: DetectionExecutor::from_config(&config),
        })
    }
}

// ============================================================================
// Detector
// ============================================================================

/// A validated, reusable outlier detector.
#[derive(Debug, Clone, Copy)]
pub struct OutlierDetector {
    executor: DetectionExecutor,
}

impl OutlierDetector {
    /// The selected detection method.
    pub fn method(&self) -> OutlierMethod {
        self.executor.config().method
    }

    /// Classify `data`. Accepts anything convertible to [`Value`], so plain
    /// `f64` slices and dirty `Value` rows both work.
    pub fn detect<V>(&self, data: &[V]) -> Result<Classification<f64>, StatsError>
    where
        V: Clone + Into<Value>,
    {
        self.executor.run(data)
    }
}
