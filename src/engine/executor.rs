//! Dispatch of a detection configuration to the outlier detectors.
//!
//! ## Purpose
//!
//! This module names the four detection methods, holds the resolved
//! configuration a detector runs with, and routes a dataset to the matching
//! algorithm. It is the single place where a method selector (enum, name or
//! legacy integer code) turns into a call.
//!
//! ## Design notes
//!
//! * **Resolved config**: [`DetectionConfig`] carries concrete values; builder
//!   defaults have already been applied.
//! * **Shape-preserving**: SPSS yields a three-way partition, every other
//!   method a two-way one, wrapped in [`Classification`].
//!
//! ## Key concepts
//!
//! * **Legacy codes**: `1` is MAD, `2` quartiles, `3` two standard deviations.
//!
//! ## Non-goals
//!
//! * This module does not validate the configuration (see `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString};

// External dependencies
use core::fmt;
use core::str::FromStr;

// Internal dependencies
use crate::algorithms::outliers::{
    DEFAULT_MAD_THRESHOLD, DEFAULT_STDEV_RANGE, mad_outliers, quartile_outliers, spss_outliers,
    stdev_outliers,
};
use crate::primitives::errors::StatsError;
use crate::primitives::partition::Classification;
use crate::primitives::value::Value;

// ============================================================================
// Outlier Method
// ============================================================================

/// Outlier detection method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutlierMethod {
    /// Median absolute deviation ratio (default).
    #[default]
    Mad,

    /// Distance from the mean in sample standard deviations.
    StandardDeviation,

    /// Quartile fences at `Q3 +/- 3 * IQR`.
    Quartile,

    /// Two-tier SPSS fences (extremes and outliers).
    Spss,
}

impl OutlierMethod {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mad => "mad",
            Self::StandardDeviation => "stdev",
            Self::Quartile => "quartile",
            Self::Spss => "spss",
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutlierMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let is = |candidates: &[&str]| candidates.iter().any(|c| name.eq_ignore_ascii_case(c));

        if is(&["mad"]) {
            Ok(Self::Mad)
        } else if is(&["stdev", "two_stdev", "stdev2"]) {
            Ok(Self::StandardDeviation)
        } else if is(&["quartile", "quartiles", "iqr"]) {
            Ok(Self::Quartile)
        } else if is(&["spss"]) {
            Ok(Self::Spss)
        } else {
            Err(StatsError::UnknownMode(s.to_string()))
        }
    }
}

impl TryFrom<i32> for OutlierMethod {
    type Error = StatsError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Mad),
            2 => Ok(Self::Quartile),
            3 => Ok(Self::StandardDeviation),
            other => Err(StatsError::UnknownMode(format!("{}", other))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one detection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionConfig {
    /// Detection method.
    pub method: OutlierMethod,

    /// MAD ratio threshold (MAD only).
    pub threshold: f64,

    /// Number of standard deviations (standard deviation only).
    pub range: f64,

    /// Whether zeros are stripped before detection.
    pub strip_zero: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            method: OutlierMethod::default(),
            threshold: DEFAULT_MAD_THRESHOLD,
            range: DEFAULT_STDEV_RANGE,
            strip_zero: true,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a [`DetectionConfig`] against datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionExecutor {
    config: DetectionConfig,
}

impl DetectionExecutor {
    /// Create an executor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor from a resolved configuration.
    pub fn from_config(config: &DetectionConfig) -> Self {
        Self { config: *config }
    }

    /// The configuration this executor runs with.
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Classify `data` under the configured method.
    pub fn run<V>(&self, data: &[V]) -> Result<Classification<f64>, StatsError>
    where
        V: Clone + Into<Value>,
    {
        Self::run_with_config(data, &self.config)
    }

    /// Classify `data` under `config`.
    pub fn run_with_config<V>(
        data: &[V],
        config: &DetectionConfig,
    ) -> Result<Classification<f64>, StatsError>
    where
        V: Clone + Into<Value>,
    {
        let partition = match config.method {
            OutlierMethod::Mad => mad_outliers(data, config.strip_zero, config.threshold).into(),
            OutlierMethod::StandardDeviation => {
                stdev_outliers(data, config.strip_zero, config.range).into()
            }
            OutlierMethod::Quartile => quartile_outliers(data, config.strip_zero).into(),
            OutlierMethod::Spss => spss_outliers(data)?.into(),
        };
        Ok(partition)
    }
}
