//! Validation of outlier detection configuration.
//!
//! ## Purpose
//!
//! This module checks a detector configuration before it runs: numeric
//! parameter bounds, parameters that the chosen method would silently
//! ignore, and parameters that were set more than once on the builder.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Static**: All checks are associated functions on a unit struct.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: MAD threshold and standard-deviation range must be
//!   positive and finite.
//! * **Method Support**: `threshold` belongs to MAD, `range` to the
//!   standard-deviation method, and SPSS always strips zeros.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not filter or transform input data.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::engine::executor::OutlierMethod;
use crate::primitives::errors::StatsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for detector configuration.
///
/// All methods return `Result<(), StatsError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the MAD ratio threshold.
    pub fn validate_threshold(threshold: f64) -> Result<(), StatsError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(StatsError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    /// Validate the standard-deviation multiplier.
    pub fn validate_range(range: f64) -> Result<(), StatsError> {
        if !range.is_finite() || range <= 0.0 {
            return Err(StatsError::InvalidRange(range));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that parameters the method does not use were left unset.
    pub fn validate_method_parameters(
        method: OutlierMethod,
        threshold: Option<f64>,
        range: Option<f64>,
        strip_zero: Option<bool>,
    ) -> Result<(), StatsError> {
        let unsupported = |parameter| StatsError::UnsupportedParameter {
            method: method.name(),
            parameter,
        };

        if threshold.is_some() && method != OutlierMethod::Mad {
            return Err(unsupported("threshold"));
        }
        if range.is_some() && method != OutlierMethod::StandardDeviation {
            return Err(unsupported("range"));
        }
        if strip_zero == Some(false) && method == OutlierMethod::Spss {
            return Err(unsupported("strip_zero"));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), StatsError> {
        if let Some(param) = duplicate_param {
            return Err(StatsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
