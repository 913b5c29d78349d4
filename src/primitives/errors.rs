//! Error types for statistics, outlier detection and range construction.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate. Errors are raised synchronously to the caller and
//! never carry partial results.
//!
//! ## Design notes
//!
//! * **Flat**: One enum covers data, argument and configuration failures.
//! * **Descriptive**: Variants carry the offending value or parameter name.
//! * **no_std**: `Display` is implemented on `core::fmt`; `std::error::Error`
//!   is only implemented with the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors or retry operations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by `mathstats-rs` operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Dataset has fewer values than the operation requires.
    TooSmall {
        /// Number of values available after filtering.
        got: usize,
        /// Minimum number of values required.
        min: usize,
    },

    /// Input data is unusable (NaN under the `Raise` policy, non-numeric entries).
    InvalidData(String),

    /// An argument has the wrong arity, type or shape.
    InvalidArgument(String),

    /// `FRange` step is zero.
    InvalidStep,

    /// A range bound or step exceeds the precision guard.
    ValueTooLarge {
        /// Name of the offending parameter (`start`, `stop` or `step`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Value is not a member of the range.
    NotFound(f64),

    /// Positional access past the end of the range.
    IndexOutOfRange(isize),

    /// Outlier detection method could not be recognised.
    UnknownMode(String),

    /// Percentile outside `[0, 100]`.
    InvalidPercentile(f64),

    /// MAD threshold is not positive and finite.
    InvalidThreshold(f64),

    /// Standard-deviation multiplier is not positive and finite.
    InvalidRange(f64),

    /// Parameter was configured for a method that does not use it.
    UnsupportedParameter {
        /// Name of the selected method.
        method: &'static str,
        /// Name of the parameter that was set.
        parameter: &'static str,
    },

    /// Builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { got, min } => {
                write!(f, "Dataset too small: got {}, need at least {}", got, min)
            }
            Self::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::InvalidStep => write!(f, "FRange step must not be zero"),
            Self::ValueTooLarge { name, value } => {
                write!(f, "Value {:?} too large for '{}'", value, name)
            }
            Self::NotFound(value) => write!(f, "{:?} is not in range", value),
            Self::IndexOutOfRange(index) => write!(f, "FRange index {} out of range", index),
            Self::UnknownMode(mode) => write!(f, "Unknown outlier mode: {}", mode),
            Self::InvalidPercentile(p) => {
                write!(f, "Invalid percentile: {} (must be in [0, 100])", p)
            }
            Self::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {} (must be > 0 and finite)", t)
            }
            Self::InvalidRange(r) => write!(f, "Invalid range: {} (must be > 0 and finite)", r),
            Self::UnsupportedParameter { method, parameter } => write!(
                f,
                "Method '{}' does not support parameter: {}",
                method, parameter
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}
