//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric building blocks:
//! - Type-tag filters that clean dirty datasets
//! - Descriptive statistics (mean, median, standard deviation, percentiles)
//! - Robust scale estimation (MAD) over slices and n-dimensional arrays
//! - Small numeric helpers and the floating-point range type
//!
//! These are reusable building blocks with no detector-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Null, boolean, string and zero filters.
pub mod filters;

/// Mean, median, standard deviation and percentiles.
pub mod descriptive;

/// Median Absolute Deviation (MAD) computation.
pub mod mad;

/// GCD/LCM, rounding, Roman numerals and other helpers.
pub mod numeric;

/// Floating-point range.
pub mod frange;
