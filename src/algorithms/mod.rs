//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the statistical procedures of the crate:
//! - The four outlier detectors (MAD, standard deviation, quartile, SPSS)
//! - Effect-size measures for two-sample comparisons
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Outlier detection.
pub mod outliers;

/// Pooled standard deviation, Cohen's d, Hedge's g.
pub mod effect_size;
