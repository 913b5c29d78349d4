//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer holds the data structures every other layer shares:
//! - The crate-wide error type
//! - The tagged dataset element used for dirty input
//! - The partition types returned by outlier detection
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type.
pub mod errors;

/// Tagged dataset elements.
pub mod value;

/// Outlier partitions.
pub mod partition;
