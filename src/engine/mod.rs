//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer checks a detection configuration and runs it:
//! - Fail-fast parameter validation
//! - Dispatch of a validated configuration to the matching detector
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter validation.
pub mod validator;

/// Detection dispatch.
pub mod executor;
