//! Tagged dataset elements for dirty, row-oriented input.
//!
//! ## Purpose
//!
//! Rows handed over by a tabular layer mix numbers with missing markers,
//! booleans and text. [`Value`] keeps the type tag of every element so that
//! the filters can tell a boolean `false` or a numeric zero apart from a
//! missing entry, and conflate them where the zero filter requires it.
//!
//! ## Key concepts
//!
//! * **Numeric**: `Int` and `Float` (NaN included) are numeric.
//! * **Zero-like**: anything that compares equal to zero under numeric
//!   coercion (`Null`, `Bool(false)`, `0`, `0.0`) plus the empty string.
//!
//! ## Invariants
//!
//! * Conversions never fail; unrepresentable integers become `Float`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

// ============================================================================
// Value
// ============================================================================

/// A single element of a dataset before filtering.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Missing entry.
    #[default]
    Null,

    /// Boolean flag.
    Bool(bool),

    /// Integer number.
    Int(i64),

    /// Floating-point number, possibly NaN.
    Float(f64),

    /// Text.
    Str(String),
}

impl Value {
    /// Numeric content of `Int` and `Float` values.
    ///
    /// Booleans, strings and `Null` return `None`.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Int(i) => Some(i as f64),
            Self::Float(x) => Some(x),
            _ => None,
        }
    }

    /// Numeric coercion as a numeric array constructor would apply it.
    ///
    /// `Null` becomes NaN, booleans become 0 or 1, strings are parsed.
    pub fn coerce_f64(&self) -> Option<f64> {
        match self {
            Self::Null => Some(f64::NAN),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(i) => Some(*i as f64),
            Self::Float(x) => Some(*x),
            Self::Str(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Returns `true` for `Int` and `Float` values.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns `true` for `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for floating-point NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Float(x) if x.is_nan())
    }

    /// Returns `true` when the value is dropped by the zero filter.
    pub fn is_zero_like(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !*b,
            Self::Int(i) => *i == 0,
            Self::Float(x) => *x == 0.0,
            Self::Str(s) => s.is_empty(),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(x as f64)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Int(i as i64)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::Int(i),
            Err(_) => Self::Float(i as f64),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}
