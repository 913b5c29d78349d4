//! Type-tag filters applied to datasets before any statistic is computed.
//!
//! ## Purpose
//!
//! This module removes missing markers, booleans, strings and zero-like
//! elements from a [`Value`] sequence. Every filter returns a new vector and
//! preserves the relative order of the elements it keeps.
//!
//! ## Key concepts
//!
//! * **Type strip**: `Null`, `Bool` and `Str` elements are dropped by tag, so
//!   `Bool(false)` and `Int(0)` stay distinguishable at this stage.
//! * **Zero strip**: anything comparing equal to zero under numeric coercion
//!   (`Null`, `false`, `0`, `0.0`) and the empty string is dropped. NaN is kept.
//!
//! ## Non-goals
//!
//! * Filters never fail and never reorder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::value::Value;

// ============================================================================
// Type Filters
// ============================================================================

/// Remove `Null` elements.
pub fn strip_nonetype(data: &[Value]) -> Vec<Value> {
    data.iter().filter(|v| !v.is_null()).cloned().collect()
}

/// Remove boolean elements.
pub fn strip_booleans(data: &[Value]) -> Vec<Value> {
    data.iter()
        .filter(|v| !matches!(v, Value::Bool(_)))
        .cloned()
        .collect()
}

/// Remove string elements.
pub fn strip_strings(data: &[Value]) -> Vec<Value> {
    data.iter()
        .filter(|v| !matches!(v, Value::Str(_)))
        .cloned()
        .collect()
}

/// Remove `Null`, boolean and string elements, leaving only numbers.
pub fn strip_none_bool_string(data: &[Value]) -> Vec<Value> {
    data.iter().filter(|v| v.is_numeric()).cloned().collect()
}

// ============================================================================
// Zero Filter
// ============================================================================

/// Remove zero values.
///
/// Also removes `false`, `Null` and the empty string, which all count as zero.
pub fn remove_zero(data: &[Value]) -> Vec<Value> {
    data.iter().filter(|v| !v.is_zero_like()).cloned().collect()
}

// ============================================================================
// Numeric Projection
// ============================================================================

/// Numbers that survive the type strip (and the zero strip if `strip_zero`).
///
/// This is the cleaned dataset every statistic and detector operates on.
pub fn clean_numeric(data: &[Value], strip_zero: bool) -> Vec<f64> {
    data.iter()
        .filter(|v| !(strip_zero && v.is_zero_like()))
        .filter_map(Value::as_f64)
        .collect()
}
