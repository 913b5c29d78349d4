//! Small numeric helpers.
//!
//! ## Purpose
//!
//! Independent one-off formulas: greatest common divisor and least common
//! multiple, modular inverse, truncating division, Roman numerals, orders of
//! magnitude, integer checks, half-up rounding and log-factorials.
//!
//! ## Non-goals
//!
//! * Arbitrary precision arithmetic; everything works on `i64` and `f64`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::StatsError;
use crate::primitives::value::Value;

// ============================================================================
// Divisibility
// ============================================================================

/// Greatest common divisor by Euclid's algorithm; always non-negative.
///
/// Fails with [`StatsError::InvalidArgument`] when the divisor is `2^63`,
/// as for `gcd(i64::MIN, 0)`.
pub fn gcd(a: i64, b: i64) -> Result<i64, StatsError> {
    i64::try_from(gcd_unsigned(a, b)).map_err(|_| {
        StatsError::InvalidArgument(format!("gcd({}, {}) does not fit in i64", a, b))
    })
}

fn gcd_unsigned(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Greatest common divisor of all `numbers`.
pub fn gcd_array(numbers: &[i64]) -> Result<i64, StatsError> {
    if numbers.len() < 2 {
        return Err(StatsError::TooSmall {
            got: numbers.len(),
            min: 2,
        });
    }
    numbers[1..].iter().try_fold(numbers[0], |acc, &n| gcd(acc, n))
}

/// Least common multiple of all `numbers`.
///
/// Returns 0 if any number is 0.
pub fn lcm(numbers: &[i64]) -> Result<i64, StatsError> {
    let (&first, rest) = numbers.split_first().ok_or(StatsError::TooSmall { got: 0, min: 1 })?;

    let overflow =
        || StatsError::InvalidArgument(format!("least common multiple of {:?} overflows", numbers));

    if numbers.contains(&0) {
        return Ok(0);
    }

    let mut acc = first.checked_abs().ok_or_else(overflow)?;
    for &n in rest {
        let n = n.checked_abs().ok_or_else(overflow)?;
        let g = gcd(acc, n)?;
        acc = (acc / g).checked_mul(n).ok_or_else(overflow)?;
    }
    Ok(acc)
}

/// Modular inverse of `a` modulo `m`: the `x` in `[0, m)` with `a * x % m == 1`.
///
/// Returns `None` when `a` and `m` are not coprime.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m == 0 || gcd_unsigned(a, m) != 1 {
        return None;
    }

    // Extended Euclid
    let (mut u1, mut u3) = (1i128, a as i128);
    let (mut v1, mut v3) = (0i128, m as i128);
    while v3 != 0 {
        let q = u3.div_euclid(v3);
        (u1, v1) = (v1, u1 - q * v1);
        (u3, v3) = (v3, u3 - q * v3);
    }

    Some(u1.rem_euclid(m.abs() as i128) as i64)
}

/// Integer division rounding toward zero (`intdiv(-3, 2) == -1`).
pub fn intdiv(p: f64, q: f64) -> i64 {
    let mut r = Float::floor(p / q);
    if r < 0.0 && q * r != p {
        r += 1.0;
    }
    r as i64
}

// ============================================================================
// Formatting
// ============================================================================

/// Roman numeral for `num` (`roman(94) == "XCIV"`). Zero yields an empty string.
pub fn roman(num: u32) -> String {
    const NUMERALS: [(&str, u32); 13] = [
        ("M", 1000),
        ("CM", 900),
        ("D", 500),
        ("CD", 400),
        ("C", 100),
        ("XC", 90),
        ("L", 50),
        ("XL", 40),
        ("X", 10),
        ("IX", 9),
        ("V", 5),
        ("IV", 4),
        ("I", 1),
    ];

    let mut remaining = num;
    let mut result = String::new();
    for (token, value) in NUMERALS {
        while remaining >= value {
            result.push_str(token);
            remaining -= value;
        }
    }
    result
}

/// Round half away from zero to the precision of a `"0.00"`-style format.
///
/// The number of digits after the decimal point sets the precision;
/// `"0"` rounds to an integer.
pub fn rounders(value: f64, format: &str) -> Result<f64, StatsError> {
    let decimals = match format.split_once('.') {
        None if !format.is_empty() && format.chars().all(|c| c.is_ascii_digit()) => 0,
        Some((int, frac))
            if !int.is_empty()
                && int.chars().all(|c| c.is_ascii_digit())
                && frac.chars().all(|c| c.is_ascii_digit()) =>
        {
            frac.len()
        }
        _ => {
            return Err(StatsError::InvalidArgument(format!(
                "invalid rounding format '{}'",
                format
            )));
        }
    };

    let scale = Float::powi(10.0_f64, decimals as i32);
    Ok(Float::round(value * scale) / scale)
}

// ============================================================================
// Classification Helpers
// ============================================================================

/// Order of magnitude, `floor(log10(|x|))`; zero has magnitude 0.
pub fn magnitude(x: f64) -> i32 {
    if x == 0.0 {
        return 0;
    }
    Float::floor(Float::log10(Float::abs(x))) as i32
}

/// Whether a float holds an integral value.
pub fn is_int(num: f64) -> bool {
    num.is_finite() && num == Float::trunc(num)
}

/// Whether a value can be converted to an integer.
///
/// Numbers and booleans convert (floats by truncation); strings only when
/// they spell an integer literal.
pub fn represents_int(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Bool(_) => true,
        Value::Float(x) => x.is_finite(),
        Value::Str(s) => s.trim().parse::<i64>().is_ok(),
        Value::Null => false,
    }
}

/// Whether `value2` lies strictly within one minute of `value1`.
///
/// A zero or NaN time on either side never matches.
pub fn within_one_minute(value1: f64, value2: f64) -> bool {
    if value1 == 0.0 || value2 == 0.0 {
        return false;
    }
    (value1 - 1.0) < value2 && value2 < (value1 + 1.0)
}

// ============================================================================
// Log-factorial
// ============================================================================

/// `ln(n!)` for `n` in `0..20`.
const LOG_FACTORIALS: [f64; 20] = [
    0.0,
    0.0,
    0.693_147_180_559_945_3,
    1.791_759_469_228_055,
    3.178_053_830_347_945_8,
    4.787_491_742_782_046,
    6.579_251_212_010_101,
    8.525_161_361_065_415,
    10.604_602_902_745_25,
    12.801_827_480_081_469,
    15.104_412_573_075_516,
    17.502_307_845_873_887,
    19.987_214_495_661_885,
    22.552_163_853_123_425,
    25.191_221_182_738_68,
    27.899_271_383_840_89,
    30.671_860_106_080_672,
    33.505_073_450_136_89,
    36.395_445_208_033_05,
    39.339_884_187_199_495,
];

/// Natural log of `x!`.
///
/// Below 20 the (truncated) argument is looked up in a precomputed table;
/// from 20 upwards Stirling's approximation is used.
pub fn log_factorial(x: f64) -> f64 {
    if x < LOG_FACTORIALS.len() as f64 {
        if x < 0.0 {
            return f64::NAN;
        }
        return LOG_FACTORIALS[x as usize];
    }
    x * Float::ln(x) - x + 0.5 * Float::ln(2.0 * core::f64::consts::PI * x)
}
