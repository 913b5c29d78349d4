#![cfg(feature = "dev")]
//! Tests for outlier detection.
//!
//! These tests verify the four detection policies:
//! - MAD ratio detection
//! - Standard-deviation fences
//! - Quartile fences
//! - Two-tier SPSS fences
//!
//! ## Test Organization
//!
//! 1. **MAD** - Thresholds, zero stripping, degenerate inputs
//! 2. **Standard Deviation** - Range and the negated lower fence
//! 3. **Quartile** - Outer fences on both sides
//! 4. **SPSS** - Extremes, outliers, errors
//! 5. **Partition Properties** - Completeness and order

use mathstats_rs::internals::algorithms::outliers::*;
use mathstats_rs::internals::primitives::errors::StatsError;
use mathstats_rs::internals::primitives::value::Value;

fn spread() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]
}

// ============================================================================
// MAD Tests
// ============================================================================

/// Test that a single gross value is flagged.
#[test]
fn test_mad_outliers_basic() {
    let (outliers, inliers) = mad_outliers(&[1.0, 2.0, 3.0, 4.0, 1000.0], true, 3.0).into_tuple();
    assert_eq!(outliers, vec![1000.0]);
    assert_eq!(inliers, vec![1.0, 2.0, 3.0, 4.0]);
}

/// Test that evenly spread data has no outliers.
#[test]
fn test_mad_outliers_none() {
    let p = mad_outliers(&[1.0, 2.0, 3.0, 4.0, 5.0], true, DEFAULT_MAD_THRESHOLD);
    assert!(p.outliers.is_empty());
    assert_eq!(p.inliers.len(), 5);
}

/// Test that values on both sides are flagged, in input order.
#[test]
fn test_mad_outliers_two_sided() {
    let data = [10.0, 12.0, 11.0, 13.0, 12.0, 11.0, 10.0, 40.0, -30.0];
    let p = mad_outliers(&data, true, 3.0);
    assert_eq!(p.outliers, vec![40.0, -30.0]);
}

/// Test that the threshold controls sensitivity.
#[test]
fn test_mad_outliers_threshold() {
    // Ratios are [2, 1, 0, 1, 997]
    let data = [1.0, 2.0, 3.0, 4.0, 1000.0];
    assert_eq!(mad_outliers(&data, true, 1.5).outliers, vec![1.0, 1000.0]);
    assert!(mad_outliers(&data, true, 1000.0).outliers.is_empty());
}

/// Test zero stripping on dirty rows.
#[test]
fn test_mad_outliers_strip_zero() {
    let row = vec![
        Value::from(0),
        Value::from(0),
        Value::from(0),
        Value::from(5),
        Value::from("x"),
        Value::Null,
    ];

    // Zeros gone: one value left, nothing to compare against
    let p = mad_outliers(&row, true, 3.0);
    assert_eq!(p.inliers, vec![5.0]);
    assert!(p.outliers.is_empty());

    // Zeros kept: median 0 and MAD 0, so 5 has an infinite ratio
    let p = mad_outliers(&row, false, 3.0);
    assert_eq!(p.outliers, vec![5.0]);
    assert_eq!(p.inliers, vec![0.0, 0.0, 0.0]);
}

/// Test single values, empty input and missing markers.
#[test]
fn test_mad_outliers_small() {
    let p = mad_outliers(&[Value::from(1), Value::Null], true, 3.0);
    assert!(p.outliers.is_empty());
    assert_eq!(p.inliers, vec![1.0]);

    let p = mad_outliers::<f64>(&[], true, 3.0);
    assert!(p.is_empty());
}

/// Test that NaN in the data leaves everything as an inlier.
#[test]
fn test_mad_outliers_nan() {
    let p = mad_outliers(&[1.0, 2.0, f64::NAN, 1000.0], true, 3.0);
    assert!(p.outliers.is_empty());
    assert_eq!(p.inliers.len(), 4);
}

// ============================================================================
// Standard Deviation Tests
// ============================================================================

/// Test two standard deviations above the mean.
#[test]
fn test_two_stdev() {
    // mean 14.5, sample sd 30.15, upper fence 74.80
    let p = two_stdev(&spread(), true);
    assert_eq!(p.outliers, vec![100.0]);
    assert_eq!(p.inliers.len(), 9);
}

/// Test that a large outlier inflates the SD enough to hide itself.
#[test]
fn test_stdev_outliers_masking() {
    let p = stdev_outliers(&[1.0, 2.0, 3.0, 4.0, 1000.0], true, 2.0);
    assert!(p.outliers.is_empty());
}

/// Test that the lower fence is the negated upper fence.
#[test]
fn test_stdev_outliers_lower_fence() {
    // mean 95, sd 14.19: upper 123.39, lower -123.39 (not 66.61)
    let data = [100.0, 101.0, 99.0, 100.0, 102.0, 98.0, 100.0, 60.0];
    let p = stdev_outliers(&data, true, 2.0);
    assert!(p.outliers.is_empty());

    let data = [1.0, 1.0, 1.0, 1.0, -50.0];
    let p = stdev_outliers(&data, true, 1.0);
    assert_eq!(p.outliers, vec![-50.0]);
}

/// Test that the range controls sensitivity.
#[test]
fn test_stdev_outliers_range() {
    // One standard deviation: upper fence 44.65
    let p = stdev_outliers(&spread(), true, 1.0);
    assert_eq!(p.outliers, vec![100.0]);

    let p = stdev_outliers(&spread(), true, 10.0);
    assert!(p.outliers.is_empty());
}

/// Test single values and missing markers.
#[test]
fn test_stdev_outliers_small() {
    let p = two_stdev(&[Value::from(1), Value::Null], true);
    assert_eq!(p.into_tuple(), (vec![], vec![1.0]));
}

// ============================================================================
// Quartile Tests
// ============================================================================

/// Test the outer fences around the third quartile.
#[test]
fn test_quartile_outliers() {
    // Q1 = 2, Q3 = 4, fences (-2, 10)
    let p = quartile_outliers(&[1.0, 2.0, 3.0, 4.0, 50.0], true);
    assert_eq!(p.outliers, vec![50.0]);
    assert_eq!(p.inliers, vec![1.0, 2.0, 3.0, 4.0]);
}

/// Test both sides of the fences.
#[test]
fn test_quartile_outliers_two_sided() {
    let data = [10.0, 12.0, 11.0, 13.0, 12.0, 11.0, 10.0, 40.0, -30.0];
    let p = quartile_outliers(&data, true);
    assert_eq!(p.outliers, vec![40.0, -30.0]);
}

/// Test that a value exactly on a fence is flagged.
#[test]
fn test_quartile_outliers_on_fence() {
    // Q1 = 2, Q3 = 4, upper fence 10
    let p = quartile_outliers(&[1.0, 2.0, 3.0, 4.0, 10.0], true);
    assert_eq!(p.outliers, vec![10.0]);
}

/// Test constant data, where every value sits on a zero-width fence.
#[test]
fn test_quartile_outliers_constant() {
    let p = quartile_outliers(&[5.0, 5.0, 5.0], true);
    assert_eq!(p.outliers, vec![5.0, 5.0, 5.0]);
    assert!(p.inliers.is_empty());
}

/// Test single values and missing markers.
#[test]
fn test_quartile_outliers_small() {
    let p = quartile_outliers(&[Value::from(1), Value::Null], true);
    assert_eq!(p.into_tuple(), (vec![], vec![1.0]));
}

// ============================================================================
// SPSS Tests
// ============================================================================

/// Test the three-way split.
#[test]
fn test_spss_outliers() {
    let p = spss_outliers(&[1.0, 2.0, 3.0, 4.0, 1000.0]).unwrap();
    assert_eq!(p.extremes, vec![1000.0]);
    assert_eq!(p.outliers, vec![1.0]);
    assert_eq!(p.inliers, vec![2.0, 3.0, 4.0]);
}

/// Test a dataset with both tiers populated.
#[test]
fn test_spss_outliers_spread() {
    let (extremes, outliers, inliers) = spss_outliers(&spread()).unwrap().into_tuple();
    assert_eq!(extremes, vec![100.0]);
    assert_eq!(outliers, vec![1.0]);
    assert_eq!(inliers.len(), 8);
}

/// Test that zero-like values are skipped and `true` counts as 1.
#[test]
fn test_spss_outliers_dirty() {
    let row = vec![
        Value::from(true),
        Value::from(2),
        Value::from(0),
        Value::from(3),
        Value::from(""),
        Value::from(4),
        Value::Null,
        Value::from(false),
        Value::from(1000),
    ];
    let p = spss_outliers(&row).unwrap();
    assert_eq!(p.extremes, vec![1000.0]);
    assert_eq!(p.outliers, vec![1.0]);
    assert_eq!(p.inliers, vec![2.0, 3.0, 4.0]);
}

/// Test that raw inputs shorter than two are rejected.
#[test]
fn test_spss_outliers_too_small() {
    assert_eq!(
        spss_outliers(&[1.0]),
        Err(StatsError::TooSmall { got: 1, min: 2 })
    );
    assert_eq!(
        spss_outliers::<f64>(&[]),
        Err(StatsError::TooSmall { got: 0, min: 2 })
    );
}

/// Test that text surviving the zero filter is rejected.
#[test]
fn test_spss_outliers_text() {
    let row = vec![Value::from(1), Value::from(2), Value::from("abc")];
    assert!(matches!(spss_outliers(&row), Err(StatsError::InvalidData(_))));
}

/// Test inputs that clean down to nothing or to one value.
#[test]
fn test_spss_outliers_degenerate() {
    let p = spss_outliers(&[0.0, 0.0]).unwrap();
    assert!(p.is_empty());

    let p = spss_outliers(&[Value::from(7), Value::Null]).unwrap();
    assert_eq!(p.len(), 1);
}

/// Test that a long run of zeros is removed entirely.
#[test]
fn test_spss_outliers_zero_run() {
    let p = spss_outliers(&[0, 0, 0, 0, 0, 1, 2, 3]).unwrap();
    assert!(p.extremes.is_empty());
    assert_eq!(p.outliers, vec![1.0]);
    assert_eq!(p.inliers, vec![2.0, 3.0]);
    assert_eq!(p.len(), 3);
}

// ============================================================================
// Partition Property Tests
// ============================================================================

/// Test that every cleaned value lands in exactly one group, in order.
#[test]
fn test_partition_completeness() {
    let data = [
        3.0, -1.0, 250.0, 4.5, 4.0, 0.0, 3.5, -80.0, 5.0, 4.25, 3.75, 12.0,
    ];
    let cleaned: Vec<f64> = data.iter().copied().filter(|&v| v != 0.0).collect();

    let two_way = [
        mad_outliers(&data, true, 3.0),
        stdev_outliers(&data, true, 2.0),
        quartile_outliers(&data, true),
    ];
    for p in two_way {
        assert_eq!(p.len(), cleaned.len());
        let mut merged = p.outliers.clone();
        merged.extend(&p.inliers);
        merged.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut expected = cleaned.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(merged, expected);

        // Each group is a subsequence of the input
        for group in [&p.outliers, &p.inliers] {
            let mut it = cleaned.iter();
            assert!(group.iter().all(|v| it.any(|c| c == v)));
        }
    }

    let spss = spss_outliers(&data).unwrap();
    assert_eq!(spss.len(), cleaned.len());
}
