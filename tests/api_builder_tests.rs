#![cfg(feature = "dev")]
//! Tests for the outlier detection builder.
//!
//! These tests verify the user-facing configuration flow:
//! - Defaults and fluent setters
//! - Duplicate and unsupported parameter errors
//! - Detection on clean and dirty data
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, duplicates, validation
//! 2. **Detection** - Each method through the detector
//! 3. **Prelude** - Public surface

use mathstats_rs::internals::api::*;
use mathstats_rs::prelude::{Mad, Outliers, Quartile, Spss, StandardDeviation};

// ============================================================================
// Builder Tests
// ============================================================================

/// Test that an unconfigured builder detects with MAD.
#[test]
fn test_builder_defaults() {
    let builder = OutliersBuilder::default();
    assert!(builder.method.is_none());
    assert!(builder.threshold.is_none());
    assert!(builder.duplicate_param.is_none());

    let detector = builder.build().unwrap();
    assert_eq!(detector.method(), OutlierMethod::Mad);
}

/// Test that setting a parameter twice fails at build time.
#[test]
fn test_builder_duplicates() {
    let err = Outliers::new().threshold(3.0).threshold(2.0).build().unwrap_err();
    assert_eq!(err, StatsError::DuplicateParameter { parameter: "threshold" });

    let err = Outliers::new().method(Mad).method(Spss).build().unwrap_err();
    assert_eq!(err, StatsError::DuplicateParameter { parameter: "method" });

    let err = Outliers::new()
        .method(StandardDeviation)
        .range(1.0)
        .range(1.0)
        .build()
        .unwrap_err();
    assert_eq!(err, StatsError::DuplicateParameter { parameter: "range" });

    let err = Outliers::new().strip_zero(true).strip_zero(false).build().unwrap_err();
    assert_eq!(err, StatsError::DuplicateParameter { parameter: "strip_zero" });
}

/// Test that parameters the method ignores are rejected.
#[test]
fn test_builder_unsupported() {
    let err = Outliers::new().method(Quartile).threshold(2.0).build().unwrap_err();
    assert_eq!(
        err,
        StatsError::UnsupportedParameter {
            method: "quartile",
            parameter: "threshold"
        }
    );

    let err = Outliers::new().range(2.0).build().unwrap_err();
    assert_eq!(
        err,
        StatsError::UnsupportedParameter {
            method: "mad",
            parameter: "range"
        }
    );

    let err = Outliers::new().method(Spss).strip_zero(false).build().unwrap_err();
    assert!(matches!(err, StatsError::UnsupportedParameter { .. }));
    assert_eq!(
        err.to_string(),
        "Method 'spss' does not support parameter: strip_zero"
    );

    // Order of setters does not matter
    assert!(Outliers::new().threshold(2.0).method(Mad).build().is_ok());
}

/// Test numeric parameter bounds.
#[test]
fn test_builder_invalid_values() {
    assert_eq!(
        Outliers::new().threshold(0.0).build().unwrap_err(),
        StatsError::InvalidThreshold(0.0)
    );
    assert_eq!(
        Outliers::new().method(StandardDeviation).range(-2.0).build().unwrap_err(),
        StatsError::InvalidRange(-2.0)
    );
    assert!(Outliers::new().threshold(f64::NAN).build().is_err());
}

// ============================================================================
// Detection Tests
// ============================================================================

/// Test MAD detection through the builder.
#[test]
fn test_detect_mad() {
    let detector = Outliers::new().method(Mad).threshold(3.0).build().unwrap();
    let result = detector.detect(&[1.0, 2.0, 3.0, 4.0, 1000.0]).unwrap();
    assert_eq!(result.outliers(), &[1000.0]);
    assert_eq!(result.inliers(), &[1.0, 2.0, 3.0, 4.0]);
    assert!(result.extremes().is_none());
}

/// Test the standard-deviation method with a custom range.
#[test]
fn test_detect_stdev() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
    let detector = Outliers::new().method(StandardDeviation).range(1.0).build().unwrap();
    assert_eq!(detector.detect(&data).unwrap().outliers(), &[100.0]);

    let detector = Outliers::new().method(StandardDeviation).range(10.0).build().unwrap();
    assert!(detector.detect(&data).unwrap().outliers().is_empty());
}

/// Test quartile detection on integer data.
#[test]
fn test_detect_quartile() {
    let detector = Outliers::new().method(Quartile).build().unwrap();
    let result = detector.detect(&[1, 2, 3, 4, 50]).unwrap();
    assert_eq!(result.outliers(), &[50.0]);
}

/// Test SPSS detection and its errors.
#[test]
fn test_detect_spss() {
    let detector = Outliers::new().method(Spss).strip_zero(true).build().unwrap();
    let result = detector.detect(&[1.0, 2.0, 3.0, 4.0, 1000.0]).unwrap();
    assert_eq!(result.extremes(), Some(&[1000.0][..]));
    assert_eq!(result.outliers(), &[1.0]);

    assert_eq!(
        detector.detect(&[1.0]).unwrap_err(),
        StatsError::TooSmall { got: 1, min: 2 }
    );
}

/// Test detection on a dirty row.
#[test]
fn test_detect_dirty_rows() {
    let row = vec![
        Value::from(1),
        Value::Null,
        Value::from("n/a"),
        Value::from(2),
        Value::from(false),
        Value::from(0),
        Value::from(3.0),
        Value::from(4),
        Value::from(1000),
    ];

    let detector = Outliers::new().build().unwrap();
    let result = detector.detect(&row).unwrap();
    assert_eq!(result.outliers(), &[1000.0]);
    assert_eq!(result.inliers(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(result.len(), 5);
}

/// Test optional values as missing markers.
#[test]
fn test_detect_optional_values() {
    let detector = Outliers::new().build().unwrap();
    let result = detector.detect(&[Some(1.0), None]).unwrap();
    assert!(result.outliers().is_empty());
    assert_eq!(result.inliers(), &[1.0]);
}

/// Test that a detector can be reused.
#[test]
fn test_detector_reuse() {
    let detector = Outliers::new().build().unwrap();
    let a = detector.detect(&[1.0, 2.0, 3.0, 4.0, 1000.0]).unwrap();
    let b = detector.detect(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(a.outliers().len(), 1);
    assert!(b.outliers().is_empty());
}

// ============================================================================
// Prelude Tests
// ============================================================================

/// Test that the prelude exposes the statistics surface.
#[test]
fn test_prelude_surface() {
    use mathstats_rs::prelude::*;

    assert_eq!(roman(94), "XCIV");
    assert_eq!(magnitude(1234.0), 3);
    assert!(within_one_minute(10.1, 10.5));
    assert_eq!(FRange::new(3.0).unwrap().len(), 3);
    assert_eq!(interpret_d(-0.3).to_string(), "Small Adverse Effect");
    assert_eq!(mean(&[1.0, 3.0]), 2.0);
    assert_eq!(DEFAULT_MAD_THRESHOLD, 3.0);
    assert_eq!(DEFAULT_STDEV_RANGE, 2.0);
}
