#![cfg(feature = "dev")]
//! Tests for method selection and detection dispatch.
//!
//! ## Test Organization
//!
//! 1. **Method Selection** - Names, aliases and legacy integer codes
//! 2. **Configuration** - Defaults
//! 3. **Dispatch** - Each method routed to its detector

use std::str::FromStr;

use mathstats_rs::internals::engine::executor::*;
use mathstats_rs::internals::primitives::errors::StatsError;
use mathstats_rs::internals::primitives::partition::Classification;
use mathstats_rs::internals::primitives::value::Value;

// ============================================================================
// Method Selection Tests
// ============================================================================

/// Test parsing of names and aliases, ignoring case.
#[test]
fn test_method_from_str() {
    assert_eq!(OutlierMethod::from_str("mad"), Ok(OutlierMethod::Mad));
    assert_eq!(OutlierMethod::from_str("MAD"), Ok(OutlierMethod::Mad));
    assert_eq!("stdev".parse::<OutlierMethod>(), Ok(OutlierMethod::StandardDeviation));
    assert_eq!("Two_Stdev".parse::<OutlierMethod>(), Ok(OutlierMethod::StandardDeviation));
    assert_eq!("quartiles".parse::<OutlierMethod>(), Ok(OutlierMethod::Quartile));
    assert_eq!(" iqr ".parse::<OutlierMethod>(), Ok(OutlierMethod::Quartile));
    assert_eq!("SPSS".parse::<OutlierMethod>(), Ok(OutlierMethod::Spss));
}

/// Test that unknown names are rejected.
#[test]
fn test_method_from_str_unknown() {
    assert_eq!(
        "median".parse::<OutlierMethod>(),
        Err(StatsError::UnknownMode("median".to_string()))
    );
    assert!("".parse::<OutlierMethod>().is_err());
}

/// Test legacy integer codes.
#[test]
fn test_method_from_code() {
    assert_eq!(OutlierMethod::try_from(1), Ok(OutlierMethod::Mad));
    assert_eq!(OutlierMethod::try_from(2), Ok(OutlierMethod::Quartile));
    assert_eq!(OutlierMethod::try_from(3), Ok(OutlierMethod::StandardDeviation));
    assert_eq!(
        OutlierMethod::try_from(4),
        Err(StatsError::UnknownMode("4".to_string()))
    );
    assert!(OutlierMethod::try_from(0).is_err());
}

/// Test that names survive a display round trip.
#[test]
fn test_method_display() {
    for method in [
        OutlierMethod::Mad,
        OutlierMethod::StandardDeviation,
        OutlierMethod::Quartile,
        OutlierMethod::Spss,
    ] {
        assert_eq!(method.to_string().parse::<OutlierMethod>(), Ok(method));
    }
    assert_eq!(OutlierMethod::StandardDeviation.to_string(), "stdev");
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test default configuration.
#[test]
fn test_config_defaults() {
    let config = DetectionConfig::default();
    assert_eq!(config.method, OutlierMethod::Mad);
    assert_eq!(config.threshold, 3.0);
    assert_eq!(config.range, 2.0);
    assert!(config.strip_zero);

    assert_eq!(DetectionExecutor::new().config(), &config);
}

// ============================================================================
// Dispatch Tests
// ============================================================================

/// Test that two-way methods return a two-way classification.
#[test]
fn test_run_two_way() {
    let data = [1.0, 2.0, 3.0, 4.0, 50.0];
    for method in [
        OutlierMethod::Mad,
        OutlierMethod::Quartile,
        OutlierMethod::StandardDeviation,
    ] {
        let config = DetectionConfig {
            method,
            ..Default::default()
        };
        let result = DetectionExecutor::run_with_config(&data, &config).unwrap();
        assert!(matches!(result, Classification::TwoWay(_)));
        assert_eq!(result.extremes(), None);
        assert_eq!(result.len(), 5);
    }
}

/// Test that SPSS returns a three-way classification.
#[test]
fn test_run_spss() {
    let config = DetectionConfig {
        method: OutlierMethod::Spss,
        ..Default::default()
    };
    let executor = DetectionExecutor::from_config(&config);
    let result = executor.run(&[1.0, 2.0, 3.0, 4.0, 1000.0]).unwrap();
    assert_eq!(result.extremes(), Some(&[1000.0][..]));
    assert_eq!(result.outliers(), &[1.0]);
    assert_eq!(result.inliers(), &[2.0, 3.0, 4.0]);

    assert!(matches!(
        executor.run(&[1.0]),
        Err(StatsError::TooSmall { got: 1, min: 2 })
    ));
}

/// Test that configured parameters reach the detector.
#[test]
fn test_run_parameters() {
    let data = [1.0, 2.0, 3.0, 4.0, 1000.0];
    let config = DetectionConfig {
        threshold: 1.5,
        ..Default::default()
    };
    let result = DetectionExecutor::run_with_config(&data, &config).unwrap();
    assert_eq!(result.outliers(), &[1.0, 1000.0]);

    let row = vec![Value::from(0), Value::from(0), Value::from(0), Value::from(5)];
    let config = DetectionConfig {
        strip_zero: false,
        ..Default::default()
    };
    let result = DetectionExecutor::run_with_config(&row, &config).unwrap();
    assert_eq!(result.outliers(), &[5.0]);
}
