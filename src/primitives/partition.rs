//! Result types for outlier classification.
//!
//! ## Purpose
//!
//! This module defines the groups an outlier detector splits a dataset into:
//! a two-way split (outliers, inliers) for the MAD, standard-deviation and
//! quartile methods, and a three-way split (extremes, outliers, inliers) for
//! the SPSS method.
//!
//! ## Invariants
//!
//! * Every filtered input element appears in exactly one group.
//! * Order within each group matches input order.
//!
//! ## Non-goals
//!
//! * This module does not classify values itself (see `algorithms::outliers`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Two-way Partition
// ============================================================================

/// Outliers and inliers of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierPartition<T> {
    /// Values classified as outliers, in input order.
    pub outliers: Vec<T>,

    /// Remaining values, in input order.
    pub inliers: Vec<T>,
}

impl<T> Default for OutlierPartition<T> {
    fn default() -> Self {
        Self {
            outliers: Vec::new(),
            inliers: Vec::new(),
        }
    }
}

impl<T> OutlierPartition<T> {
    /// A partition with no outliers.
    pub fn all_inliers(inliers: Vec<T>) -> Self {
        Self {
            outliers: Vec::new(),
            inliers,
        }
    }

    /// Total number of classified values.
    #[inline]
    pub fn len(&self) -> usize {
        self.outliers.len() + self.inliers.len()
    }

    /// Whether no values were classified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume into `(outliers, inliers)`.
    pub fn into_tuple(self) -> (Vec<T>, Vec<T>) {
        (self.outliers, self.inliers)
    }
}

// ============================================================================
// Three-way Partition
// ============================================================================

/// Extremes, outliers and inliers of a dataset (SPSS two-tier method).
#[derive(Debug, Clone, PartialEq)]
pub struct SpssPartition<T> {
    /// Values outside the extreme fences.
    pub extremes: Vec<T>,

    /// Values outside the outlier fences but inside the extreme fences.
    pub outliers: Vec<T>,

    /// Values inside the outlier fences.
    pub inliers: Vec<T>,
}

impl<T> Default for SpssPartition<T> {
    fn default() -> Self {
        Self {
            extremes: Vec::new(),
            outliers: Vec::new(),
            inliers: Vec::new(),
        }
    }
}

impl<T> SpssPartition<T> {
    /// Total number of classified values.
    #[inline]
    pub fn len(&self) -> usize {
        self.extremes.len() + self.outliers.len() + self.inliers.len()
    }

    /// Whether no values were classified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume into `(extremes, outliers, inliers)`.
    pub fn into_tuple(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        (self.extremes, self.outliers, self.inliers)
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Result of a mode-dispatched detection; the shape depends on the method.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification<T> {
    /// Two-way split (MAD, standard deviation, quartile).
    TwoWay(OutlierPartition<T>),

    /// Three-way split (SPSS).
    ThreeWay(SpssPartition<T>),
}

impl<T> Classification<T> {
    /// Values outside the extreme fences, if the method has that tier.
    pub fn extremes(&self) -> Option<&[T]> {
        match self {
            Self::TwoWay(_) => None,
            Self::ThreeWay(p) => Some(&p.extremes),
        }
    }

    /// Values classified as (non-extreme) outliers.
    pub fn outliers(&self) -> &[T] {
        match self {
            Self::TwoWay(p) => &p.outliers,
            Self::ThreeWay(p) => &p.outliers,
        }
    }

    /// Values that were not flagged.
    pub fn inliers(&self) -> &[T] {
        match self {
            Self::TwoWay(p) => &p.inliers,
            Self::ThreeWay(p) => &p.inliers,
        }
    }

    /// Total number of classified values.
    pub fn len(&self) -> usize {
        match self {
            Self::TwoWay(p) => p.len(),
            Self::ThreeWay(p) => p.len(),
        }
    }

    /// Whether no values were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<OutlierPartition<T>> for Classification<T> {
    fn from(p: OutlierPartition<T>) -> Self {
        Self::TwoWay(p)
    }
}

impl<T> From<SpssPartition<T>> for Classification<T> {
    fn from(p: SpssPartition<T>) -> Self {
        Self::ThreeWay(p)
    }
}

// ============================================================================
// Display
// ============================================================================

fn write_group<T: Display>(f: &mut Formatter<'_>, label: &str, values: &[T]) -> Result {
    write!(f, "  {:<10} {:>5}  [", label, values.len())?;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    writeln!(f, "]")
}

impl<T: Display> Display for OutlierPartition<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f)?;
        writeln!(f, "Groups:")?;
        write_group(f, "Outliers", &self.outliers)?;
        write_group(f, "Inliers", &self.inliers)
    }
}

impl<T: Display> Display for SpssPartition<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f)?;
        writeln!(f, "Groups:")?;
        write_group(f, "Extremes", &self.extremes)?;
        write_group(f, "Outliers", &self.outliers)?;
        write_group(f, "Inliers", &self.inliers)
    }
}

impl<T: Display> Display for Classification<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TwoWay(p) => Display::fmt(p, f),
            Self::ThreeWay(p) => Display::fmt(p, f),
        }
    }
}
