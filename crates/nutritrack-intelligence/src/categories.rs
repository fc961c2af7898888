// ABOUTME: Ordered range tables that classify BMI and waist-to-height ratio
// ABOUTME: Linear first-match scan with strict upper bounds, plus table well-formedness checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category tables
//!
//! A table is a contiguous, ascending sequence of `[min, max)` ranges starting
//! at zero whose last range is unbounded. Classification returns the first
//! range whose `max` strictly exceeds the value, so a value sitting exactly on
//! a boundary lands in the higher category.

use crate::config::ConfigError;

/// One labelled `[min, max)` interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound (`f64::INFINITY` for the last range)
    pub max: f64,
    /// Category label
    pub label: &'static str,
}

/// Ordered lookup table of category ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTable {
    ranges: &'static [CategoryRange],
}

/// BMI categories (WHO adult cut-offs)
pub const BMI_CATEGORIES: CategoryTable = CategoryTable {
    ranges: &[
        CategoryRange {
            min: 0.0,
            max: 18.5,
            label: "Underweight",
        },
        CategoryRange {
            min: 18.5,
            max: 25.0,
            label: "Normal",
        },
        CategoryRange {
            min: 25.0,
            max: 30.0,
            label: "Overweight",
        },
        CategoryRange {
            min: 30.0,
            max: f64::INFINITY,
            label: "Obese",
        },
    ],
};

/// Waist-to-height ratio categories
pub const WHTR_CATEGORIES: CategoryTable = CategoryTable {
    ranges: &[
        CategoryRange {
            min: 0.0,
            max: 0.42,
            label: "Low",
        },
        CategoryRange {
            min: 0.42,
            max: 0.52,
            label: "Moderate",
        },
        CategoryRange {
            min: 0.52,
            max: f64::INFINITY,
            label: "High",
        },
    ],
};

impl CategoryTable {
    /// Wrap a static range list
    #[must_use]
    pub const fn new(ranges: &'static [CategoryRange]) -> Self {
        Self { ranges }
    }

    /// Ranges in ascending order
    #[must_use]
    pub const fn ranges(&self) -> &'static [CategoryRange] {
        self.ranges
    }

    /// Label of the last (unbounded) range, used when no range matches
    #[must_use]
    pub fn terminal_label(&self) -> &'static str {
        self.ranges.last().map_or("", |range| range.label)
    }

    /// Severity rank of the matching range (0 = first range)
    ///
    /// Values that match no range (NaN) rank as the terminal range.
    #[must_use]
    pub fn rank(&self, value: f64) -> usize {
        self.ranges
            .iter()
            .position(|range| value < range.max)
            .unwrap_or_else(|| self.ranges.len().saturating_sub(1))
    }

    /// Label of the first range whose upper bound strictly exceeds `value`
    #[must_use]
    pub fn classify(&self, value: f64) -> &'static str {
        self.ranges
            .iter()
            .find(|range| value < range.max)
            .map_or_else(|| self.terminal_label(), |range| range.label)
    }

    /// Severity rank of a label, if it belongs to this table
    #[must_use]
    pub fn rank_of_label(&self, label: &str) -> Option<usize> {
        self.ranges.iter().position(|range| range.label == label)
    }

    /// Check that the ranges start at zero, are contiguous and ascending, and
    /// that the last one is unbounded
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` describing the first violation found
    // Boundaries are literal constants, so exact comparison is intended
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(first) = self.ranges.first() else {
            return Err(ConfigError::InvalidRange("category table must not be empty"));
        };
        if first.min != 0.0 {
            return Err(ConfigError::InvalidRange(
                "first category range must start at 0",
            ));
        }
        for range in self.ranges {
            if range.min >= range.max {
                return Err(ConfigError::InvalidRange(
                    "category range min must be < max",
                ));
            }
        }
        for pair in self.ranges.windows(2) {
            if pair[0].max != pair[1].min {
                return Err(ConfigError::InvalidRange(
                    "category ranges must be contiguous",
                ));
            }
        }
        if self.ranges.last().is_some_and(|last| last.max.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "last category range must be unbounded",
            ));
        }
        Ok(())
    }
}
