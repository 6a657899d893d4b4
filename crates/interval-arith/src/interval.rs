// crates/interval-arith/src/interval.rs
// ============================================================================
// Module: Interval Type
// Description: Closed interval value type and its checked constructor.
// Purpose: Guarantee bound ordering at construction time.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! [`Interval`] is an immutable `Copy` pair of bounds. The only way to obtain
//! one is through a checked constructor, so downstream code can rely on
//! `lower <= upper` without re-validating it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::rounding::sub_up;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Interval construction and arithmetic errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalError {
    /// A bound was NaN.
    #[error("interval bound is NaN")]
    NotANumber,
    /// The lower bound exceeded the upper bound.
    #[error("empty interval: lower bound {lower} exceeds upper bound {upper}")]
    Empty {
        /// Rejected lower bound.
        lower: f64,
        /// Rejected upper bound.
        upper: f64,
    },
    /// Division by the degenerate interval `[0, 0]`.
    #[error("division by the zero interval")]
    DivisionByZero,
    /// Intersection of disjoint intervals.
    #[error("intersection of disjoint intervals is empty")]
    EmptyIntersection,
    /// An operation on unbounded intervals has no defined result.
    #[error("{operation} is undefined for the given unbounded intervals")]
    Undefined {
        /// Name of the operation that produced no result.
        operation: &'static str,
    },
}

// ============================================================================
// SECTION: Interval
// ============================================================================

/// Closed interval `[lower, upper]` over `f64`.
///
/// # Invariants
/// - `lower <= upper`.
/// - Neither bound is NaN; infinite bounds are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntervalBounds", into = "IntervalBounds")]
pub struct Interval {
    /// Inclusive lower bound.
    lower: f64,
    /// Inclusive upper bound.
    upper: f64,
}

impl Interval {
    /// Creates an interval from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NotANumber`] when either bound is NaN and
    /// [`IntervalError::Empty`] when `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if lower.is_nan() || upper.is_nan() {
            return Err(IntervalError::NotANumber);
        }
        if lower > upper {
            return Err(IntervalError::Empty {
                lower,
                upper,
            });
        }
        Ok(Self {
            lower,
            upper,
        })
    }

    /// Creates the degenerate interval `[value, value]`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NotANumber`] when `value` is NaN.
    pub fn singleton(value: f64) -> Result<Self, IntervalError> {
        Self::new(value, value)
    }

    /// Returns the whole real line `[-inf, +inf]`.
    #[must_use]
    pub const fn whole() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true when `value` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns true when zero lies within the closed interval.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }

    /// Returns an upper bound on `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        sub_up(self.upper, self.lower)
    }
}

impl std::ops::Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            lower: -self.upper,
            upper: -self.lower,
        }
    }
}

// ============================================================================
// SECTION: Serialization
// ============================================================================

/// Unchecked serialized form of an interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct IntervalBounds {
    /// Serialized lower bound.
    lower: f64,
    /// Serialized upper bound.
    upper: f64,
}

impl TryFrom<IntervalBounds> for Interval {
    type Error = IntervalError;

    fn try_from(bounds: IntervalBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.lower, bounds.upper)
    }
}

impl From<Interval> for IntervalBounds {
    fn from(interval: Interval) -> Self {
        Self {
            lower: interval.lower,
            upper: interval.upper,
        }
    }
}
