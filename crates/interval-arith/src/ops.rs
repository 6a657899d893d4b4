// crates/interval-arith/src/ops.rs
// ============================================================================
// Module: Interval Operations
// Description: Outward-rounded binary operations on intervals.
// Purpose: Provide the arithmetic and lattice operations exposed to hosts.
// Dependencies: crate::interval, crate::rounding
// ============================================================================

//! ## Overview
//! Every operation takes two intervals by value and returns a new interval
//! enclosing all pointwise results. Arithmetic bounds are rounded outward;
//! lattice operations (`hull`, `intersect`, `min`, `max`) are exact.
//!
//! Division follows the closed-interval convention: a divisor of `[0, 0]` is an
//! error, a divisor strictly containing zero yields the whole line, and a
//! divisor with a single zero endpoint yields a half-unbounded result when the
//! dividend has a fixed sign.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::interval::Interval;
use crate::interval::IntervalError;
use crate::rounding::add_down;
use crate::rounding::add_up;
use crate::rounding::div_down;
use crate::rounding::div_up;
use crate::rounding::mul_down;
use crate::rounding::mul_up;

// ============================================================================
// SECTION: Arithmetic
// ============================================================================

impl Interval {
    /// Returns an enclosure of `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Undefined`] when opposite infinities meet.
    pub fn plus(self, other: Self) -> Result<Self, IntervalError> {
        finish(
            "addition",
            add_down(self.lower(), other.lower()),
            add_up(self.upper(), other.upper()),
        )
    }

    /// Returns an enclosure of `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::Undefined`] when equal infinities cancel.
    pub fn minus(self, other: Self) -> Result<Self, IntervalError> {
        let negated = -other;
        finish(
            "subtraction",
            add_down(self.lower(), negated.lower()),
            add_up(self.upper(), negated.upper()),
        )
    }

    /// Returns an enclosure of `self * other`.
    ///
    /// # Errors
    ///
    /// Never fails for valid operands; the signature matches the other
    /// binary operations.
    pub fn times(self, other: Self) -> Result<Self, IntervalError> {
        let corners = [
            (self.lower(), other.lower()),
            (self.lower(), other.upper()),
            (self.upper(), other.lower()),
            (self.upper(), other.upper()),
        ];
        let lower = corners
            .iter()
            .map(|&(a, b)| mul_down(a, b))
            .fold(f64::INFINITY, f64::min);
        let upper = corners
            .iter()
            .map(|&(a, b)| mul_up(a, b))
            .fold(f64::NEG_INFINITY, f64::max);
        finish("multiplication", lower, upper)
    }

    /// Returns an enclosure of `self / other`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::DivisionByZero`] when `other` is `[0, 0]` and
    /// [`IntervalError::Undefined`] when both operands have infinite bounds
    /// that divide to NaN.
    pub fn divide(self, other: Self) -> Result<Self, IntervalError> {
        let (xl, xu) = (self.lower(), self.upper());
        let (yl, yu) = (other.lower(), other.upper());

        if yl == 0.0 && yu == 0.0 {
            return Err(IntervalError::DivisionByZero);
        }
        if xl == 0.0 && xu == 0.0 {
            return Ok(self);
        }
        if yl < 0.0 && yu > 0.0 {
            return Ok(Self::whole());
        }
        if yl == 0.0 {
            return divide_by_nonnegative(xl, xu, yu);
        }
        if yu == 0.0 {
            return divide_by_nonpositive(xl, xu, yl);
        }

        let (lower, upper) = if yl > 0.0 {
            if xu < 0.0 {
                (div_down(xl, yl), div_up(xu, yu))
            } else if xl < 0.0 {
                (div_down(xl, yl), div_up(xu, yl))
            } else {
                (div_down(xl, yu), div_up(xu, yl))
            }
        } else if xu < 0.0 {
            (div_down(xu, yl), div_up(xl, yu))
        } else if xl < 0.0 {
            (div_down(xu, yu), div_up(xl, yu))
        } else {
            (div_down(xu, yu), div_up(xl, yl))
        };
        finish("division", lower, upper)
    }
}

// ============================================================================
// SECTION: Lattice Operations
// ============================================================================

impl Interval {
    /// Returns the smallest interval containing both operands.
    ///
    /// # Errors
    ///
    /// Never fails for valid operands.
    pub fn hull(self, other: Self) -> Result<Self, IntervalError> {
        Self::new(self.lower().min(other.lower()), self.upper().max(other.upper()))
    }

    /// Returns the set intersection of both operands.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyIntersection`] when the operands are
    /// disjoint.
    pub fn intersect(self, other: Self) -> Result<Self, IntervalError> {
        let lower = self.lower().max(other.lower());
        let upper = self.upper().min(other.upper());
        if lower > upper {
            return Err(IntervalError::EmptyIntersection);
        }
        Self::new(lower, upper)
    }

    /// Returns the pointwise minimum of both operands.
    ///
    /// # Errors
    ///
    /// Never fails for valid operands.
    pub fn min(self, other: Self) -> Result<Self, IntervalError> {
        Self::new(self.lower().min(other.lower()), self.upper().min(other.upper()))
    }

    /// Returns the pointwise maximum of both operands.
    ///
    /// # Errors
    ///
    /// Never fails for valid operands.
    pub fn max(self, other: Self) -> Result<Self, IntervalError> {
        Self::new(self.lower().max(other.lower()), self.upper().max(other.upper()))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds a result interval, mapping NaN bounds to [`IntervalError::Undefined`].
fn finish(operation: &'static str, lower: f64, upper: f64) -> Result<Interval, IntervalError> {
    Interval::new(lower, upper).map_err(|_| IntervalError::Undefined {
        operation,
    })
}

/// Divides `[xl, xu]` by `[0, yu]` with `yu > 0`.
fn divide_by_nonnegative(xl: f64, xu: f64, yu: f64) -> Result<Interval, IntervalError> {
    if xu <= 0.0 {
        finish("division", f64::NEG_INFINITY, div_up(xu, yu))
    } else if xl >= 0.0 {
        finish("division", div_down(xl, yu), f64::INFINITY)
    } else {
        Ok(Interval::whole())
    }
}

/// Divides `[xl, xu]` by `[yl, 0]` with `yl < 0`.
fn divide_by_nonpositive(xl: f64, xu: f64, yl: f64) -> Result<Interval, IntervalError> {
    if xu <= 0.0 {
        finish("division", div_down(xu, yl), f64::INFINITY)
    } else if xl >= 0.0 {
        finish("division", f64::NEG_INFINITY, div_up(xl, yl))
    } else {
        Ok(Interval::whole())
    }
}
