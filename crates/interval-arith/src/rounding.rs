// crates/interval-arith/src/rounding.rs
// ============================================================================
// Module: Directed Rounding
// Description: Round-down and round-up primitives for double arithmetic.
// Purpose: Produce outward-rounded bounds without changing the FPU mode.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Each primitive computes the round-to-nearest result, classifies where the
//! exact result lies relative to it, and steps one ulp outward only when the
//! exact result is on the wrong side. Error-free transformations (two-sum and
//! fused multiply-add) classify sums, products, and quotients exactly outside
//! the subnormal range; inside it the result is always pushed outward.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Smallest magnitude for which fused multiply-add residuals are exact.
const EXACT_RESIDUAL_LIMIT: f64 = f64::MIN_POSITIVE * 9_007_199_254_740_992.0;

// ============================================================================
// SECTION: Residual Classification
// ============================================================================

/// Position of the exact result relative to the rounded-to-nearest result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Residual {
    /// The rounded result is exact.
    Exact,
    /// The exact result is greater than the rounded result.
    Above,
    /// The exact result is less than the rounded result.
    Below,
    /// The position could not be determined.
    Unknown,
}

impl Residual {
    /// Classifies a residual `exact - nearest` by its sign.
    fn from_sign(residual: f64) -> Self {
        if residual > 0.0 {
            Self::Above
        } else if residual < 0.0 {
            Self::Below
        } else if residual == 0.0 {
            Self::Exact
        } else {
            Self::Unknown
        }
    }

    /// Classifies an overflowed result whose exact value is finite.
    fn overflowed(nearest: f64) -> Self {
        if nearest > 0.0 { Self::Below } else { Self::Above }
    }
}

/// Returns `nearest` or the next double below it, whichever is a lower bound.
fn settle_down(nearest: f64, residual: Residual) -> f64 {
    match residual {
        Residual::Exact | Residual::Above => nearest,
        Residual::Below | Residual::Unknown => nearest.next_down(),
    }
}

/// Returns `nearest` or the next double above it, whichever is an upper bound.
fn settle_up(nearest: f64, residual: Residual) -> f64 {
    match residual {
        Residual::Exact | Residual::Below => nearest,
        Residual::Above | Residual::Unknown => nearest.next_up(),
    }
}

// ============================================================================
// SECTION: Classifiers
// ============================================================================

/// Rounds `a + b` to nearest and classifies the exact sum.
fn classify_sum(a: f64, b: f64) -> (f64, Residual) {
    let sum = a + b;
    if sum.is_nan() {
        return (sum, Residual::Exact);
    }
    if sum.is_infinite() {
        if a.is_infinite() || b.is_infinite() {
            return (sum, Residual::Exact);
        }
        return (sum, Residual::overflowed(sum));
    }
    let b_virtual = sum - a;
    let a_virtual = sum - b_virtual;
    let residual = (a - a_virtual) + (b - b_virtual);
    (sum, Residual::from_sign(residual))
}

/// Rounds `a * b` to nearest and classifies the exact product.
///
/// A zero factor yields an exact zero even against an infinite factor.
fn classify_product(a: f64, b: f64) -> (f64, Residual) {
    if a == 0.0 || b == 0.0 {
        return (0.0, Residual::Exact);
    }
    let product = a * b;
    if product.is_infinite() {
        if a.is_infinite() || b.is_infinite() {
            return (product, Residual::Exact);
        }
        return (product, Residual::overflowed(product));
    }
    if product.abs() < EXACT_RESIDUAL_LIMIT {
        return (product, Residual::Unknown);
    }
    let residual = a.mul_add(b, -product);
    (product, Residual::from_sign(residual))
}

/// Rounds `a / b` to nearest and classifies the exact quotient.
fn classify_quotient(a: f64, b: f64) -> (f64, Residual) {
    let quotient = a / b;
    if quotient.is_nan() {
        return (quotient, Residual::Exact);
    }
    if a == 0.0 || a.is_infinite() || b.is_infinite() {
        return (quotient, Residual::Exact);
    }
    if quotient.is_infinite() {
        return (quotient, Residual::overflowed(quotient));
    }
    if quotient.abs() < EXACT_RESIDUAL_LIMIT || a.abs() < EXACT_RESIDUAL_LIMIT {
        return (quotient, Residual::Unknown);
    }
    let remainder = -quotient.mul_add(b, -a);
    let residual = if b > 0.0 { remainder } else { -remainder };
    (quotient, Residual::from_sign(residual))
}

// ============================================================================
// SECTION: Directed Operations
// ============================================================================

/// Returns the largest double not greater than `a + b`.
pub(crate) fn add_down(a: f64, b: f64) -> f64 {
    let (nearest, residual) = classify_sum(a, b);
    settle_down(nearest, residual)
}

/// Returns the smallest double not less than `a + b`.
pub(crate) fn add_up(a: f64, b: f64) -> f64 {
    let (nearest, residual) = classify_sum(a, b);
    settle_up(nearest, residual)
}

/// Returns the smallest double not less than `a - b`.
pub(crate) fn sub_up(a: f64, b: f64) -> f64 {
    add_up(a, -b)
}

/// Returns the largest double not greater than `a * b`.
pub(crate) fn mul_down(a: f64, b: f64) -> f64 {
    let (nearest, residual) = classify_product(a, b);
    settle_down(nearest, residual)
}

/// Returns the smallest double not less than `a * b`.
pub(crate) fn mul_up(a: f64, b: f64) -> f64 {
    let (nearest, residual) = classify_product(a, b);
    settle_up(nearest, residual)
}

/// Returns the largest double not greater than `a / b`.
pub(crate) fn div_down(a: f64, b: f64) -> f64 {
    let (nearest, residual) = classify_quotient(a, b);
    settle_down(nearest, residual)
}

/// Returns the smallest double not less than `a / b`.
pub(crate) fn div_up(a: f64, b: f64) -> f64 {
    let (nearest, residual) = classify_quotient(a, b);
    settle_up(nearest, residual)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
