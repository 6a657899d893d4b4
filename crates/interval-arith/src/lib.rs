// crates/interval-arith/src/lib.rs
// ============================================================================
// Module: Interval Arith Library
// Description: Closed double-precision intervals with outward-rounded arithmetic.
// Purpose: Provide the interval contract consumed by the gateway crates.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! `interval-arith` provides [`Interval`], a closed interval `[lower, upper]`
//! over IEEE 754 doubles, together with binary operations whose results always
//! enclose the exact real result. Bounds are rounded outward only when the
//! round-to-nearest result was inexact, so exact operations stay tight.
//!
//! Invariants:
//! - Every constructed [`Interval`] satisfies `lower <= upper` and carries no
//!   NaN bound.
//! - Binary operations never return an interval that under-covers the true
//!   result; undefined cases surface as [`IntervalError`] instead.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod interval;
pub mod ops;
mod rounding;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use interval::Interval;
pub use interval::IntervalError;
