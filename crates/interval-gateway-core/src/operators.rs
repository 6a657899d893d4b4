// crates/interval-gateway-core/src/operators.rs
// ============================================================================
// Module: Built-in Operators
// Description: Named binary interval operations shipped with the gateway.
// Purpose: Bind host operator names to library operations.
// Dependencies: interval-arith
// ============================================================================

//! ## Overview
//! Each built-in operator supplies only a name and a [`BinaryOperation`]; all
//! other call handling is shared by [`crate::gateway::OperatorGateway`]. Names
//! follow the host's element-wise function names (`plus`, `rdivide`, ...).

// ============================================================================
// SECTION: Imports
// ============================================================================

use interval_arith::Interval;
use serde::Deserialize;
use serde::Serialize;

use crate::gateway::BinaryOperation;

// ============================================================================
// SECTION: Operators
// ============================================================================

/// Binary operators available without registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinOperator {
    /// Interval addition.
    Plus,
    /// Interval subtraction.
    Minus,
    /// Interval multiplication.
    Times,
    /// Interval right division.
    Rdivide,
    /// Interval hull.
    Hull,
    /// Interval intersection.
    Intersect,
    /// Bound-wise minimum.
    Min,
    /// Bound-wise maximum.
    Max,
}

impl BuiltinOperator {
    /// Every built-in operator in registration order.
    pub const ALL: [Self; 8] = [
        Self::Plus,
        Self::Minus,
        Self::Times,
        Self::Rdivide,
        Self::Hull,
        Self::Intersect,
        Self::Min,
        Self::Max,
    ];

    /// Returns the operator's host-facing name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Times => "times",
            Self::Rdivide => "rdivide",
            Self::Hull => "hull",
            Self::Intersect => "intersect",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Returns the library operation backing the operator.
    #[must_use]
    pub fn operation(self) -> BinaryOperation {
        match self {
            Self::Plus => Interval::plus,
            Self::Minus => Interval::minus,
            Self::Times => Interval::times,
            Self::Rdivide => Interval::divide,
            Self::Hull => Interval::hull,
            Self::Intersect => Interval::intersect,
            Self::Min => Interval::min,
            Self::Max => Interval::max,
        }
    }

    /// Looks up a built-in operator by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|operator| operator.name() == name)
    }
}
