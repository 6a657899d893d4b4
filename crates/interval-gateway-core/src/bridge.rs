// crates/interval-gateway-core/src/bridge.rs
// ============================================================================
// Module: Value Bridge
// Description: Conversion between host values and library intervals.
// Purpose: Validate host operands strictly and build host results.
// Dependencies: interval-arith, serde, thiserror
// ============================================================================

//! ## Overview
//! Decoding is strict: a scalar must be a real `1x1` double and an interval
//! must be a nominal instance of the configured class exposing both bound
//! properties. Nothing is coerced. Bound ordering is enforced by the library's
//! checked constructor, not by a second check here. Encoding allocates the two
//! bound scalars and calls the host constructor exactly once.
//!
//! Security posture: host values are untrusted inputs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use interval_arith::Interval;
use interval_arith::IntervalError;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::host::HostClass;
use crate::host::HostError;
use crate::host::HostFactory;
use crate::host::HostValue;

// ============================================================================
// SECTION: Schema
// ============================================================================

/// Host-side layout of an interval object.
///
/// # Invariants
/// - `lower_field` and `upper_field` name distinct properties.
/// - The host constructor for `class_name` takes `(lower, upper)` in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSchema {
    /// Nominal class name of host intervals.
    pub class_name: String,
    /// Property holding the lower bound.
    pub lower_field: String,
    /// Property holding the upper bound.
    pub upper_field: String,
}

impl Default for IntervalSchema {
    fn default() -> Self {
        Self {
            class_name: "Interval".to_string(),
            lower_field: "lower".to_string(),
            upper_field: "upper".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Host value decoding errors.
///
/// # Invariants
/// - Display strings are the user-visible diagnostics forwarded to the host.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Value is complex or not double precision.
    #[error("Input not real double")]
    TypeMismatch {
        /// Class of the rejected value.
        class: HostClass,
        /// Whether the rejected value was complex.
        complex: bool,
    },
    /// Value is not a `1x1` scalar.
    #[error("Input not scalar")]
    ShapeMismatch {
        /// Dimensions of the rejected value.
        dimensions: Vec<usize>,
    },
    /// Value is not an instance of the interval class.
    #[error("Input is not an {class_name} object")]
    NotAnInterval {
        /// Expected nominal class.
        class_name: String,
    },
    /// A bound property is absent.
    #[error("Input doesn't contain required fields")]
    MissingField {
        /// Name of the first missing property.
        field: String,
    },
    /// The decoded bounds do not form an interval.
    #[error("{0}")]
    InvalidBounds(#[from] IntervalError),
}

// ============================================================================
// SECTION: Decoding
// ============================================================================

/// Decodes a real `1x1` double scalar.
///
/// # Errors
///
/// Returns [`DecodeError::TypeMismatch`] when the value is complex or not a
/// double, and [`DecodeError::ShapeMismatch`] when it is not `1x1`. Type is
/// checked before shape.
pub fn decode_scalar<V: HostValue + ?Sized>(value: &V) -> Result<f64, DecodeError> {
    let class = value.class();
    let complex = value.is_complex();
    if class != HostClass::Double || complex {
        return Err(DecodeError::TypeMismatch {
            class,
            complex,
        });
    }
    let dimensions = value.dimensions();
    if dimensions != [1, 1] {
        return Err(DecodeError::ShapeMismatch {
            dimensions: dimensions.to_vec(),
        });
    }
    value.real_scalar().ok_or_else(|| DecodeError::ShapeMismatch {
        dimensions: dimensions.to_vec(),
    })
}

/// Decodes a host interval object.
///
/// # Errors
///
/// Returns [`DecodeError::NotAnInterval`] on a nominal class mismatch,
/// [`DecodeError::MissingField`] when a bound property is absent, any
/// [`decode_scalar`] error for a malformed bound, and
/// [`DecodeError::InvalidBounds`] when the library rejects the bounds.
pub fn decode_interval<V: HostValue>(
    value: &V,
    schema: &IntervalSchema,
) -> Result<Interval, DecodeError> {
    if !value.is_instance_of(&schema.class_name) {
        return Err(DecodeError::NotAnInterval {
            class_name: schema.class_name.clone(),
        });
    }
    let lower = value.property(0, &schema.lower_field);
    let upper = value.property(0, &schema.upper_field);
    let (Some(lower), Some(upper)) = (lower, upper) else {
        let field = if lower.is_none() { &schema.lower_field } else { &schema.upper_field };
        return Err(DecodeError::MissingField {
            field: field.clone(),
        });
    };
    let lower = decode_scalar(lower)?;
    let upper = decode_scalar(upper)?;
    Ok(Interval::new(lower, upper)?)
}

// ============================================================================
// SECTION: Encoding
// ============================================================================

/// Builds a host interval holding the bounds of `interval` exactly.
///
/// # Errors
///
/// Returns [`HostError`] unchanged when the host constructor fails.
pub fn encode_interval<F: HostFactory>(
    host: &F,
    schema: &IntervalSchema,
    interval: Interval,
) -> Result<F::Value, HostError> {
    let lower = host.create_double_scalar(interval.lower());
    let upper = host.create_double_scalar(interval.upper());
    host.construct(&schema.class_name, vec![lower, upper])
}

// ============================================================================
// SECTION: Tests
// ============================================================================
