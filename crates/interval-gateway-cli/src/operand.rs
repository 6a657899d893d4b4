// crates/interval-gateway-cli/src/operand.rs
// ============================================================================
// Module: CLI Operands
// Description: Parses command-line operand syntax into host values.
// Purpose: Turn `--arg` strings into in-memory host values for operator calls.
// Dependencies: interval-gateway-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Operands are written as `<kind>:<payload>`:
//!
//! - `interval:LO,HI` builds an interval object in the configured host layout.
//! - `scalar:X` builds a real `1x1` double.
//! - `json:<value>` deserializes a [`MemoryValue`] verbatim.
//!
//! Parsing does not check interval bounds. Malformed intervals are reported by
//! the gateway as `invalid_inputs`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use interval_gateway_core::IntervalSchema;
use interval_gateway_core::MemoryValue;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a single operand string.
pub const MAX_OPERAND_LENGTH: usize = 64 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Operand parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// The operand has no `<kind>:` prefix.
    #[error("operand must look like interval:LO,HI or scalar:X or json:VALUE")]
    MissingKind,
    /// The operand prefix is not a known kind.
    #[error("unknown operand kind: {kind}")]
    UnknownKind {
        /// Prefix as written.
        kind: String,
    },
    /// The operand exceeds [`MAX_OPERAND_LENGTH`].
    #[error("operand exceeds {MAX_OPERAND_LENGTH} bytes")]
    TooLong,
    /// A number could not be parsed.
    #[error("invalid number: {text}")]
    InvalidNumber {
        /// Text as written.
        text: String,
    },
    /// An interval operand is not a `LO,HI` pair.
    #[error("interval operand must be LO,HI")]
    IntervalShape,
    /// A JSON operand is not a host value.
    #[error("invalid json operand: {0}")]
    Json(String),
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses one operand string into a host value laid out per `schema`.
///
/// # Errors
///
/// Returns [`OperandError`] when the operand syntax is invalid.
pub fn parse_operand(operand: &str, schema: &IntervalSchema) -> Result<MemoryValue, OperandError> {
    if operand.len() > MAX_OPERAND_LENGTH {
        return Err(OperandError::TooLong);
    }
    let Some((kind, payload)) = operand.split_once(':') else {
        return Err(OperandError::MissingKind);
    };
    match kind {
        "interval" => parse_interval(payload, schema),
        "scalar" => Ok(MemoryValue::double_scalar(parse_number(payload)?)),
        "json" => serde_json::from_str(payload).map_err(|err| OperandError::Json(err.to_string())),
        _ => Err(OperandError::UnknownKind {
            kind: kind.to_string(),
        }),
    }
}

/// Parses an `LO,HI` payload into an interval object.
fn parse_interval(payload: &str, schema: &IntervalSchema) -> Result<MemoryValue, OperandError> {
    let Some((lower, upper)) = payload.split_once(',') else {
        return Err(OperandError::IntervalShape);
    };
    let lower = parse_number(lower)?;
    let upper = parse_number(upper)?;
    Ok(MemoryValue::object(
        schema.class_name.as_str(),
        [
            (schema.lower_field.as_str(), MemoryValue::double_scalar(lower)),
            (schema.upper_field.as_str(), MemoryValue::double_scalar(upper)),
        ],
    ))
}

/// Parses a decimal number, accepting `inf`, `-inf`, and `nan`.
fn parse_number(text: &str) -> Result<f64, OperandError> {
    text.trim().parse::<f64>().map_err(|_| OperandError::InvalidNumber {
        text: text.to_string(),
    })
}
