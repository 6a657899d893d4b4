// crates/interval-gateway-core/src/gateway.rs
// ============================================================================
// Module: Operator Gateway
// Description: Generic host entry point for binary interval operations.
// Purpose: Share arity checks, decoding, and encoding across all operators.
// Dependencies: interval-arith, serde, thiserror
// ============================================================================

//! ## Overview
//! An [`OperatorGateway`] wraps one [`BinaryOperation`] behind the host calling
//! convention: exactly two inputs, at most one requested output, one result.
//! Each call is a single linear pass with fail-fast checkpoints in a fixed
//! order: input count, output count, operand decoding, the operation itself,
//! then result encoding. Failures stay typed as [`GatewayError`] until the
//! outermost boundary converts them to a host [`Diagnostic`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use interval_arith::Interval;
use interval_arith::IntervalError;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::bridge::DecodeError;
use crate::bridge::IntervalSchema;
use crate::bridge::decode_interval;
use crate::bridge::encode_interval;
use crate::host::HostError;
use crate::host::HostFactory;
use crate::host::HostValue;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Largest output count a caller may request.
pub const MAX_REQUESTED_OUTPUTS: usize = 1;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Binary interval operation hosted by a gateway.
pub type BinaryOperation = fn(Interval, Interval) -> Result<Interval, IntervalError>;

/// Call-shape slot violated by an arity error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AritySlot {
    /// Positional inputs.
    Inputs,
    /// Requested outputs.
    Outputs,
}

impl AritySlot {
    /// Returns the diagnostic identifier suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Inputs => "nrhs",
            Self::Outputs => "nlhs",
        }
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Inputs => "Two inputs required.",
            Self::Outputs => "One output required.",
        }
    }
}

/// Host-facing diagnostic: a stable identifier plus a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Identifier of the form `<Operator>:<kind>`.
    pub identifier: String,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.identifier, self.message)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Gateway invocation errors.
///
/// # Invariants
/// - `operator` is the qualified operator name, e.g. `Interval:plus`.
/// - Display strings are the host-visible messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// Wrong number of inputs or requested outputs.
    #[error("{}", .slot.message())]
    Arity {
        /// Qualified operator name.
        operator: String,
        /// Violated call-shape slot.
        slot: AritySlot,
    },
    /// An operand failed to decode.
    #[error("{source}")]
    InvalidInput {
        /// Qualified operator name.
        operator: String,
        /// Underlying decode failure.
        source: DecodeError,
    },
    /// The interval library rejected the operation.
    #[error("{source}")]
    Operation {
        /// Qualified operator name.
        operator: String,
        /// Underlying library failure.
        source: IntervalError,
    },
    /// The host failed to construct the result.
    #[error("{source}")]
    Host {
        /// Qualified operator name.
        operator: String,
        /// Underlying host failure.
        source: HostError,
    },
}

impl GatewayError {
    /// Returns the qualified operator name the error belongs to.
    #[must_use]
    pub fn operator(&self) -> &str {
        match self {
            Self::Arity {
                operator, ..
            }
            | Self::InvalidInput {
                operator, ..
            }
            | Self::Operation {
                operator, ..
            }
            | Self::Host {
                operator, ..
            } => operator,
        }
    }

    /// Returns the diagnostic identifier suffix for this error.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Arity {
                slot, ..
            } => slot.suffix(),
            Self::InvalidInput {
                ..
            } => "invalid_inputs",
            Self::Operation {
                ..
            } => "operation_failed",
            Self::Host {
                ..
            } => "host_error",
        }
    }

    /// Returns the stable diagnostic identifier.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.operator(), self.kind())
    }

    /// Converts the error into a host diagnostic.
    #[must_use]
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic {
            identifier: self.identifier(),
            message: self.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Gateway
// ============================================================================

/// Host entry point for one binary interval operation.
///
/// # Invariants
/// - Holds no mutable state; concurrent calls are independent.
/// - Only the operation differs between gateways.
#[derive(Debug, Clone)]
pub struct OperatorGateway {
    /// Unqualified operator name.
    name: String,
    /// Operation applied to decoded operands.
    operation: BinaryOperation,
    /// Host layout of interval values.
    schema: IntervalSchema,
}

/// Builds a gateway for `operation` using the default interval schema.
#[must_use]
pub fn make_gateway(name: impl Into<String>, operation: BinaryOperation) -> OperatorGateway {
    OperatorGateway {
        name: name.into(),
        operation,
        schema: IntervalSchema::default(),
    }
}

impl OperatorGateway {
    /// Replaces the interval schema used for decoding and encoding.
    #[must_use]
    pub fn with_schema(mut self, schema: IntervalSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Returns the unqualified operator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the qualified operator name used in diagnostics.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.schema.class_name, self.name)
    }

    /// Returns the interval schema.
    #[must_use]
    pub const fn schema(&self) -> &IntervalSchema {
        &self.schema
    }

    /// Invokes the operation through the host calling convention.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Arity`] for a wrong input count or too many
    /// requested outputs, [`GatewayError::InvalidInput`] when an operand fails
    /// to decode, [`GatewayError::Operation`] when the library rejects the
    /// operation, and [`GatewayError::Host`] when result construction fails.
    pub fn invoke<F: HostFactory>(
        &self,
        host: &F,
        inputs: &[F::Value],
        requested_outputs: usize,
    ) -> Result<Vec<F::Value>, GatewayError> {
        let [left, right] = inputs else {
            return Err(self.arity(AritySlot::Inputs));
        };
        if requested_outputs > MAX_REQUESTED_OUTPUTS {
            return Err(self.arity(AritySlot::Outputs));
        }
        let left = self.decode(left)?;
        let right = self.decode(right)?;
        let result = (self.operation)(left, right).map_err(|source| GatewayError::Operation {
            operator: self.qualified_name(),
            source,
        })?;
        let output = encode_interval(host, &self.schema, result).map_err(|source| {
            GatewayError::Host {
                operator: self.qualified_name(),
                source,
            }
        })?;
        Ok(vec![output])
    }

    /// Decodes one operand, tagging failures with this operator.
    fn decode<V: HostValue>(&self, value: &V) -> Result<Interval, GatewayError> {
        decode_interval(value, &self.schema).map_err(|source| GatewayError::InvalidInput {
            operator: self.qualified_name(),
            source,
        })
    }

    /// Builds an arity error for this operator.
    fn arity(&self, slot: AritySlot) -> GatewayError {
        GatewayError::Arity {
            operator: self.qualified_name(),
            slot,
        }
    }
}
