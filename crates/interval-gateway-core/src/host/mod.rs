// crates/interval-gateway-core/src/host/mod.rs
// ============================================================================
// Module: Host Interfaces
// Description: Backend-agnostic interfaces for host values and construction.
// Purpose: Define the host capabilities the value bridge depends on.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The host environment owns its value representation and its object system.
//! The bridge only needs to inspect a value (class, complexity, dimensions,
//! first real element, nominal type, named properties) and to ask the host to
//! allocate scalars and invoke a named constructor. Implementations must not
//! coerce values while answering these questions.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod memory;

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Host Class
// ============================================================================

/// Storage class of a host value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostClass {
    /// IEEE double precision numeric array.
    Double,
    /// IEEE single precision numeric array.
    Single,
    /// Integer numeric array.
    Integer,
    /// Logical array.
    Logical,
    /// Character array.
    Char,
    /// Instance of a user-defined class.
    Object,
}

impl HostClass {
    /// Returns the stable lowercase label for the class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Single => "single",
            Self::Integer => "integer",
            Self::Logical => "logical",
            Self::Char => "char",
            Self::Object => "object",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Host construction errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host does not know how to construct the requested class.
    #[error("unknown host class: {0}")]
    UnknownClass(String),
    /// The constructor received the wrong number of arguments.
    #[error("constructor for {class_name} expects {expected} arguments, got {actual}")]
    ConstructorArity {
        /// Class whose constructor was invoked.
        class_name: String,
        /// Number of arguments the constructor accepts.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },
    /// The host constructor reported an error.
    #[error("host constructor failed: {0}")]
    Constructor(String),
}

// ============================================================================
// SECTION: Host Value
// ============================================================================

/// Read-only view of a host value.
pub trait HostValue {
    /// Returns the storage class of the value.
    fn class(&self) -> HostClass;

    /// Returns true when the value carries an imaginary part.
    fn is_complex(&self) -> bool;

    /// Returns the value's dimension extents.
    fn dimensions(&self) -> &[usize];

    /// Returns the first real element of a numeric value, if any.
    fn real_scalar(&self) -> Option<f64>;

    /// Returns true when the value is an instance of `class_name`.
    fn is_instance_of(&self, class_name: &str) -> bool;

    /// Reads a named property from the object at `index`.
    fn property(&self, index: usize, name: &str) -> Option<&Self>;
}

// ============================================================================
// SECTION: Host Factory
// ============================================================================

/// Host allocation and constructor capability.
pub trait HostFactory {
    /// Value type produced and consumed by this host.
    type Value: HostValue;

    /// Allocates a real `1x1` double scalar holding `value` exactly.
    fn create_double_scalar(&self, value: f64) -> Self::Value;

    /// Invokes the host's named constructor for `class_name`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the class is unknown or construction fails.
    fn construct(&self, class_name: &str, args: Vec<Self::Value>)
    -> Result<Self::Value, HostError>;
}
