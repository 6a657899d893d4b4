// crates/interval-gateway-core/src/host/memory.rs
// ============================================================================
// Module: In-Memory Host
// Description: Reference host value model and constructor registry.
// Purpose: Drive the bridge and gateway without a live host environment.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`MemoryValue`] models the two host value shapes the bridge inspects:
//! numeric arrays (class, dimensions, real data, optional imaginary data) and
//! class instances with named properties. [`MemoryHost`] implements
//! [`HostFactory`] over a set of constructible classes and counts constructor
//! invocations so callers can observe allocation behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::host::HostClass;
use crate::host::HostError;
use crate::host::HostFactory;
use crate::host::HostValue;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Dimensions reported for every object value.
const OBJECT_DIMENSIONS: [usize; 2] = [1, 1];

/// Class constructible by a default [`MemoryHost`].
const DEFAULT_CLASS_NAME: &str = "Interval";

/// Constructor properties of the default class, in argument order.
const DEFAULT_CLASS_PROPERTIES: [&str; 2] = ["lower", "upper"];

// ============================================================================
// SECTION: Values
// ============================================================================

/// In-memory host value.
///
/// # Invariants
/// - `real` (and `imag` when present) hold the elements in column-major order.
/// - Object values are single instances; only index `0` has properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemoryValue {
    /// Numeric, logical, or character array.
    Array {
        /// Storage class.
        class: HostClass,
        /// Dimension extents.
        dimensions: Vec<usize>,
        /// Real parts.
        real: Vec<f64>,
        /// Imaginary parts for complex arrays.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        imag: Option<Vec<f64>>,
    },
    /// Instance of a named class.
    Object {
        /// Nominal class name.
        class_name: String,
        /// Property values keyed by property name.
        #[serde(default)]
        properties: BTreeMap<String, MemoryValue>,
    },
}

impl MemoryValue {
    /// Creates a real `1x1` double scalar.
    #[must_use]
    pub fn double_scalar(value: f64) -> Self {
        Self::array(HostClass::Double, vec![1, 1], vec![value])
    }

    /// Creates a complex `1x1` double scalar.
    #[must_use]
    pub fn complex_scalar(real: f64, imag: f64) -> Self {
        Self::Array {
            class: HostClass::Double,
            dimensions: vec![1, 1],
            real: vec![real],
            imag: Some(vec![imag]),
        }
    }

    /// Creates a real array of the given class and shape.
    #[must_use]
    pub const fn array(class: HostClass, dimensions: Vec<usize>, real: Vec<f64>) -> Self {
        Self::Array {
            class,
            dimensions,
            real,
            imag: None,
        }
    }

    /// Creates an object of `class_name` with the given properties.
    #[must_use]
    pub fn object<N, I>(class_name: impl Into<String>, properties: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Self)>,
    {
        Self::Object {
            class_name: class_name.into(),
            properties: properties.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl HostValue for MemoryValue {
    fn class(&self) -> HostClass {
        match self {
            Self::Array {
                class, ..
            } => *class,
            Self::Object {
                ..
            } => HostClass::Object,
        }
    }

    fn is_complex(&self) -> bool {
        matches!(self, Self::Array { imag: Some(_), .. })
    }

    fn dimensions(&self) -> &[usize] {
        match self {
            Self::Array {
                dimensions, ..
            } => dimensions,
            Self::Object {
                ..
            } => &OBJECT_DIMENSIONS,
        }
    }

    fn real_scalar(&self) -> Option<f64> {
        match self {
            Self::Array {
                real, ..
            } => real.first().copied(),
            Self::Object {
                ..
            } => None,
        }
    }

    fn is_instance_of(&self, class_name: &str) -> bool {
        matches!(self, Self::Object { class_name: actual, .. } if actual == class_name)
    }

    fn property(&self, index: usize, name: &str) -> Option<&Self> {
        match self {
            Self::Object {
                properties, ..
            } if index == 0 => properties.get(name),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Host
// ============================================================================

/// In-memory host with a registry of constructible classes.
///
/// # Invariants
/// - Constructors assign arguments to properties in declaration order.
/// - Every `construct` call increments the constructor counter, even on failure.
#[derive(Debug)]
pub struct MemoryHost {
    /// Constructor property lists keyed by class name.
    classes: BTreeMap<String, Vec<String>>,
    /// Number of constructor invocations observed.
    constructor_calls: AtomicUsize,
}

impl MemoryHost {
    /// Creates a host that can construct the default `Interval` class.
    #[must_use]
    pub fn new() -> Self {
        Self::empty().with_class(DEFAULT_CLASS_NAME, DEFAULT_CLASS_PROPERTIES)
    }

    /// Creates a host with no constructible classes.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            classes: BTreeMap::new(),
            constructor_calls: AtomicUsize::new(0),
        }
    }

    /// Adds or replaces a constructible class, returning the host.
    #[must_use]
    pub fn with_class<N, I>(mut self, class_name: impl Into<String>, properties: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = N>,
    {
        self.define_class(class_name, properties);
        self
    }

    /// Adds or replaces a constructible class.
    pub fn define_class<N, I>(&mut self, class_name: impl Into<String>, properties: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = N>,
    {
        self.classes.insert(class_name.into(), properties.into_iter().map(Into::into).collect());
    }

    /// Returns the number of constructor invocations so far.
    #[must_use]
    pub fn constructor_calls(&self) -> usize {
        self.constructor_calls.load(Ordering::Relaxed)
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostFactory for MemoryHost {
    type Value = MemoryValue;

    fn create_double_scalar(&self, value: f64) -> MemoryValue {
        MemoryValue::double_scalar(value)
    }

    fn construct(
        &self,
        class_name: &str,
        args: Vec<MemoryValue>,
    ) -> Result<MemoryValue, HostError> {
        self.constructor_calls.fetch_add(1, Ordering::Relaxed);
        let Some(properties) = self.classes.get(class_name) else {
            return Err(HostError::UnknownClass(class_name.to_string()));
        };
        if properties.len() != args.len() {
            return Err(HostError::ConstructorArity {
                class_name: class_name.to_string(),
                expected: properties.len(),
                actual: args.len(),
            });
        }
        Ok(MemoryValue::Object {
            class_name: class_name.to_string(),
            properties: properties.iter().cloned().zip(args).collect(),
        })
    }
}
