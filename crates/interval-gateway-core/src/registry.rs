// crates/interval-gateway-core/src/registry.rs
// ============================================================================
// Module: Operator Registry
// Description: Registry of operator gateways keyed by operator name.
// Purpose: Route host calls to gateways with policy checks and auditing.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The operator registry resolves a host call by operator name, enforces the
//! allowlist and denylist policy, and delegates to the matching
//! [`OperatorGateway`]. Lookup and then policy failures happen before any
//! operand is decoded. Every call, successful or not, records exactly one audit event.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;

use crate::audit::CallOutcome;
use crate::audit::GatewayAuditEvent;
use crate::audit::GatewayAuditEventParams;
use crate::audit::GatewayAuditSink;
use crate::audit::NoopAuditSink;
use crate::bridge::IntervalSchema;
use crate::gateway::BinaryOperation;
use crate::gateway::Diagnostic;
use crate::gateway::GatewayError;
use crate::gateway::OperatorGateway;
use crate::gateway::make_gateway;
use crate::host::HostFactory;
use crate::operators::BuiltinOperator;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Operator registry errors.
///
/// # Invariants
/// - `operator` fields hold qualified operator names.
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// No gateway is registered under the name.
    #[error("operator not registered: {operator}")]
    UnknownOperator {
        /// Qualified operator name.
        operator: String,
    },
    /// The access policy rejects the operator.
    #[error("operator blocked by policy: {operator}")]
    Blocked {
        /// Qualified operator name.
        operator: String,
    },
    /// A gateway is already registered under the name.
    #[error("operator already registered: {operator}")]
    Duplicate {
        /// Qualified operator name.
        operator: String,
    },
    /// The gateway rejected the call.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl RegistryError {
    /// Converts the error into a host diagnostic.
    #[must_use]
    pub fn diagnostic(&self) -> Diagnostic {
        let (operator, kind) = match self {
            Self::UnknownOperator {
                operator,
            } => (operator, "unknown_operator"),
            Self::Blocked {
                operator,
            } => (operator, "blocked"),
            Self::Duplicate {
                operator,
            } => (operator, "duplicate"),
            Self::Gateway(err) => return err.diagnostic(),
        };
        Diagnostic {
            identifier: format!("{operator}:{kind}"),
            message: self.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Access Policy
// ============================================================================

/// Access policy controlling which operators may be called.
///
/// # Invariants
/// - `denylist` overrides `allowlist` when both are present.
/// - If `allowlist` is `None`, all operators are allowed unless denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorAccessPolicy {
    /// Optional allowlist of operator names.
    pub allowlist: Option<BTreeSet<String>>,
    /// Explicit denylist of operator names.
    pub denylist: BTreeSet<String>,
}

impl OperatorAccessPolicy {
    /// Returns a policy that permits all operators.
    #[must_use]
    pub const fn allow_all() -> Self {
        Self {
            allowlist: None,
            denylist: BTreeSet::new(),
        }
    }

    /// Returns true when the operator is allowed by policy.
    #[must_use]
    pub fn is_allowed(&self, name: &str) -> bool {
        if self.denylist.contains(name) {
            return false;
        }
        if let Some(allowlist) = &self.allowlist {
            return allowlist.contains(name);
        }
        true
    }
}

impl Default for OperatorAccessPolicy {
    fn default() -> Self {
        Self::allow_all()
    }
}

// ============================================================================
// SECTION: Operator Registry
// ============================================================================

/// Operator gateway registry with policy enforcement.
///
/// # Invariants
/// - Operator names are unique within the registry.
/// - Every registered gateway uses the registry's interval schema.
/// - Access policy is enforced on every call.
pub struct OperatorRegistry {
    /// Gateways keyed by unqualified operator name.
    gateways: BTreeMap<String, OperatorGateway>,
    /// Access control policy for operator usage.
    policy: OperatorAccessPolicy,
    /// Host layout of interval values.
    schema: IntervalSchema,
    /// Sink receiving one event per call.
    audit: Arc<dyn GatewayAuditSink>,
}

impl OperatorRegistry {
    /// Creates an empty registry with the provided policy and audit sink.
    #[must_use]
    pub fn new(policy: OperatorAccessPolicy, audit: Arc<dyn GatewayAuditSink>) -> Self {
        Self {
            gateways: BTreeMap::new(),
            policy,
            schema: IntervalSchema::default(),
            audit,
        }
    }

    /// Creates a registry with every built-in operator registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if built-in names collide.
    pub fn with_builtin_operators(
        policy: OperatorAccessPolicy,
        audit: Arc<dyn GatewayAuditSink>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(policy, audit);
        registry.register_builtin_operators()?;
        Ok(registry)
    }

    /// Replaces the interval schema for this registry and all its gateways.
    #[must_use]
    pub fn with_schema(mut self, schema: IntervalSchema) -> Self {
        self.gateways = std::mem::take(&mut self.gateways)
            .into_iter()
            .map(|(name, gateway)| (name, gateway.with_schema(schema.clone())))
            .collect();
        self.schema = schema;
        self
    }

    /// Registers a gateway for `operation` under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] when the name is already registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        operation: BinaryOperation,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.gateways.contains_key(&name) {
            return Err(RegistryError::Duplicate {
                operator: self.qualify(&name),
            });
        }
        let gateway = make_gateway(name.clone(), operation).with_schema(self.schema.clone());
        self.gateways.insert(name, gateway);
        Ok(())
    }

    /// Registers every built-in operator.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] when a built-in name is taken.
    pub fn register_builtin_operators(&mut self) -> Result<(), RegistryError> {
        for operator in BuiltinOperator::ALL {
            self.register(operator.name(), operator.operation())?;
        }
        Ok(())
    }

    /// Returns registered operator names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.gateways.keys().map(String::as_str)
    }

    /// Returns registered operator names the policy allows, in sorted order.
    pub fn enabled_names(&self) -> impl Iterator<Item = &str> {
        self.names().filter(|name| self.policy.is_allowed(name))
    }

    /// Returns the configured policy.
    #[must_use]
    pub const fn policy(&self) -> &OperatorAccessPolicy {
        &self.policy
    }

    /// Returns the interval schema.
    #[must_use]
    pub const fn schema(&self) -> &IntervalSchema {
        &self.schema
    }

    /// Calls the named operator through its gateway.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownOperator`] when the operator is not
    /// registered, [`RegistryError::Blocked`] when the policy rejects a
    /// registered operator, and [`RegistryError::Gateway`] when the gateway
    /// call fails. Registration is checked before policy, so a misspelled name
    /// is never reported as blocked.
    pub fn call<F: HostFactory>(
        &self,
        name: &str,
        host: &F,
        inputs: &[F::Value],
        requested_outputs: usize,
    ) -> Result<Vec<F::Value>, RegistryError> {
        let result = self.dispatch(name, host, inputs, requested_outputs);
        let (outcome, diagnostic) = match &result {
            Ok(_) => (CallOutcome::Ok, None),
            Err(err) => (CallOutcome::Error, Some(err.diagnostic().identifier)),
        };
        self.audit.record(&GatewayAuditEvent::new(GatewayAuditEventParams {
            operator: name.to_string(),
            outcome,
            diagnostic,
            input_count: inputs.len(),
            requested_outputs,
        }));
        result
    }

    /// Resolves the gateway and invokes it.
    fn dispatch<F: HostFactory>(
        &self,
        name: &str,
        host: &F,
        inputs: &[F::Value],
        requested_outputs: usize,
    ) -> Result<Vec<F::Value>, RegistryError> {
        let Some(gateway) = self.gateways.get(name) else {
            return Err(RegistryError::UnknownOperator {
                operator: self.qualify(name),
            });
        };
        if !self.policy.is_allowed(name) {
            return Err(RegistryError::Blocked {
                operator: self.qualify(name),
            });
        }
        Ok(gateway.invoke(host, inputs, requested_outputs)?)
    }

    /// Returns the qualified form of an operator name.
    fn qualify(&self, name: &str) -> String {
        format!("{}:{name}", self.schema.class_name)
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new(OperatorAccessPolicy::default(), Arc::new(NoopAuditSink))
    }
}
