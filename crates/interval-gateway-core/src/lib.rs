// crates/interval-gateway-core/src/lib.rs
// ============================================================================
// Module: Interval Gateway Core
// Description: Host value bridge, operator gateway, and operator registry.
// Purpose: Let a host environment call interval operations through one contract.
// Dependencies: interval-arith, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate owns the boundary between a host numeric environment and the
//! interval library. The value bridge validates host values and converts them
//! to and from [`interval_arith::Interval`]; the operator gateway applies one
//! binary operation behind a fixed calling convention; the registry routes
//! calls to gateways by operator name with policy checks and audit logging.
//! Invariants:
//! - Host values are untrusted: decoding is strict and never coerces shapes.
//! - Every failure reaches the host as one `(identifier, message)` diagnostic.
//! - Encoding a result invokes the host constructor exactly once.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod bridge;
pub mod gateway;
pub mod host;
pub mod operators;
pub mod registry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::CallOutcome;
pub use audit::FileAuditSink;
pub use audit::GatewayAuditEvent;
pub use audit::GatewayAuditEventParams;
pub use audit::GatewayAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use bridge::DecodeError;
pub use bridge::IntervalSchema;
pub use bridge::decode_interval;
pub use bridge::decode_scalar;
pub use bridge::encode_interval;
pub use gateway::AritySlot;
pub use gateway::BinaryOperation;
pub use gateway::Diagnostic;
pub use gateway::GatewayError;
pub use gateway::OperatorGateway;
pub use gateway::make_gateway;
pub use host::HostClass;
pub use host::HostError;
pub use host::HostFactory;
pub use host::HostValue;
pub use host::memory::MemoryHost;
pub use host::memory::MemoryValue;
pub use operators::BuiltinOperator;
pub use registry::OperatorAccessPolicy;
pub use registry::OperatorRegistry;
pub use registry::RegistryError;
