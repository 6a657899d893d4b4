// crates/interval-gateway-config/src/lib.rs
// ============================================================================
// Module: Interval Gateway Config Library
// Description: Canonical config model, validation, and artifact generation.
// Purpose: Single source of truth for interval-gateway.toml semantics.
// Dependencies: interval-gateway-core, serde, toml
// ============================================================================

//! ## Overview
//! `interval-gateway-config` defines the configuration model for the interval
//! gateway. It provides strict, fail-closed validation, builders for the
//! registry pieces the configuration selects, and deterministic generators
//! for the config schema and example.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
pub use schema::config_schema;
