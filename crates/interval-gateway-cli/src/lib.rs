// crates/interval-gateway-cli/src/lib.rs
// ============================================================================
// Module: Interval Gateway CLI Library
// Description: Shared helpers for the interval gateway command-line interface.
// Purpose: Provide reusable components for the CLI binary and tests.
// Dependencies: interval-gateway-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This library houses the CLI message templates and operand parsing. The binary
//! entry point (`src/main.rs`) imports these helpers so output and input
//! handling stay consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Message templates and the `t!` macro.
pub mod messages;
/// Command-line operand parsing.
pub mod operand;
