// crates/interval-gateway-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builders for interval-gateway.toml.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: interval-gateway-core, serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for interval gateway configuration.
//! Limits and defaults come from the config model so the two cannot drift.

use interval_gateway_core::BuiltinOperator;
use serde_json::Value;
use serde_json::json;

use crate::config::MAX_IDENTIFIER_LENGTH;
use crate::config::MAX_TOTAL_PATH_LENGTH;
use crate::config::default_class_name;
use crate::config::default_lower_field;
use crate::config::default_upper_field;

/// Returns the JSON schema for `interval-gateway.toml`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "interval-gateway://schemas/config.schema.json",
        "title": "Interval Gateway Configuration",
        "description": "Host layout, operator policy, and audit settings for the interval gateway.",
        "type": "object",
        "properties": {
            "host": host_config_schema(),
            "operators": operators_config_schema(),
            "audit": audit_config_schema()
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Sections
// ============================================================================

/// Schema for the host layout section.
fn host_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Host-side layout of interval objects.",
        "properties": {
            "class_name": schema_for_identifier("Nominal class name of host intervals.", &default_class_name()),
            "lower_field": schema_for_identifier("Property holding the lower bound.", &default_lower_field()),
            "upper_field": schema_for_identifier("Property holding the upper bound.", &default_upper_field())
        },
        "additionalProperties": false
    })
}

/// Schema for the operator policy section.
fn operators_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Operator allow/deny policy. The denylist wins.",
        "properties": {
            "allowlist": {
                "type": "array",
                "items": schema_for_operator_name(),
                "description": "Operators allowed when present; all operators when absent."
            },
            "denylist": {
                "type": "array",
                "items": schema_for_operator_name(),
                "default": [],
                "description": "Operators denied regardless of the allowlist."
            }
        },
        "additionalProperties": false
    })
}

/// Schema for the audit section.
fn audit_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Audit sink for operator call events.",
        "properties": {
            "sink": {
                "type": "string",
                "enum": ["none", "stderr", "file"],
                "default": "none",
                "description": "Destination of JSON-line audit events."
            },
            "path": {
                "type": "string",
                "minLength": 1,
                "maxLength": MAX_TOTAL_PATH_LENGTH,
                "pattern": "^\\S([\\s\\S]*\\S)?$",
                "description": "Audit log path; required when sink is \"file\"."
            }
        },
        "additionalProperties": false,
        "if": {
            "properties": { "sink": { "const": "file" } },
            "required": ["sink"]
        },
        "then": { "required": ["path"] },
        "else": { "not": { "required": ["path"] } }
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Schema for a host identifier.
fn schema_for_identifier(description: &str, default: &str) -> Value {
    json!({
        "type": "string",
        "pattern": "^[A-Za-z][A-Za-z0-9_]*$",
        "maxLength": MAX_IDENTIFIER_LENGTH,
        "default": default,
        "description": description
    })
}

/// Schema for a built-in operator name.
fn schema_for_operator_name() -> Value {
    let names: Vec<&str> = BuiltinOperator::ALL.iter().map(|operator| operator.name()).collect();
    json!({
        "type": "string",
        "enum": names,
        "description": "Built-in operator name."
    })
}
