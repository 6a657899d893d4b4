// crates/interval-gateway-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for interval gateway configuration. Outputs are
//! deterministic and kept in sync with the schema.

/// Returns a canonical example `interval-gateway.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[host]
class_name = "Interval"
lower_field = "lower"
upper_field = "upper"

[operators]
allowlist = ["plus", "minus", "times", "rdivide", "hull", "intersect", "min", "max"]
denylist = []

[audit]
sink = "stderr"
"#,
    )
}
