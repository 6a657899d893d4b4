// crates/interval-gateway-cli/tests/messages.rs
// ============================================================================
// Module: CLI Message Tests
// Description: Tests for message template lookup and rendering.
// Purpose: Ensure user-facing strings render placeholders predictably.
// Dependencies: interval-gateway-cli
// ============================================================================

//! ## Overview
//! Covers placeholder substitution, unknown keys, and unmatched placeholders.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use interval_gateway_cli::messages::render;
use interval_gateway_cli::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn macro_substitutes_named_arguments() {
    let message = t!("output.write_failed", stream = "stderr", error = "broken pipe");
    assert_eq!(message, "Failed to write to stderr: broken pipe");
}

#[test]
fn argument_order_does_not_matter() {
    let message = render(
        "call.operand_invalid",
        &[("error", "bad".to_string()), ("index", "3".to_string())],
    );
    assert_eq!(message, "Invalid operand 3: bad");
}

#[test]
fn template_without_placeholders_renders_verbatim() {
    assert_eq!(t!("config.validate.ok"), "Config valid.");
}

#[test]
fn unknown_key_renders_as_key() {
    assert_eq!(render("no.such.key", &[("error", "x".to_string())]), "no.such.key");
}

#[test]
fn missing_argument_keeps_placeholder() {
    assert_eq!(render("config.load_failed", &[]), "Failed to load config: {error}");
}

#[test]
fn substituted_values_are_not_rescanned() {
    let message = t!("output.json_failed", error = "{error}");
    assert_eq!(message, "Failed to render JSON output: {error}");
}

#[test]
fn stream_names_are_not_catalog_keys() {
    assert_eq!(render("output.stream.stdout", &[]), "output.stream.stdout");
}
