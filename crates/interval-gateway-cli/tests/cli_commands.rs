// crates/interval-gateway-cli/tests/cli_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Integration tests that run the interval-gateway binary.
// Purpose: Ensure commands print results and fail closed with diagnostics.
// Dependencies: interval-gateway-cli binary
// ============================================================================

//! ## Overview
//! Runs the CLI binary for operator calls, operator listing, and config
//! utilities. Each test runs in a fresh temporary directory with the config
//! environment override removed.

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
    clippy::float_cmp,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use interval_gateway_core::IntervalSchema;
use interval_gateway_core::MemoryValue;
use interval_gateway_core::decode_interval;
use serde_json::Value;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn gateway_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_interval-gateway"))
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(gateway_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("INTERVAL_GATEWAY_CONFIG")
        .output()
        .expect("run interval-gateway")
}

fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    run_in(dir.path(), args)
}

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("gateway.toml");
    fs::write(&path, contents).expect("write config");
    path.to_string_lossy().into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn decode_single_output(output: &Output, schema: &IntervalSchema) -> (f64, f64) {
    let values: Vec<MemoryValue> = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(values.len(), 1);
    let interval = decode_interval(&values[0], schema).expect("interval output");
    (interval.lower(), interval.upper())
}

// ============================================================================
// SECTION: Call Command
// ============================================================================

#[test]
fn call_plus_prints_interval() {
    let output = run(&["call", "plus", "--arg", "interval:1,2", "--arg", "interval:3,4"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(decode_single_output(&output, &IntervalSchema::default()), (4.0, 6.0));
}

#[test]
fn call_with_one_input_reports_nrhs() {
    let output = run(&["call", "plus", "--arg", "interval:1,2"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(stderr(&output).trim(), "Interval:plus:nrhs: Two inputs required.");
}

#[test]
fn call_with_two_outputs_reports_nlhs() {
    let output =
        run(&["call", "times", "--arg", "interval:1,2", "--arg", "interval:3,4", "--outputs", "2"]);
    assert!(!output.status.success());
    assert_eq!(stderr(&output).trim(), "Interval:times:nlhs: One output required.");
}

#[test]
fn call_with_scalar_reports_invalid_inputs() {
    let output = run(&["call", "minus", "--arg", "scalar:1", "--arg", "interval:3,4"]);
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim(),
        "Interval:minus:invalid_inputs: Input is not an Interval object"
    );
}

#[test]
fn call_rdivide_by_zero_reports_operation_failure() {
    let output = run(&["call", "rdivide", "--arg", "interval:1,2", "--arg", "interval:0,0"]);
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim(),
        "Interval:rdivide:operation_failed: division by the zero interval"
    );
}

#[test]
fn call_unknown_operator_reports_unknown_operator() {
    let output = run(&["call", "mtimes", "--arg", "interval:1,2", "--arg", "interval:3,4"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).starts_with("Interval:mtimes:unknown_operator:"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}

#[test]
fn call_malformed_operand_fails_before_dispatch() {
    let output = run(&["call", "plus", "--arg", "interval:1,2", "--arg", "bogus"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid operand 2"), "unexpected stderr: {}", stderr(&output));
}

#[test]
fn call_honors_configured_layout_and_policy() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "[host]\nclass_name = \"Ival\"\nlower_field = \"inf\"\nupper_field = \"sup\"\n\n\
         [operators]\ndenylist = [\"hull\"]\n",
    );
    let schema = IntervalSchema {
        class_name: "Ival".to_string(),
        lower_field: "inf".to_string(),
        upper_field: "sup".to_string(),
    };

    let output = run_in(
        dir.path(),
        &["call", "max", "--config", &config, "--arg", "interval:1,5", "--arg", "interval:2,3"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(decode_single_output(&output, &schema), (2.0, 5.0));

    let output = run_in(
        dir.path(),
        &["call", "hull", "--config", &config, "--arg", "interval:1,5", "--arg", "interval:2,3"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("Ival:hull:blocked:"), "unexpected stderr: {}", stderr(&output));
}

#[test]
fn call_uses_default_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("interval-gateway.toml"), "[operators]\nallowlist = [\"min\"]\n")
        .expect("write default config");
    let output =
        run_in(dir.path(), &["call", "plus", "--arg", "interval:1,2", "--arg", "interval:3,4"]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("Interval:plus:blocked:"));
}

#[test]
fn call_writes_audit_lines_when_configured() {
    let dir = TempDir::new().unwrap();
    let audit_path = dir.path().join("audit.jsonl");
    let config = write_config(
        &dir,
        &format!("[audit]\nsink = \"file\"\npath = {:?}\n", audit_path.to_string_lossy()),
    );
    let output = run_in(
        dir.path(),
        &["call", "plus", "--config", &config, "--arg", "interval:1,2", "--arg", "interval:3,4"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let logged = fs::read_to_string(&audit_path).expect("read audit log");
    let event: Value = serde_json::from_str(logged.trim()).expect("audit json");
    assert_eq!(event["operator"], "plus");
    assert_eq!(event["outcome"], "ok");
    assert_eq!(event["input_count"], 2);
}

// ============================================================================
// SECTION: Operators Command
// ============================================================================

#[test]
fn operators_json_lists_builtins() {
    let output = run(&["operators", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let names: Vec<String> = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(
        names,
        vec!["hull", "intersect", "max", "min", "minus", "plus", "rdivide", "times"]
    );
}

#[test]
fn operators_text_respects_policy() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[operators]\nallowlist = [\"plus\", \"minus\"]\n");
    let output = run_in(dir.path(), &["operators", "--config", &config]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Enabled operators (Interval):\n  minus\n  plus\n");
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

#[test]
fn config_validate_accepts_example() {
    let example = run(&["config", "example"]);
    assert!(example.status.success());

    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &stdout(&example));
    let output = run_in(dir.path(), &["config", "validate", "--config", &config]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Config valid."));
}

#[test]
fn config_validate_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[audit]\nsink = \"file\"\n");
    let output = run_in(dir.path(), &["config", "validate", "--config", &config]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load config"), "unexpected stderr: {}", stderr(&output));
}

#[test]
fn config_validate_requires_a_file() {
    let output = run(&["config", "validate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load config"));
}

#[test]
fn config_schema_is_json() {
    let output = run(&["config", "schema"]);
    assert!(output.status.success());
    let schema: Value = serde_json::from_slice(&output.stdout).expect("schema json");
    assert_eq!(schema["title"], "Interval Gateway Configuration");
}

// ============================================================================
// SECTION: Top-Level Flags
// ============================================================================

#[test]
fn version_flag_prints_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), format!("interval-gateway {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_command_prints_help() {
    let output = run(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}
