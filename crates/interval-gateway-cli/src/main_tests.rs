// crates/interval-gateway-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and rendering in the CLI.
// Purpose: Ensure command definitions and helpers behave as documented.
// Dependencies: interval-gateway-cli main helpers
// ============================================================================

//! ## Overview
//! Validates clap command definitions, operand parsing, and operator listing
//! without spawning the binary.

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

use std::sync::Arc;

use clap::CommandFactory;
use clap::Parser;
use interval_gateway_core::HostFactory;
use interval_gateway_core::IntervalSchema;
use interval_gateway_core::MemoryValue;
use interval_gateway_core::NoopAuditSink;
use interval_gateway_core::OperatorAccessPolicy;
use interval_gateway_core::OperatorRegistry;

use super::Cli;
use super::Commands;
use super::ConfigCommand;
use super::ListFormat;
use super::OutputStream;
use super::host_for_schema;
use super::output_error;
use super::parse_operands;
use super::render_operator_list;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn custom_schema() -> IntervalSchema {
    IntervalSchema {
        class_name: "Ival".to_string(),
        lower_field: "inf".to_string(),
        upper_field: "sup".to_string(),
    }
}

// ============================================================================
// SECTION: Command Definitions
// ============================================================================

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn call_collects_repeated_args_in_order() {
    let cli = Cli::try_parse_from([
        "interval-gateway",
        "call",
        "plus",
        "--arg",
        "interval:1,2",
        "--arg",
        "interval:3,4",
    ])
    .unwrap();
    let Some(Commands::Call(command)) = cli.command else {
        panic!("expected call command");
    };
    assert_eq!(command.operator, "plus");
    assert_eq!(command.args, vec!["interval:1,2", "interval:3,4"]);
    assert_eq!(command.outputs, 1);
    assert!(command.config.is_none());
}

#[test]
fn call_accepts_output_count_and_config() {
    let cli = Cli::try_parse_from([
        "interval-gateway",
        "call",
        "times",
        "--outputs",
        "2",
        "--config",
        "gateway.toml",
    ])
    .unwrap();
    let Some(Commands::Call(command)) = cli.command else {
        panic!("expected call command");
    };
    assert_eq!(command.outputs, 2);
    assert!(command.args.is_empty());
    assert_eq!(command.config.unwrap().to_string_lossy(), "gateway.toml");
}

#[test]
fn call_requires_operator() {
    assert!(Cli::try_parse_from(["interval-gateway", "call"]).is_err());
}

#[test]
fn operators_defaults_to_text_format() {
    let cli = Cli::try_parse_from(["interval-gateway", "operators"]).unwrap();
    let Some(Commands::Operators(command)) = cli.command else {
        panic!("expected operators command");
    };
    assert_eq!(command.format, ListFormat::Text);

    let cli = Cli::try_parse_from(["interval-gateway", "operators", "--format", "json"]).unwrap();
    let Some(Commands::Operators(command)) = cli.command else {
        panic!("expected operators command");
    };
    assert_eq!(command.format, ListFormat::Json);
}

#[test]
fn config_subcommands_parse() {
    let cli = Cli::try_parse_from(["interval-gateway", "config", "schema"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommand::Schema
        })
    ));
    let cli = Cli::try_parse_from(["interval-gateway", "config", "validate", "--config", "x.toml"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommand::Validate(_)
        })
    ));
}

#[test]
fn version_flag_is_global() {
    let cli = Cli::try_parse_from(["interval-gateway", "--version"]).unwrap();
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}

// ============================================================================
// SECTION: Operands
// ============================================================================

#[test]
fn operands_follow_schema_layout() {
    let schema = custom_schema();
    let args = vec!["interval:1,2".to_string(), "scalar:3".to_string()];
    let operands = parse_operands(&args, &schema).unwrap();
    assert_eq!(
        operands[0],
        MemoryValue::object(
            "Ival",
            [("inf", MemoryValue::double_scalar(1.0)), ("sup", MemoryValue::double_scalar(2.0))]
        )
    );
    assert_eq!(operands[1], MemoryValue::double_scalar(3.0));
}

#[test]
fn invalid_operand_reports_one_based_position() {
    let args = vec!["scalar:1".to_string(), "interval:1".to_string()];
    let err = parse_operands(&args, &IntervalSchema::default()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid operand 2: interval operand must be LO,HI");
}

// ============================================================================
// SECTION: Host and Listing
// ============================================================================

#[test]
fn host_constructs_schema_class_only() {
    let host = host_for_schema(&custom_schema());
    let lower = host.create_double_scalar(1.0);
    let upper = host.create_double_scalar(2.0);
    assert!(host.construct("Ival", vec![lower.clone(), upper.clone()]).is_ok());
    assert!(host.construct("Interval", vec![lower, upper]).is_err());
}

#[test]
fn operator_list_shows_enabled_names() {
    let policy = OperatorAccessPolicy {
        allowlist: Some(["plus".to_string(), "hull".to_string()].into_iter().collect()),
        denylist: std::collections::BTreeSet::new(),
    };
    let registry = OperatorRegistry::with_builtin_operators(policy, Arc::new(NoopAuditSink))
        .unwrap()
        .with_schema(custom_schema());
    let rendered = render_operator_list(&registry);
    assert_eq!(rendered, "Enabled operators (Ival):\n  hull\n  plus\n");
}

#[test]
fn operator_list_marks_empty_policy() {
    let policy = OperatorAccessPolicy {
        allowlist: Some(std::collections::BTreeSet::new()),
        denylist: std::collections::BTreeSet::new(),
    };
    let registry =
        OperatorRegistry::with_builtin_operators(policy, Arc::new(NoopAuditSink)).unwrap();
    assert_eq!(render_operator_list(&registry), "Enabled operators (Interval):\n  (none)\n");
}

// ============================================================================
// SECTION: Output
// ============================================================================

#[test]
fn write_failures_name_the_stream() {
    let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    assert_eq!(
        output_error(OutputStream::Stdout, &error),
        "Failed to write to stdout: pipe closed"
    );
    assert_eq!(
        output_error(OutputStream::Stderr, &error),
        "Failed to write to stderr: pipe closed"
    );
}
