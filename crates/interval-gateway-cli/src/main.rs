// crates/interval-gateway-cli/src/main.rs
// ============================================================================
// Module: Interval Gateway CLI Entry Point
// Description: Command dispatcher for interval operator calls and config tasks.
// Purpose: Drive the operator registry against the in-memory host.
// Dependencies: clap, interval-gateway-config, interval-gateway-core, serde, thiserror
// ============================================================================

//! ## Overview
//! The interval gateway CLI loads the gateway configuration, builds the
//! operator registry, and calls operators against the in-memory reference
//! host. Operator failures print the host diagnostic (`identifier: message`)
//! on stderr and exit non-zero. All user-facing strings are routed through the
//! message catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use interval_gateway_cli::operand::parse_operand;
use interval_gateway_cli::t;
use interval_gateway_config::GatewayConfig;
use interval_gateway_config::config_schema;
use interval_gateway_config::config_toml_example;
use interval_gateway_core::IntervalSchema;
use interval_gateway_core::MemoryHost;
use interval_gateway_core::MemoryValue;
use interval_gateway_core::OperatorRegistry;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "interval-gateway", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Call an interval operator against the in-memory host.
    Call(CallCommand),
    /// List operators enabled by the configured policy.
    Operators(OperatorsCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a config file.
    Validate(ConfigValidateCommand),
    /// Print the JSON schema for the config file.
    Schema,
    /// Print a canonical example config file.
    Example,
}

/// Arguments for operator calls.
#[derive(Args, Debug)]
struct CallCommand {
    /// Operator name (for example `plus` or `rdivide`).
    #[arg(value_name = "OPERATOR")]
    operator: String,
    /// Operand as `interval:LO,HI`, `scalar:X`, or `json:VALUE`; repeat per input.
    #[arg(long = "arg", value_name = "OPERAND")]
    args: Vec<String>,
    /// Number of requested outputs.
    #[arg(long, value_name = "N", default_value_t = 1)]
    outputs: usize,
    /// Optional config file path (defaults to interval-gateway.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for operator listing.
#[derive(Args, Debug)]
struct OperatorsCommand {
    /// Optional config file path (defaults to interval-gateway.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output format for the listing.
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    format: ListFormat,
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to interval-gateway.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Output formats for operator listings.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum ListFormat {
    /// Human-readable text.
    Text,
    /// JSON array of operator names.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_line(OutputStream::Stdout, &t!("main.version", version = version))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Call(command) => command_call(&command),
        Commands::Operators(command) => command_operators(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error(OutputStream::Stdout, &err)))?;
    write_line(OutputStream::Stdout, "")?;
    Ok(())
}

// ============================================================================
// SECTION: Call Command
// ============================================================================

/// Executes the `call` command.
fn command_call(command: &CallCommand) -> CliResult<ExitCode> {
    let registry = load_registry(command.config.as_deref())?;
    let schema = registry.schema();
    let host = host_for_schema(schema);
    let inputs = parse_operands(&command.args, schema)?;
    match registry.call(&command.operator, &host, &inputs, command.outputs) {
        Ok(outputs) => {
            write_json(&outputs)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            write_line(OutputStream::Stderr, &err.diagnostic().to_string())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Builds an in-memory host able to construct the schema's interval class.
fn host_for_schema(schema: &IntervalSchema) -> MemoryHost {
    MemoryHost::empty().with_class(
        schema.class_name.as_str(),
        [schema.lower_field.as_str(), schema.upper_field.as_str()],
    )
}

/// Parses operand strings in order.
fn parse_operands(args: &[String], schema: &IntervalSchema) -> CliResult<Vec<MemoryValue>> {
    args.iter()
        .enumerate()
        .map(|(index, arg)| {
            parse_operand(arg, schema).map_err(|err| {
                CliError::new(t!("call.operand_invalid", index = index + 1, error = err))
            })
        })
        .collect()
}

// ============================================================================
// SECTION: Operators Command
// ============================================================================

/// Executes the `operators` command.
fn command_operators(command: &OperatorsCommand) -> CliResult<ExitCode> {
    let registry = load_registry(command.config.as_deref())?;
    match command.format {
        ListFormat::Text => {
            let output = render_operator_list(&registry);
            write_line(OutputStream::Stdout, output.trim_end())?;
        }
        ListFormat::Json => {
            let names: Vec<&str> = registry.enabled_names().collect();
            write_json(&names)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Renders the enabled operator list in text form.
fn render_operator_list(registry: &OperatorRegistry) -> String {
    let mut output = t!("operators.header", class_name = registry.schema().class_name);
    output.push('\n');
    let mut any = false;
    for name in registry.enabled_names() {
        any = true;
        output.push_str(&t!("operators.entry", name = name));
        output.push('\n');
    }
    if !any {
        output.push_str(&t!("operators.none"));
        output.push('\n');
    }
    output
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
        ConfigCommand::Schema => {
            write_json(&config_schema())?;
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::Example => {
            write_line(OutputStream::Stdout, config_toml_example().trim_end())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = GatewayConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_line(OutputStream::Stdout, &t!("config.validate.ok"))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Registry Helpers
// ============================================================================

/// Loads the configuration and builds the operator registry it describes.
fn load_registry(path: Option<&Path>) -> CliResult<OperatorRegistry> {
    let config = GatewayConfig::load_or_default(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    config.build_registry().map_err(|err| CliError::new(t!("registry.build_failed", error = err)))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Standard stream receiving CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputStream {
    /// Command results.
    Stdout,
    /// Diagnostics and errors.
    Stderr,
}

impl OutputStream {
    /// Returns the stream name shown in write failures.
    const fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// Writes a single line to `stream`.
fn write_line(stream: OutputStream, message: &str) -> CliResult<()> {
    let written = match stream {
        OutputStream::Stdout => writeln!(std::io::stdout(), "{message}"),
        OutputStream::Stderr => writeln!(std::io::stderr(), "{message}"),
    };
    written.map_err(|err| CliError::new(output_error(stream, &err)))
}

/// Writes a value as pretty-printed JSON to stdout.
fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(t!("output.json_failed", error = err)))?;
    write_line(OutputStream::Stdout, &rendered)
}

/// Formats a write failure for `stream`.
fn output_error(stream: OutputStream, error: &std::io::Error) -> String {
    t!("output.write_failed", stream = stream.name(), error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_line(OutputStream::Stderr, message);
    ExitCode::FAILURE
}
