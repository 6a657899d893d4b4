// crates/interval-gateway-config/src/config.rs
// ============================================================================
// Module: Interval Gateway Configuration
// Description: Configuration loading and validation for the interval gateway.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: interval-gateway-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! It selects the host layout of interval objects, the operator access policy,
//! and the audit sink. Missing sections fall back to defaults; anything
//! present but invalid fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use interval_gateway_core::BuiltinOperator;
use interval_gateway_core::FileAuditSink;
use interval_gateway_core::GatewayAuditSink;
use interval_gateway_core::IntervalSchema;
use interval_gateway_core::NoopAuditSink;
use interval_gateway_core::OperatorAccessPolicy;
use interval_gateway_core::OperatorRegistry;
use interval_gateway_core::StderrAuditSink;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "interval-gateway.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "INTERVAL_GATEWAY_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a host class or property identifier.
pub(crate) const MAX_IDENTIFIER_LENGTH: usize = 63;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Interval gateway configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host interval layout.
    #[serde(default)]
    pub host: HostConfig,
    /// Operator access policy.
    #[serde(default)]
    pub operators: OperatorsConfig,
    /// Audit sink configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl GatewayConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration like [`GatewayConfig::load`], but returns defaults
    /// when no path or environment override is given and the default file is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an existing or requested config fails to
    /// load or validate.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if path.is_none()
            && env::var_os(CONFIG_ENV_VAR).is_none()
            && !Path::new(DEFAULT_CONFIG_NAME).exists()
        {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.host.validate()?;
        self.operators.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns the host interval schema.
    #[must_use]
    pub fn schema(&self) -> IntervalSchema {
        IntervalSchema {
            class_name: self.host.class_name.clone(),
            lower_field: self.host.lower_field.clone(),
            upper_field: self.host.upper_field.clone(),
        }
    }

    /// Returns the operator access policy.
    #[must_use]
    pub fn access_policy(&self) -> OperatorAccessPolicy {
        OperatorAccessPolicy {
            allowlist: self
                .operators
                .allowlist
                .as_ref()
                .map(|names| names.iter().cloned().collect::<BTreeSet<_>>()),
            denylist: self.operators.denylist.iter().cloned().collect(),
        }
    }

    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit file cannot be opened.
    pub fn build_audit_sink(&self) -> Result<Arc<dyn GatewayAuditSink>, ConfigError> {
        match self.audit.sink {
            AuditSinkKind::None => Ok(Arc::new(NoopAuditSink)),
            AuditSinkKind::Stderr => Ok(Arc::new(StderrAuditSink)),
            AuditSinkKind::File => {
                let Some(path) = &self.audit.path else {
                    return Err(ConfigError::Invalid(
                        "audit.path is required when audit.sink = \"file\"".to_string(),
                    ));
                };
                let sink = FileAuditSink::new(Path::new(path))
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
        }
    }

    /// Builds an operator registry with every built-in operator, the
    /// configured policy, schema, and audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the audit sink or registry cannot be built.
    pub fn build_registry(&self) -> Result<OperatorRegistry, ConfigError> {
        let sink = self.build_audit_sink()?;
        let registry = OperatorRegistry::with_builtin_operators(self.access_policy(), sink)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Ok(registry.with_schema(self.schema()))
    }
}

/// Host interval layout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Nominal class name of host intervals.
    #[serde(default = "default_class_name")]
    pub class_name: String,
    /// Property holding the lower bound.
    #[serde(default = "default_lower_field")]
    pub lower_field: String,
    /// Property holding the upper bound.
    #[serde(default = "default_upper_field")]
    pub upper_field: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            class_name: default_class_name(),
            lower_field: default_lower_field(),
            upper_field: default_upper_field(),
        }
    }
}

impl HostConfig {
    /// Validates host layout configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_identifier("host.class_name", &self.class_name)?;
        validate_identifier("host.lower_field", &self.lower_field)?;
        validate_identifier("host.upper_field", &self.upper_field)?;
        if self.lower_field == self.upper_field {
            return Err(ConfigError::Invalid(
                "host.lower_field and host.upper_field must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Operator access policy configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorsConfig {
    /// Optional allowlist of operator names.
    #[serde(default)]
    pub allowlist: Option<Vec<String>>,
    /// Operator names denied regardless of the allowlist.
    #[serde(default)]
    pub denylist: Vec<String>,
}

impl OperatorsConfig {
    /// Validates operator policy configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let allowlist = self.allowlist.iter().flatten();
        for name in allowlist.chain(self.denylist.iter()) {
            if BuiltinOperator::from_name(name).is_none() {
                return Err(ConfigError::Invalid(format!("unknown operator in policy: {name}")));
            }
        }
        Ok(())
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard audit events.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to a file.
    File,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Sink receiving audit events.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Audit log path for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, Some(path)) => validate_path_string("audit.path", path),
            (AuditSinkKind::File, None) => Err(ConfigError::Invalid(
                "audit.path is required when audit.sink = \"file\"".to_string(),
            )),
            (_, Some(_)) => Err(ConfigError::Invalid(
                "audit.path is only valid when audit.sink = \"file\"".to_string(),
            )),
            (_, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default host interval class name.
pub(crate) fn default_class_name() -> String {
    "Interval".to_string()
}

/// Default lower bound property name.
pub(crate) fn default_lower_field() -> String {
    "lower".to_string()
}

/// Default upper bound property name.
pub(crate) fn default_upper_field() -> String {
    "upper".to_string()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
///
/// The value is opened exactly as written, so surrounding whitespace is
/// rejected rather than trimmed.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.trim() != value {
        return Err(ConfigError::Invalid(format!(
            "{field} must not have leading or trailing whitespace"
        )));
    }
    if value.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(value).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a host identifier: a letter followed by letters, digits, or `_`.
fn validate_identifier(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "{field} exceeds {MAX_IDENTIFIER_LENGTH} characters"
        )));
    }
    let mut chars = value.chars();
    let starts_with_letter = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic());
    if !starts_with_letter || !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
        return Err(ConfigError::Invalid(format!("{field} must be a valid identifier")));
    }
    Ok(())
}
