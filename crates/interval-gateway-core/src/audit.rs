// crates/interval-gateway-core/src/audit.rs
// ============================================================================
// Module: Gateway Audit Logging
// Description: Structured audit events for operator calls.
// Purpose: Emit one redacted JSON line per call without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every registry call produces one [`GatewayAuditEvent`] describing the
//! operator, the call shape, and the outcome. Operand and result bounds are
//! never recorded. Sinks are pluggable so deployments can route events to
//! their own logging pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome classification for an operator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutcome {
    /// The call produced a result.
    Ok,
    /// The call failed with a diagnostic.
    Error,
}

/// Operator call audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Requested operator name.
    pub operator: String,
    /// Call outcome.
    pub outcome: CallOutcome,
    /// Diagnostic identifier when the call failed.
    pub diagnostic: Option<String>,
    /// Number of inputs supplied.
    pub input_count: usize,
    /// Number of outputs requested.
    pub requested_outputs: usize,
}

/// Inputs required to construct an audit event.
pub struct GatewayAuditEventParams {
    /// Requested operator name.
    pub operator: String,
    /// Call outcome.
    pub outcome: CallOutcome,
    /// Diagnostic identifier when the call failed.
    pub diagnostic: Option<String>,
    /// Number of inputs supplied.
    pub input_count: usize,
    /// Number of outputs requested.
    pub requested_outputs: usize,
}

impl GatewayAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: GatewayAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "operator_call",
            timestamp_ms,
            operator: params.operator,
            outcome: params.outcome,
            diagnostic: params.diagnostic,
            input_count: params.input_count,
            requested_outputs: params.requested_outputs,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for operator call events.
pub trait GatewayAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &GatewayAuditEvent);
}

/// Audit sink that discards events.
pub struct NoopAuditSink;

impl GatewayAuditSink for NoopAuditSink {
    fn record(&self, _event: &GatewayAuditEvent) {}
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl GatewayAuditSink for StderrAuditSink {
    fn record(&self, event: &GatewayAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl GatewayAuditSink for FileAuditSink {
    fn record(&self, event: &GatewayAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}
