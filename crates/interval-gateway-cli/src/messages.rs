// crates/interval-gateway-cli/src/messages.rs
// ============================================================================
// Module: CLI Messages
// Description: Static message templates and placeholder rendering.
// Purpose: Keep every user-facing CLI string in one table.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Templates are looked up by dotted key and rendered by [`render`] in a
//! single left-to-right pass. The [`t!`](crate::t) macro builds the argument
//! list from `name = value` pairs.
//!
//! ## Invariants
//! - Unknown keys render as the key itself.
//! - Placeholders without a matching argument are left in place.
//! - Substituted values are never rescanned for placeholders.

// ============================================================================
// SECTION: Templates
// ============================================================================

/// Message templates keyed by dotted name.
const TEMPLATES: &[(&str, &str)] = &[
    ("main.version", "interval-gateway {version}"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.json_failed", "Failed to render JSON output: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("registry.build_failed", "Failed to build operator registry: {error}"),
    ("call.operand_invalid", "Invalid operand {index}: {error}"),
    ("operators.header", "Enabled operators ({class_name}):"),
    ("operators.entry", "  {name}"),
    ("operators.none", "  (none)"),
];

/// Returns the template registered under `key`.
fn template(key: &str) -> Option<&'static str> {
    TEMPLATES.iter().find(|(entry, _)| *entry == key).map(|(_, template)| *template)
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders the template for `key`, substituting `{name}` placeholders from
/// `args`.
#[must_use]
pub fn render(key: &str, args: &[(&str, String)]) -> String {
    let Some(template) = template(key) else {
        return key.to_string();
    };
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            output.push_str(&rest[open..]);
            return output;
        };
        let name = &tail[..close];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[open..=open + close + 1]),
        }
        rest = &tail[close + 1..];
    }
    output.push_str(rest);
    output
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Renders a message by key with named arguments, e.g.
/// `t!("config.load_failed", error = err)`.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {
        $crate::messages::render($key, &[$( (stringify!($name), $value.to_string()) ),*])
    };
}
