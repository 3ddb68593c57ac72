//! Diagnostic system for sniff findings.
//!
//! A finding carries:
//! - a rule code for searchability (`WordPress.PHP.YodaConditions.NotYoda`)
//! - a fixed, human-readable message
//! - a primary span (where the finding is)
//! - optionally the token position the rule was triggered on
//!
//! Findings are data, not failures: a rule returning a diagnostic never stops
//! the rest of the stream from being checked.

mod diagnostic;
pub mod queue;
mod rule_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use rule_code::{ParseRuleCodeError, RuleCode};
