//! Diagnostic queue for collecting, limiting, and sorting diagnostics.
//!
//! Features:
//! - Error limits to keep output manageable on badly formatted files
//! - Optional deduplication of same-line findings with the same rule code
//! - Position-sorted flush

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, RuleCode};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error when the previous error was on the same line with the
    /// same rule code.
    ///
    /// Off by default: two comparisons on one line are two findings.
    pub deduplicate: bool,
}

impl DiagnosticConfig {
    /// Create a config with no limits and no filtering.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queued diagnostic with its position for sorting.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    /// Line number (1-based).
    line: u32,
    /// Column number (1-based).
    column: u32,
}

/// Queue for collecting and sorting diagnostics.
///
/// # Example
///
/// ```
/// use wpcs_diagnostic::{Diagnostic, DiagnosticQueue, RuleCode};
///
/// let mut queue = DiagnosticQueue::new();
/// queue.add(Diagnostic::error(RuleCode::NotYoda).with_message("second"), 2, 1);
/// queue.add(Diagnostic::error(RuleCode::NotYoda).with_message("first"), 1, 5);
///
/// let sorted = queue.flush();
/// assert_eq!(sorted[0].message, "first");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    /// Count of errors (not warnings).
    error_count: usize,
    /// Last (line, code) of an accepted error, for dedup.
    last_error: Option<(u32, RuleCode)>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic at a known position.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic, line: u32, column: u32) -> bool {
        if self.limit_reached() {
            return false;
        }

        let is_error = diag.is_error();

        if self.config.deduplicate && is_error && self.last_error == Some((line, diag.code)) {
            return false;
        }

        if is_error {
            self.last_error = Some((line, diag.code));
            self.error_count += 1;
        }

        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });

        true
    }

    /// Add a diagnostic with position computed from its primary span.
    ///
    /// Diagnostics without a primary span are placed at 1:1.
    pub fn add_with_table(
        &mut self,
        diag: Diagnostic,
        table: &LineOffsetTable,
        source: &str,
    ) -> bool {
        let (line, column) = diag
            .primary_span()
            .map_or((1, 1), |span| table.offset_to_line_col(source, span.start));
        self.add(diag, line, column)
    }

    /// Add a diagnostic with position computed from source.
    ///
    /// Note: For many diagnostics on the same source, build a
    /// [`LineOffsetTable`] once and use [`DiagnosticQueue::add_with_table`].
    pub fn add_with_source(&mut self, diag: Diagnostic, source: &str) -> bool {
        let (line, column) = diag.primary_span().map_or((1, 1), |span| {
            crate::span_utils::offset_to_line_col(source, span.start)
        });
        self.add(diag, line, column)
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue after flushing.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| (w[0].line, w[0].column) <= (w[1].line, w[1].column));

        if !already_sorted {
            // Stable: findings at the same position keep rule order.
            self.diagnostics.sort_by_key(|d| (d.line, d.column));
        }

        let result = self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        self.error_count = 0;
        self.last_error = None;

        result
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }
}
