//! Host runner: lexes sources and dispatches tokens to rules.
//!
//! Files are independent, so batches are linted with Rayon unless the
//! configuration asks for sequential processing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use wpcs_diagnostic::span_utils::LineOffsetTable;
use wpcs_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use wpcs_ir::{TokenList, TokenSet};
use wpcs_lexer::LexError;

use crate::{Rule, YodaConditions};

/// Errors that stop a single file from being linted.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The file could not be read.
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Configuration for the linter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LinterConfig {
    /// Lint batches on the Rayon thread pool.
    pub parallel: bool,
    /// Limits and filtering applied to each file's diagnostics.
    pub diagnostics: DiagnosticConfig,
}

impl Default for LinterConfig {
    fn default() -> Self {
        LinterConfig {
            parallel: true,
            diagnostics: DiagnosticConfig::default(),
        }
    }
}

/// A source file held in memory.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceFile {
    pub path: PathBuf,
    pub source: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Result of linting a single file.
#[derive(Debug)]
pub struct FileReport {
    /// Path of the linted file.
    pub path: PathBuf,
    /// Position-sorted diagnostics, or why the file could not be linted.
    pub result: Result<Vec<Diagnostic>, LintError>,
}

impl FileReport {
    /// Diagnostics for the file; empty if it could not be linted.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.result.as_deref().unwrap_or_default()
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics().iter().filter(|d| d.is_error()).count()
    }

    /// Linted successfully with nothing to report.
    pub fn is_clean(&self) -> bool {
        matches!(&self.result, Ok(diagnostics) if diagnostics.is_empty())
    }
}

/// Runs a set of rules over PHP sources.
pub struct Linter {
    /// Each rule with the trigger set it registered.
    rules: Vec<(TokenSet, Box<dyn Rule>)>,
    /// Union of all trigger sets.
    triggers: TokenSet,
    config: LinterConfig,
}

impl fmt::Debug for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linter")
            .field(
                "rules",
                &self.rules.iter().map(|(_, r)| r.name()).collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .finish()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::wordpress()
    }
}

impl Linter {
    /// Create a linter with no rules.
    pub fn new(config: LinterConfig) -> Self {
        Linter {
            rules: Vec::new(),
            triggers: TokenSet::new(),
            config,
        }
    }

    /// Create a linter with the built-in WordPress rules and default config.
    pub fn wordpress() -> Self {
        Self::new(LinterConfig::default()).with_rule(YodaConditions)
    }

    /// Register a rule; builder form of [`Linter::register`].
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.register(rule);
        self
    }

    /// Register a rule. Rules run in registration order.
    pub fn register(&mut self, rule: impl Rule + 'static) {
        let kinds = rule.register();
        debug!(rule = rule.name(), triggers = kinds.count(), "registered rule");
        self.triggers = self.triggers.union(kinds);
        self.rules.push((kinds, Box::new(rule)));
    }

    /// Names of the registered rules, in registration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(_, rule)| rule.name())
    }

    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    /// Run every rule over a token stream.
    ///
    /// Tokens are visited in source order; for each one, every rule whose
    /// trigger set contains its kind is called. Diagnostics come back in
    /// that same order, unfiltered.
    pub fn check_tokens(&self, tokens: &TokenList) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (index, &kind) in tokens.kinds().iter().enumerate() {
            if !self.triggers.contains(kind) {
                continue;
            }
            for (kinds, rule) in &self.rules {
                if kinds.contains(kind) {
                    diagnostics.extend(rule.check(tokens, index));
                }
            }
        }
        diagnostics
    }

    /// Lex and check a source string.
    ///
    /// Diagnostics pass through a [`DiagnosticQueue`] configured by
    /// [`LinterConfig::diagnostics`] and come back sorted by position.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Lex`] if the source cannot be tokenized.
    pub fn lint_source(&self, source: &str) -> Result<Vec<Diagnostic>, LintError> {
        let tokens = wpcs_lexer::lex(source)?;
        let table = LineOffsetTable::build(source);
        let mut queue = DiagnosticQueue::with_config(self.config.diagnostics.clone());

        for diag in self.check_tokens(&tokens) {
            if !queue.add_with_table(diag, &table, source) && queue.limit_reached() {
                debug!("error limit reached");
                break;
            }
        }

        let diagnostics = queue.flush();
        debug!(
            tokens = tokens.len(),
            diagnostics = diagnostics.len(),
            "linted source"
        );
        Ok(diagnostics)
    }

    /// Read and lint a file.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Io`] if the file cannot be read, or
    /// [`LintError::Lex`] if it cannot be tokenized.
    pub fn lint_file(&self, path: &Path) -> Result<Vec<Diagnostic>, LintError> {
        let source = fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "linting file");
        self.lint_source(&source)
    }

    /// Lint in-memory files. Reports come back in input order.
    pub fn lint_batch(&self, files: &[SourceFile]) -> Vec<FileReport> {
        let lint_one = |file: &SourceFile| FileReport {
            path: file.path.clone(),
            result: self.lint_source(&file.source),
        };

        if files.len() <= 1 || !self.config.parallel {
            files.iter().map(lint_one).collect()
        } else {
            files.par_iter().map(lint_one).collect()
        }
    }

    /// Read and lint files from disk. Reports come back in input order.
    pub fn lint_paths<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<FileReport> {
        let lint_one = |path: &P| FileReport {
            path: path.as_ref().to_path_buf(),
            result: self.lint_file(path.as_ref()),
        };

        if paths.len() <= 1 || !self.config.parallel {
            paths.iter().map(lint_one).collect()
        } else {
            paths.par_iter().map(lint_one).collect()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
