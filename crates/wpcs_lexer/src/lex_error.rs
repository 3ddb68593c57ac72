//! Lexer error type.
//!
//! Lexing only fails when spans cannot address the source. Everything else
//! the lexer does not understand becomes an `Unknown` token.

use wpcs_ir::SpanError;

/// Errors produced by [`lex`](crate::lex).
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// Source is longer than a `u32` span can address.
    #[error("source is {len} bytes, larger than the {max} byte limit", max = u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Map a span construction failure to the source length that caused it.
    pub(crate) fn from_span_error(_: SpanError, len: usize) -> Self {
        LexError::SourceTooLarge { len }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
