//! Token types for PHP source.
//!
//! A token is a kind plus the byte span it covers. Tokens carry no text: the
//! sniffs classify by kind, and anything that needs the text slices the
//! source with the span.

mod index;
mod kind;
mod list;
mod search;
mod set;

pub use index::TokenIdx;
pub use kind::TokenKind;
pub use list::TokenList;
pub use set::TokenSet;

use std::fmt;

use super::Span;

/// A token with its span in the source.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for tests and synthesized streams.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenIdx, TokenKind};
    // TokenKind (1 byte) + padding + Span (8 bytes)
    crate::static_assert_size!(Token, 12);
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(TokenIdx, 4);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
