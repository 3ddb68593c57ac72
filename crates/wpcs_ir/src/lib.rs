//! WPCS IR - token and span types for the sniffs.
//!
//! This crate contains the data the rules operate on:
//! - Spans for source locations
//! - `TokenKind`, the closed set of PHP token kinds
//! - `TokenList`, an immutable token stream with directional search
//! - `TokenSet`, a const-constructible bitset of token kinds
//!
//! Nothing here knows how tokens are produced. The lexer and the rules both
//! depend on this crate; rules never depend on the lexer.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenIdx, TokenKind, TokenList, TokenSet};
