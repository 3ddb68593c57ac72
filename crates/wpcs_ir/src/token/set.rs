//! Bitset of token kinds.
//!
//! Uses bitset-based O(1) membership testing so rule tables can be written as
//! `const` items instead of runtime lists.

use super::TokenKind;

// TokenSet uses a u128 bitset, so all discriminant indices must fit in 0..127.
const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT <= 127,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u128 corresponds to a `TokenKind` discriminant index.
///
/// # Example
/// ```
/// use wpcs_ir::{TokenKind, TokenSet};
///
/// const CONDITION_START: TokenSet = TokenSet::new()
///     .with(TokenKind::If)
///     .with(TokenKind::ElseIf);
///
/// assert!(CONDITION_START.contains(TokenKind::If));
/// assert!(!CONDITION_START.contains(TokenKind::Else));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Whitespace, comments and doc comments.
    pub const EMPTY_TOKENS: TokenSet = TokenSet::new()
        .with(TokenKind::Whitespace)
        .with(TokenKind::Comment)
        .with(TokenKind::DocComment);

    /// Boolean connectives in symbolic and word form.
    pub const BOOLEAN_OPERATORS: TokenSet = TokenSet::new()
        .with(TokenKind::BooleanAnd)
        .with(TokenKind::BooleanOr)
        .with(TokenKind::LogicalAnd)
        .with(TokenKind::LogicalOr)
        .with(TokenKind::LogicalXor);

    /// Type-cast markers such as `(int)` and `(bool)`.
    pub const CAST_TOKENS: TokenSet = TokenSet::new()
        .with(TokenKind::IntCast)
        .with(TokenKind::DoubleCast)
        .with(TokenKind::StringCast)
        .with(TokenKind::ArrayCast)
        .with(TokenKind::ObjectCast)
        .with(TokenKind::BoolCast)
        .with(TokenKind::UnsetCast)
        .with(TokenKind::BinaryCast);

    /// `==`, `!=`, `===` and `!==`.
    pub const EQUALITY_OPERATORS: TokenSet = TokenSet::new()
        .with(TokenKind::IsEqual)
        .with(TokenKind::IsNotEqual)
        .with(TokenKind::IsIdentical)
        .with(TokenKind::IsNotIdentical);

    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Intersection of two token sets.
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    /// Check if this set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Count the number of token kinds in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the kinds in this set, in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .iter()
            .copied()
            .filter(move |&kind| self.contains(kind))
    }
}

impl FromIterator<TokenKind> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(TokenSet::new(), TokenSet::with)
    }
}
