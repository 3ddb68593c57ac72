//! Typed token index.

/// Typed index into a `TokenList`.
///
/// Provides type safety over raw `u32` indices when referring to tokens.
/// Uses `u32::MAX` as a sentinel for "no token".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct TokenIdx(u32);

impl TokenIdx {
    /// Sentinel value indicating no token.
    pub const NONE: TokenIdx = TokenIdx(u32::MAX);

    /// Create a `TokenIdx` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TokenIdx(raw)
    }

    /// Create a `TokenIdx` from a stream position.
    ///
    /// Positions that do not fit in `u32` map to [`TokenIdx::NONE`].
    #[inline]
    pub fn from_usize(index: usize) -> Self {
        u32::try_from(index).map_or(TokenIdx::NONE, TokenIdx)
    }

    /// Get the raw `u32` index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid index (not the `NONE` sentinel).
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// The stream position, or `None` for the sentinel.
    #[inline]
    pub fn index(self) -> Option<usize> {
        self.is_valid().then_some(self.0 as usize)
    }
}
