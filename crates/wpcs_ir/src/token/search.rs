//! Directional search over a `TokenList`.
//!
//! These are the only navigation primitives the sniffs need. All of them are
//! read-only, bounded by the stream, and return `None` instead of failing
//! when nothing matches or a position is out of range.

use super::{TokenList, TokenSet};
use crate::TokenKind;

impl TokenList {
    /// Nearest token at or before `from`, and not before `limit`, whose kind
    /// is in `kinds`.
    pub fn find_previous(&self, kinds: TokenSet, from: usize, limit: usize) -> Option<usize> {
        let from = self.clamp(from)?;
        if limit > from {
            return None;
        }
        (limit..=from)
            .rev()
            .find(|&i| kinds.contains(self.kinds()[i]))
    }

    /// Nearest token at or before `from` whose kind is in `kinds`, looking
    /// only within the current statement.
    ///
    /// The search stops at the first `;` and steps over balanced groups: on
    /// meeting a closer it jumps to the matching opener, so tokens nested in
    /// an earlier `(...)`, `[...]` or `{...}` are never returned. A closer
    /// without a partner is treated like any other token.
    pub fn find_previous_in_statement(&self, kinds: TokenSet, from: usize) -> Option<usize> {
        let mut i = self.clamp(from)?;
        loop {
            let kind = self.kinds()[i];
            if kinds.contains(kind) {
                return Some(i);
            }
            if kind.is_closer() {
                if let Some(opener) = self.partner(i) {
                    i = opener;
                }
            } else if kind == TokenKind::Semicolon {
                return None;
            }
            i = i.checked_sub(1)?;
        }
    }

    /// Nearest token at or after `from` whose kind is in `kinds`.
    pub fn find_next(&self, kinds: TokenSet, from: usize) -> Option<usize> {
        self.kinds()
            .get(from..)?
            .iter()
            .position(|&kind| kinds.contains(kind))
            .map(|offset| from + offset)
    }

    /// Nearest token at or after `from` whose kind is *not* in `kinds`.
    ///
    /// With [`TokenSet::EMPTY_TOKENS`] this is "next meaningful token".
    pub fn find_next_excluding(&self, kinds: TokenSet, from: usize) -> Option<usize> {
        self.kinds()
            .get(from..)?
            .iter()
            .position(|&kind| !kinds.contains(kind))
            .map(|offset| from + offset)
    }

    /// Clamp a backward-search start into the stream.
    fn clamp(&self, from: usize) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        Some(from.min(last))
    }
}
