//! Immutable token stream.

use std::fmt;

use super::{Token, TokenIdx, TokenKind};
use crate::Span;

/// An ordered token stream for one source unit.
///
/// Besides the tokens themselves the list keeps two parallel arrays:
/// - `kinds`: the dense kind of every token, so scans never touch spans
/// - `partners`: for every bracket, parenthesis or brace, the index of its
///   matching counterpart (or [`TokenIdx::NONE`] when unbalanced)
///
/// Pairs are resolved as tokens are pushed. A closer only matches the
/// innermost open group of the same family; anything else stays unpaired,
/// so malformed input never fails construction.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `kinds[i] == tokens[i].kind` for all `i`.
    kinds: Vec<TokenKind>,
    partners: Vec<TokenIdx>,
    /// Openers still waiting for their closer.
    open: Vec<usize>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList::default()
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            kinds: Vec::with_capacity(capacity),
            partners: Vec::with_capacity(capacity),
            open: Vec::new(),
        }
    }

    /// Create from a Vec of tokens.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let mut list = TokenList::with_capacity(tokens.len());
        for token in tokens {
            list.push(token);
        }
        list
    }

    /// Build a stream from bare kinds.
    ///
    /// Token `i` gets the one-byte span `i..i+1`, which keeps spans unique
    /// and ordered for streams that were never lexed from text.
    pub fn from_kinds(kinds: &[TokenKind]) -> Self {
        kinds
            .iter()
            .zip(0u32..)
            .map(|(&kind, offset)| Token::new(kind, Span::new(offset, offset + 1)))
            .collect()
    }

    /// Push a token, pairing it with an open group if it closes one.
    pub fn push(&mut self, token: Token) {
        let index = self.tokens.len();
        self.tokens.push(token);
        self.kinds.push(token.kind);
        self.partners.push(TokenIdx::NONE);

        if token.kind.closer().is_some() {
            self.open.push(index);
        } else if token.kind.is_closer() {
            let Some(&opener) = self.open.last() else {
                return;
            };
            if self.kinds[opener].closer() == Some(token.kind) {
                self.open.pop();
                self.partners[opener] = TokenIdx::from_usize(index);
                self.partners[index] = TokenIdx::from_usize(opener);
            }
        }
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Get the kind of the token at index.
    #[inline]
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        self.kinds.get(index).copied()
    }

    /// Get the dense kinds slice.
    #[inline]
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    /// Index of the matching bracket for the bracket at `index`.
    #[inline]
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(index).and_then(|idx| idx.index())
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut list = TokenList::new();
        for token in iter {
            list.push(token);
        }
        list
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
