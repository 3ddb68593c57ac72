//! Minimal PHP tokenizer using logos.
//!
//! Produces a [`TokenList`] with the token kinds the sniffs classify on.
//! Whitespace and comments are kept. Bytes the lexer does not recognise
//! become [`TokenKind::Unknown`] tokens, so every byte of the source is
//! covered by exactly one token.
//!
//! Heredoc/nowdoc, inline HTML and attributes are not recognised.

mod convert;
mod keywords;
mod lex_error;
mod raw_token;

use logos::Logos;
use wpcs_ir::{Token, TokenKind, TokenList};

pub use lex_error::LexError;
use raw_token::RawToken;

/// Lex PHP source into a `TokenList`.
///
/// # Errors
///
/// Returns [`LexError::SourceTooLarge`] if the source cannot be addressed
/// by `u32` spans.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let len = source.len();
    if u32::try_from(len).is_err() {
        return Err(LexError::SourceTooLarge { len });
    }

    let mut result = TokenList::with_capacity(len / 3);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        match token_result {
            Ok(RawToken::LParen) => {
                let kind = match convert::cast_after_paren(logos.remainder()) {
                    Some((cast, rest_len)) => {
                        logos.bump(rest_len);
                        cast
                    }
                    None => TokenKind::OpenParen,
                };
                result.push(Token::new(kind, convert::span(logos.span(), len)?));
            }
            Ok(raw) => {
                let kind = convert::convert_token(raw, logos.slice());
                result.push(Token::new(kind, convert::span(range, len)?));
            }
            Err(()) => {
                result.push(Token::new(TokenKind::Unknown, convert::span(range, len)?));
            }
        }
    }

    Ok(result)
}
