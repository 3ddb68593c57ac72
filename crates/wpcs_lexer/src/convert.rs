//! Raw token to [`TokenKind`] conversion.

use wpcs_ir::{Span, TokenKind};

use crate::keywords;
use crate::raw_token::RawToken;
use crate::LexError;

/// Convert a raw token to a `TokenKind`.
///
/// `(` always maps to [`TokenKind::OpenParen`]; casts are recognised by the
/// lexer loop with [`cast_after_paren`] before conversion.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Whitespace => TokenKind::Whitespace,
        RawToken::LineComment => TokenKind::Comment,
        RawToken::BlockComment => {
            if is_doc_comment(slice) {
                TokenKind::DocComment
            } else {
                TokenKind::Comment
            }
        }
        RawToken::OpenTag => TokenKind::OpenTag,
        RawToken::CloseTag => TokenKind::CloseTag,

        RawToken::Variable => TokenKind::Variable,
        RawToken::Ident => keywords::lookup(slice).unwrap_or(TokenKind::Ident),

        RawToken::LNumber => TokenKind::LNumber,
        RawToken::DNumber => TokenKind::DNumber,
        RawToken::SingleQuoted => TokenKind::ConstantString,
        RawToken::DoubleQuoted => {
            if has_interpolation(slice) {
                TokenKind::DoubleQuotedString
            } else {
                TokenKind::ConstantString
            }
        }

        // Delimiters
        RawToken::LParen => TokenKind::OpenParen,
        RawToken::RParen => TokenKind::CloseParen,
        RawToken::LBracket => TokenKind::OpenSquareBracket,
        RawToken::RBracket => TokenKind::CloseSquareBracket,
        RawToken::LBrace => TokenKind::OpenCurly,
        RawToken::RBrace => TokenKind::CloseCurly,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::Arrow => TokenKind::ObjectOperator,
        RawToken::FatArrow => TokenKind::DoubleArrow,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,

        // Comparison
        RawToken::EqEq => TokenKind::IsEqual,
        RawToken::NotEq => TokenKind::IsNotEqual,
        RawToken::EqEqEq => TokenKind::IsIdentical,
        RawToken::NotEqEq => TokenKind::IsNotIdentical,
        RawToken::Lt => TokenKind::Less,
        RawToken::Gt => TokenKind::Greater,
        RawToken::LtEq => TokenKind::IsSmallerOrEqual,
        RawToken::GtEq => TokenKind::IsGreaterOrEqual,
        RawToken::Spaceship => TokenKind::Spaceship,
        RawToken::Coalesce => TokenKind::Coalesce,

        // Boolean
        RawToken::AmpAmp => TokenKind::BooleanAnd,
        RawToken::PipePipe => TokenKind::BooleanOr,
        RawToken::Bang => TokenKind::BooleanNot,

        // Arithmetic, string, bitwise, assignment
        RawToken::Eq => TokenKind::Equal,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Multiply,
        RawToken::Slash => TokenKind::Divide,
        RawToken::Percent => TokenKind::Modulus,
        RawToken::Dot => TokenKind::StringConcat,
        RawToken::Amp => TokenKind::BitwiseAnd,
        RawToken::Pipe => TokenKind::BitwiseOr,
        RawToken::Caret => TokenKind::BitwiseXor,
        RawToken::PlusPlus => TokenKind::Inc,
        RawToken::MinusMinus => TokenKind::Dec,
        RawToken::DotEq => TokenKind::ConcatEqual,
        RawToken::PlusEq => TokenKind::PlusEqual,
        RawToken::MinusEq => TokenKind::MinusEqual,
    }
}

/// Cast type closed by `)` at the start of `rest`, the text after a `(`.
///
/// Returns the cast kind and the number of bytes of `rest` up to and
/// including the `)`. Only spaces and tabs may surround the type, as in
/// PHP. Anything else, including a plain word like `( $x )` or `(foo)`,
/// yields `None` and the `(` stays an ordinary parenthesis.
pub(crate) fn cast_after_paren(rest: &str) -> Option<(TokenKind, usize)> {
    let is_blank = |c: char| c == ' ' || c == '\t';
    let body = rest.trim_start_matches(is_blank);
    let word_len = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(body.len());
    let (word, after) = body.split_at(word_len);
    let cast = keywords::cast(word)?;
    let after = after.trim_start_matches(is_blank).strip_prefix(')')?;
    Some((cast, rest.len() - after.len()))
}

pub(crate) fn span(range: std::ops::Range<usize>, source_len: usize) -> Result<Span, LexError> {
    Span::try_from_range(range).map_err(|err| LexError::from_span_error(err, source_len))
}

/// `/**` followed by whitespace opens a doc comment; `/**/` does not.
fn is_doc_comment(slice: &str) -> bool {
    slice.starts_with("/**")
        && slice
            .as_bytes()
            .get(3)
            .is_some_and(u8::is_ascii_whitespace)
}

/// Whether a double-quoted literal (quotes included) interpolates anything.
///
/// Recognises `$name`, `${expr}` and `{$expr}`; escaped characters never
/// start an interpolation.
fn has_interpolation(slice: &str) -> bool {
    let opens_variable = |b: u8| b.is_ascii_alphabetic() || matches!(b, b'_' | b'{');
    let bytes = slice.as_bytes();
    let mut i = 0;
    while let Some(&byte) = bytes.get(i) {
        let next = bytes.get(i + 1).copied();
        match byte {
            b'\\' => {
                i += 2;
                continue;
            }
            b'$' if next.is_some_and(opens_variable) => return true,
            b'{' if next == Some(b'$') => return true,
            _ => {}
        }
        i += 1;
    }
    false
}
