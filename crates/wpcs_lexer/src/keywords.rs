//! Keyword and cast-type resolution.
//!
//! PHP keywords are case-insensitive, so identifiers are matched against a
//! lowercase table with ASCII case folding instead of being lexed as separate
//! raw tokens. Identifiers outside the keyword length range are rejected
//! without any comparison.

use wpcs_ir::TokenKind;

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("if", TokenKind::If),
    ("or", TokenKind::LogicalOr),
    ("and", TokenKind::LogicalAnd),
    ("new", TokenKind::New),
    ("xor", TokenKind::LogicalXor),
    ("echo", TokenKind::Echo),
    ("else", TokenKind::Else),
    ("null", TokenKind::Null),
    ("self", TokenKind::SelfKw),
    ("true", TokenKind::True),
    ("array", TokenKind::Array),
    ("empty", TokenKind::Empty),
    ("false", TokenKind::False),
    ("isset", TokenKind::Isset),
    ("while", TokenKind::While),
    ("elseif", TokenKind::ElseIf),
    ("parent", TokenKind::Parent),
    ("return", TokenKind::Return),
    ("static", TokenKind::Static),
    ("foreach", TokenKind::Foreach),
    ("function", TokenKind::Function),
];

const CAST_TYPES: &[(&str, TokenKind)] = &[
    ("int", TokenKind::IntCast),
    ("integer", TokenKind::IntCast),
    ("bool", TokenKind::BoolCast),
    ("boolean", TokenKind::BoolCast),
    ("float", TokenKind::DoubleCast),
    ("double", TokenKind::DoubleCast),
    ("real", TokenKind::DoubleCast),
    ("string", TokenKind::StringCast),
    ("binary", TokenKind::BinaryCast),
    ("array", TokenKind::ArrayCast),
    ("object", TokenKind::ObjectCast),
    ("unset", TokenKind::UnsetCast),
];

/// Look up a keyword by identifier text, ignoring ASCII case.
///
/// Returns `None` for plain identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=8).contains(&text.len()) {
        return None;
    }
    find(KEYWORDS, text)
}

/// Look up the cast produced by `(word)`, ignoring ASCII case.
#[inline]
pub(crate) fn cast(word: &str) -> Option<TokenKind> {
    if !(3..=7).contains(&word.len()) {
        return None;
    }
    find(CAST_TYPES, word)
}

fn find(table: &[(&str, TokenKind)], text: &str) -> Option<TokenKind> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
        .map(|&(_, kind)| kind)
}
