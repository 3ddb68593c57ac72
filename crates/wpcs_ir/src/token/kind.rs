//! PHP token kinds.

use std::fmt;

/// Kind of a PHP token.
///
/// A closed, payload-free enumeration: the sniffs classify tokens by kind
/// alone. Discriminants are laid out in contiguous semantic ranges with gaps
/// for future additions:
///
/// | Range   | Category                 |
/// |---------|--------------------------|
/// | 0-9     | Variables and literals   |
/// | 10-39   | Keywords                 |
/// | 40-49   | Type casts               |
/// | 50-69   | Punctuation              |
/// | 70-79   | Comparison operators     |
/// | 80-89   | Boolean operators        |
/// | 90-109  | Arithmetic & assignment  |
/// | 110-127 | Trivia and special       |
///
/// # Invariant
///
/// All discriminants are < 128 so that [`TokenSet`](super::TokenSet) can
/// use a single `u128` bitset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Variables and literals (0-9) ===
    /// `$name`
    Variable = 0,
    /// Single-quoted string, or double-quoted without interpolation.
    ConstantString = 1,
    /// Double-quoted string containing `$var` or `{$` interpolation.
    DoubleQuotedString = 2,
    /// Integer literal.
    LNumber = 3,
    /// Floating point literal.
    DNumber = 4,
    /// Bare identifier: function, constant, or class name.
    Ident = 5,

    // === Keywords (10-39) ===
    If = 10,
    ElseIf = 11,
    Else = 12,
    While = 13,
    Foreach = 14,
    Return = 15,
    Echo = 16,
    Function = 17,
    New = 18,
    Array = 19,
    Isset = 20,
    Empty = 21,
    True = 22,
    False = 23,
    Null = 24,
    SelfKw = 25,
    Parent = 26,
    Static = 27,

    // === Type casts (40-49) ===
    IntCast = 40,
    DoubleCast = 41,
    StringCast = 42,
    ArrayCast = 43,
    ObjectCast = 44,
    BoolCast = 45,
    UnsetCast = 46,
    BinaryCast = 47,

    // === Punctuation (50-69) ===
    OpenParen = 50,          // (
    CloseParen = 51,         // )
    OpenSquareBracket = 52,  // [
    CloseSquareBracket = 53, // ]
    OpenCurly = 54,          // {
    CloseCurly = 55,         // }
    Semicolon = 56,          // ;
    Comma = 57,              // ,
    DoubleColon = 58,        // ::
    ObjectOperator = 59,     // ->
    DoubleArrow = 60,        // =>
    Question = 61,           // ?
    Colon = 62,              // :

    // === Comparison operators (70-79) ===
    IsEqual = 70,          // ==
    IsNotEqual = 71,       // != or <>
    IsIdentical = 72,      // ===
    IsNotIdentical = 73,   // !==
    Less = 74,             // <
    Greater = 75,          // >
    IsSmallerOrEqual = 76, // <=
    IsGreaterOrEqual = 77, // >=
    Spaceship = 78,        // <=>
    Coalesce = 79,         // ??

    // === Boolean operators (80-89) ===
    BooleanAnd = 80, // &&
    BooleanOr = 81,  // ||
    LogicalAnd = 82, // and
    LogicalOr = 83,  // or
    LogicalXor = 84, // xor
    BooleanNot = 85, // !

    // === Arithmetic & assignment (90-109) ===
    Equal = 90,         // =
    Plus = 91,          // +
    Minus = 92,         // -
    Multiply = 93,      // *
    Divide = 94,        // /
    Modulus = 95,       // %
    StringConcat = 96,  // .
    BitwiseAnd = 97,    // &
    BitwiseOr = 98,     // |
    BitwiseXor = 99,    // ^
    Inc = 100,          // ++
    Dec = 101,          // --
    ConcatEqual = 102,  // .=
    PlusEqual = 103,    // +=
    MinusEqual = 104,   // -=

    // === Trivia and special (110-127) ===
    Whitespace = 110,
    Comment = 111,
    DocComment = 112,
    OpenTag = 113,  // <?php or <?=
    CloseTag = 114, // ?>
    Unknown = 127,
}

impl TokenKind {
    /// Maximum discriminant value across all variants.
    pub const MAX_DISCRIMINANT: u8 = 127;

    /// Every token kind, in discriminant order.
    pub const ALL: [TokenKind; 82] = [
        TokenKind::Variable,
        TokenKind::ConstantString,
        TokenKind::DoubleQuotedString,
        TokenKind::LNumber,
        TokenKind::DNumber,
        TokenKind::Ident,
        TokenKind::If,
        TokenKind::ElseIf,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Foreach,
        TokenKind::Return,
        TokenKind::Echo,
        TokenKind::Function,
        TokenKind::New,
        TokenKind::Array,
        TokenKind::Isset,
        TokenKind::Empty,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::SelfKw,
        TokenKind::Parent,
        TokenKind::Static,
        TokenKind::IntCast,
        TokenKind::DoubleCast,
        TokenKind::StringCast,
        TokenKind::ArrayCast,
        TokenKind::ObjectCast,
        TokenKind::BoolCast,
        TokenKind::UnsetCast,
        TokenKind::BinaryCast,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenSquareBracket,
        TokenKind::CloseSquareBracket,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::DoubleColon,
        TokenKind::ObjectOperator,
        TokenKind::DoubleArrow,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::IsEqual,
        TokenKind::IsNotEqual,
        TokenKind::IsIdentical,
        TokenKind::IsNotIdentical,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::IsSmallerOrEqual,
        TokenKind::IsGreaterOrEqual,
        TokenKind::Spaceship,
        TokenKind::Coalesce,
        TokenKind::BooleanAnd,
        TokenKind::BooleanOr,
        TokenKind::LogicalAnd,
        TokenKind::LogicalOr,
        TokenKind::LogicalXor,
        TokenKind::BooleanNot,
        TokenKind::Equal,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Modulus,
        TokenKind::StringConcat,
        TokenKind::BitwiseAnd,
        TokenKind::BitwiseOr,
        TokenKind::BitwiseXor,
        TokenKind::Inc,
        TokenKind::Dec,
        TokenKind::ConcatEqual,
        TokenKind::PlusEqual,
        TokenKind::MinusEqual,
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::DocComment,
        TokenKind::OpenTag,
        TokenKind::CloseTag,
        TokenKind::Unknown,
    ];

    /// Discriminant used as the bit position in a `TokenSet`.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// PHP tokenizer name of this kind, as used in sniff messages.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Variable => "T_VARIABLE",
            TokenKind::ConstantString => "T_CONSTANT_ENCAPSED_STRING",
            TokenKind::DoubleQuotedString => "T_DOUBLE_QUOTED_STRING",
            TokenKind::LNumber => "T_LNUMBER",
            TokenKind::DNumber => "T_DNUMBER",
            TokenKind::Ident => "T_STRING",
            TokenKind::If => "T_IF",
            TokenKind::ElseIf => "T_ELSEIF",
            TokenKind::Else => "T_ELSE",
            TokenKind::While => "T_WHILE",
            TokenKind::Foreach => "T_FOREACH",
            TokenKind::Return => "T_RETURN",
            TokenKind::Echo => "T_ECHO",
            TokenKind::Function => "T_FUNCTION",
            TokenKind::New => "T_NEW",
            TokenKind::Array => "T_ARRAY",
            TokenKind::Isset => "T_ISSET",
            TokenKind::Empty => "T_EMPTY",
            TokenKind::True => "T_TRUE",
            TokenKind::False => "T_FALSE",
            TokenKind::Null => "T_NULL",
            TokenKind::SelfKw => "T_SELF",
            TokenKind::Parent => "T_PARENT",
            TokenKind::Static => "T_STATIC",
            TokenKind::IntCast => "T_INT_CAST",
            TokenKind::DoubleCast => "T_DOUBLE_CAST",
            TokenKind::StringCast => "T_STRING_CAST",
            TokenKind::ArrayCast => "T_ARRAY_CAST",
            TokenKind::ObjectCast => "T_OBJECT_CAST",
            TokenKind::BoolCast => "T_BOOL_CAST",
            TokenKind::UnsetCast => "T_UNSET_CAST",
            TokenKind::BinaryCast => "T_BINARY_CAST",
            TokenKind::OpenParen => "T_OPEN_PARENTHESIS",
            TokenKind::CloseParen => "T_CLOSE_PARENTHESIS",
            TokenKind::OpenSquareBracket => "T_OPEN_SQUARE_BRACKET",
            TokenKind::CloseSquareBracket => "T_CLOSE_SQUARE_BRACKET",
            TokenKind::OpenCurly => "T_OPEN_CURLY_BRACKET",
            TokenKind::CloseCurly => "T_CLOSE_CURLY_BRACKET",
            TokenKind::Semicolon => "T_SEMICOLON",
            TokenKind::Comma => "T_COMMA",
            TokenKind::DoubleColon => "T_DOUBLE_COLON",
            TokenKind::ObjectOperator => "T_OBJECT_OPERATOR",
            TokenKind::DoubleArrow => "T_DOUBLE_ARROW",
            TokenKind::Question => "T_INLINE_THEN",
            TokenKind::Colon => "T_COLON",
            TokenKind::IsEqual => "T_IS_EQUAL",
            TokenKind::IsNotEqual => "T_IS_NOT_EQUAL",
            TokenKind::IsIdentical => "T_IS_IDENTICAL",
            TokenKind::IsNotIdentical => "T_IS_NOT_IDENTICAL",
            TokenKind::Less => "T_LESS_THAN",
            TokenKind::Greater => "T_GREATER_THAN",
            TokenKind::IsSmallerOrEqual => "T_IS_SMALLER_OR_EQUAL",
            TokenKind::IsGreaterOrEqual => "T_IS_GREATER_OR_EQUAL",
            TokenKind::Spaceship => "T_SPACESHIP",
            TokenKind::Coalesce => "T_COALESCE",
            TokenKind::BooleanAnd => "T_BOOLEAN_AND",
            TokenKind::BooleanOr => "T_BOOLEAN_OR",
            TokenKind::LogicalAnd => "T_LOGICAL_AND",
            TokenKind::LogicalOr => "T_LOGICAL_OR",
            TokenKind::LogicalXor => "T_LOGICAL_XOR",
            TokenKind::BooleanNot => "T_BOOLEAN_NOT",
            TokenKind::Equal => "T_EQUAL",
            TokenKind::Plus => "T_PLUS",
            TokenKind::Minus => "T_MINUS",
            TokenKind::Multiply => "T_MULTIPLY",
            TokenKind::Divide => "T_DIVIDE",
            TokenKind::Modulus => "T_MODULUS",
            TokenKind::StringConcat => "T_STRING_CONCAT",
            TokenKind::BitwiseAnd => "T_BITWISE_AND",
            TokenKind::BitwiseOr => "T_BITWISE_OR",
            TokenKind::BitwiseXor => "T_BITWISE_XOR",
            TokenKind::Inc => "T_INC",
            TokenKind::Dec => "T_DEC",
            TokenKind::ConcatEqual => "T_CONCAT_EQUAL",
            TokenKind::PlusEqual => "T_PLUS_EQUAL",
            TokenKind::MinusEqual => "T_MINUS_EQUAL",
            TokenKind::Whitespace => "T_WHITESPACE",
            TokenKind::Comment => "T_COMMENT",
            TokenKind::DocComment => "T_DOC_COMMENT",
            TokenKind::OpenTag => "T_OPEN_TAG",
            TokenKind::CloseTag => "T_CLOSE_TAG",
            TokenKind::Unknown => "T_UNKNOWN",
        }
    }

    /// Whitespace and comments: tokens every sniff skips.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// The closing kind for an opening bracket, parenthesis, or brace.
    #[inline]
    pub const fn closer(self) -> Option<TokenKind> {
        match self {
            TokenKind::OpenParen => Some(TokenKind::CloseParen),
            TokenKind::OpenSquareBracket => Some(TokenKind::CloseSquareBracket),
            TokenKind::OpenCurly => Some(TokenKind::CloseCurly),
            _ => None,
        }
    }

    /// Check if this kind closes a bracketed group.
    #[inline]
    pub const fn is_closer(self) -> bool {
        matches!(
            self,
            TokenKind::CloseParen | TokenKind::CloseSquareBracket | TokenKind::CloseCurly
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
