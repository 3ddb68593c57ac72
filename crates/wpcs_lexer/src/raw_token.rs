//! Raw tokens recognised by logos, before keyword and cast resolution.

use logos::{Lexer, Logos};

/// Raw token from logos.
///
/// Whitespace and comments are real tokens here: sniffs walk over them
/// explicitly. Keywords are lexed as [`RawToken::Ident`] and resolved later
/// because PHP keywords are case-insensitive.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    #[regex(r"#[^\n]*")]
    LineComment,

    /// `/* */` or `/** */`; told apart in conversion.
    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"<\?[pP][hH][pP]")]
    #[token("<?=")]
    OpenTag,

    #[token("?>")]
    CloseTag,

    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,

    /// Name, keyword, or namespace-qualified name.
    #[regex(r"\\?[a-zA-Z_][a-zA-Z0-9_]*(\\[a-zA-Z_][a-zA-Z0-9_]*)*")]
    Ident,

    #[regex(r"[0-9]+")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    #[regex(r"0[bB][01]+")]
    LNumber,

    #[regex(r"[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+\.([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    DNumber,

    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    SingleQuoted,

    /// Constant unless the body interpolates a variable.
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    DoubleQuoted,

    // Delimiters
    /// Also the start of a cast; see [`crate::convert::cast_after_paren`].
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("::")]
    DoubleColon,
    #[token("->")]
    Arrow,
    #[token("=>")]
    FatArrow,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // Comparison
    #[token("==")]
    EqEq,
    #[token("!=")]
    #[token("<>")]
    NotEq,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<=>")]
    Spaceship,
    #[token("??")]
    Coalesce,

    // Boolean
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,

    // Arithmetic, string, bitwise, assignment
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token(".")]
    Dot,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token(".=")]
    DotEq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
}

/// Extend a `/*` match through the closing `*/`, or to the end of input
/// when the comment is unterminated.
fn block_comment(lex: &mut Lexer<'_, RawToken>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
}
