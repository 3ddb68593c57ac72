//! `WordPress.PHP.YodaConditions`: constants go on the left of `==`.
//!
//! Writing `'bar' === $foo` instead of `$foo === 'bar'` turns an accidental
//! `=` into a parse error. For every equality operator the rule runs two
//! bounded scans over the token stream:
//!
//! 1. **Left operand.** Walk back from the operator to the start of the
//!    condition (the nearest `&&`, `||`, `and`, `or`, `xor`, `if` or
//!    `elseif` in the same statement). The first variable or `]` means the
//!    left side is variable-like. A constant string, a parenthesis or
//!    `return` met first means there is nothing to reorder.
//! 2. **Right operand.** Only when the left side is variable-like. Look at
//!    the first meaningful token after the operator, stepping over a cast
//!    and over `self::`/`parent::`/`static::`. A variable there means a
//!    variable-to-variable comparison, which is fine. Anything else is a
//!    violation.
//!
//! The left scan stops at the first decisive token, so a constant string
//! anywhere between the condition start and the nearest variable exempts the
//! comparison (`$x . 'a' == 'b'` is not reported).

use tracing::trace;
use wpcs_diagnostic::{Diagnostic, RuleCode};
use wpcs_ir::{TokenKind, TokenList, TokenSet};

use crate::Rule;

/// Message reported for every violation.
pub const MESSAGE: &str = "Use Yoda Condition checks, you must.";

/// Tokens that start a condition: boolean connectives plus `if`/`elseif`.
pub const BOUNDARY_KINDS: TokenSet = TokenSet::BOOLEAN_OPERATORS
    .with(TokenKind::If)
    .with(TokenKind::ElseIf);

/// Left-operand tokens that make the comparison a candidate.
pub const VARIABLE_LIKE_KINDS: TokenSet = TokenSet::new()
    .with(TokenKind::Variable)
    .with(TokenKind::CloseSquareBracket);

/// Left-operand tokens that end the scan without a finding.
pub const EXEMPTING_LEFT_KINDS: TokenSet = TokenSet::new()
    .with(TokenKind::ConstantString)
    .with(TokenKind::CloseParen)
    .with(TokenKind::OpenParen)
    .with(TokenKind::Return);

/// Class qualifiers skipped, together with `::`, on the right-hand side.
pub const STATIC_QUALIFIERS: TokenSet = TokenSet::new()
    .with(TokenKind::SelfKw)
    .with(TokenKind::Parent)
    .with(TokenKind::Static);

const EMPTY_OR_DOUBLE_COLON: TokenSet = TokenSet::EMPTY_TOKENS.with(TokenKind::DoubleColon);

/// Outcome of the backward scan.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum LeftOperand {
    /// A variable or `]` was found first.
    VariableLike,
    /// An exempting token was found first.
    Exempt,
    /// The scan reached the boundary without a decisive token.
    Undecided,
}

/// The Yoda-conditions sniff.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct YodaConditions;

impl YodaConditions {
    /// Dotted sniff name.
    pub const NAME: &'static str = "WordPress.PHP.YodaConditions";

    /// Classify the left operand of the operator at `operator`.
    ///
    /// `boundary` itself is never inspected.
    fn scan_left(tokens: &TokenList, operator: usize, boundary: usize) -> LeftOperand {
        let kinds = tokens.kinds();
        for i in (boundary + 1..operator).rev() {
            let kind = kinds[i];
            if TokenSet::EMPTY_TOKENS.contains(kind) {
                continue;
            }
            if VARIABLE_LIKE_KINDS.contains(kind) {
                trace!(operator, at = i, ?kind, "left operand is variable-like");
                return LeftOperand::VariableLike;
            }
            if EXEMPTING_LEFT_KINDS.contains(kind) {
                trace!(operator, at = i, ?kind, "left operand exempt");
                return LeftOperand::Exempt;
            }
        }
        LeftOperand::Undecided
    }

    /// Position of the token that decides the right operand, if any.
    fn right_operand(tokens: &TokenList, operator: usize) -> Option<usize> {
        let mut next = tokens.find_next_excluding(TokenSet::EMPTY_TOKENS, operator + 1)?;

        if TokenSet::CAST_TOKENS.contains(tokens.kinds()[next]) {
            next = tokens.find_next_excluding(TokenSet::EMPTY_TOKENS, next + 1)?;
        }

        if STATIC_QUALIFIERS.contains(tokens.kinds()[next]) {
            next = tokens.find_next_excluding(EMPTY_OR_DOUBLE_COLON, next + 1)?;
        }

        Some(next)
    }
}

impl Rule for YodaConditions {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn register(&self) -> TokenSet {
        TokenSet::EQUALITY_OPERATORS
    }

    fn check(&self, tokens: &TokenList, operator: usize) -> Option<Diagnostic> {
        let token = tokens.get(operator)?;
        if !TokenSet::EQUALITY_OPERATORS.contains(token.kind) {
            return None;
        }

        // No condition start in this statement: scan back to the stream start.
        let boundary = tokens
            .find_previous_in_statement(BOUNDARY_KINDS, operator)
            .unwrap_or(0);
        trace!(operator, boundary, "condition boundary");

        if Self::scan_left(tokens, operator, boundary) != LeftOperand::VariableLike {
            return None;
        }

        let right = Self::right_operand(tokens, operator);
        let right_kind = right.map(|i| tokens.kinds()[i]);
        trace!(operator, ?right, ?right_kind, "right operand");

        if right_kind == Some(TokenKind::Variable) {
            return None;
        }

        let mut diag = Diagnostic::error(RuleCode::NotYoda)
            .with_message(MESSAGE)
            .with_label(token.span, "put the constant on the left of this comparison")
            .at_token(operator);
        if let Some(right) = right.and_then(|i| tokens.get(i)) {
            diag = diag.with_secondary_label(right.span, "this operand belongs on the left");
        }
        Some(diag)
    }
}
