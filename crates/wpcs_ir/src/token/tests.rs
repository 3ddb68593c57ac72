use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::TokenKind::{
    BooleanOr, CloseCurly, CloseParen, CloseSquareBracket, Comment, ConstantString, Ident, If,
    IsEqual, OpenCurly, OpenParen, OpenSquareBracket, Semicolon, Variable, Whitespace,
};

// === TokenKind ===

#[test]
fn test_all_kinds_in_discriminant_order() {
    let indices: Vec<u8> = TokenKind::ALL
        .iter()
        .map(|k| k.discriminant_index())
        .collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(indices, sorted, "ALL must be unique and in discriminant order");
    assert!(indices
        .iter()
        .all(|&i| i <= TokenKind::MAX_DISCRIMINANT));
}

#[test]
fn test_kind_names_are_unique() {
    let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TokenKind::ALL.len());
}

#[test]
fn test_kind_display_uses_tokenizer_name() {
    assert_eq!(TokenKind::IsIdentical.to_string(), "T_IS_IDENTICAL");
    assert_eq!(TokenKind::Ident.to_string(), "T_STRING");
}

#[test]
fn test_trivia_kinds() {
    let trivia: Vec<TokenKind> = TokenKind::ALL.into_iter().filter(|k| k.is_trivia()).collect();
    assert_eq!(
        trivia,
        vec![TokenKind::Whitespace, TokenKind::Comment, TokenKind::DocComment]
    );
}

#[test]
fn test_closers_pair_with_openers() {
    for kind in TokenKind::ALL {
        if let Some(closer) = kind.closer() {
            assert!(closer.is_closer(), "{kind} closes with {closer}");
        }
    }
    assert_eq!(OpenParen.closer(), Some(CloseParen));
    assert_eq!(Variable.closer(), None);
}

// === TokenSet ===

#[test]
fn test_token_set_empty() {
    let set = TokenSet::new();
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
    assert!(!set.contains(Variable));
}

#[test]
fn test_token_set_with_and_single() {
    let set = TokenSet::single(Variable).with(If).with(If);
    assert_eq!(set.count(), 2);
    assert!(set.contains(Variable));
    assert!(set.contains(If));
    assert!(!set.contains(TokenKind::ElseIf));
}

#[test]
fn test_token_set_union_intersection() {
    let a = TokenSet::new().with(Variable).with(If);
    let b = TokenSet::new().with(If).with(Semicolon);
    assert_eq!(a.union(b).count(), 3);
    assert_eq!(a.intersection(b), TokenSet::single(If));
}

#[test]
fn test_token_set_boundaries_of_discriminant_range() {
    let set = TokenSet::single(TokenKind::Variable).with(TokenKind::Unknown);
    assert!(set.contains(TokenKind::Variable));
    assert!(set.contains(TokenKind::Unknown));
    assert_eq!(set.count(), 2);
}

#[test]
fn test_token_set_iter_and_collect() {
    let set: TokenSet = [CloseParen, Variable, OpenParen].into_iter().collect();
    let kinds: Vec<TokenKind> = set.iter().collect();
    assert_eq!(kinds, vec![Variable, OpenParen, CloseParen]);
}

#[test]
fn test_predefined_sets() {
    assert_eq!(TokenSet::EMPTY_TOKENS.count(), 3);
    assert_eq!(TokenSet::BOOLEAN_OPERATORS.count(), 5);
    assert_eq!(TokenSet::CAST_TOKENS.count(), 8);
    assert_eq!(TokenSet::EQUALITY_OPERATORS.count(), 4);
    assert!(!TokenSet::BOOLEAN_OPERATORS.contains(TokenKind::BooleanNot));
    assert!(TokenSet::EMPTY_TOKENS
        .iter()
        .all(TokenKind::is_trivia));
}

// === TokenList ===

#[test]
fn test_from_kinds_assigns_ordered_spans() {
    let list = TokenList::from_kinds(&[Variable, Whitespace, IsEqual]);
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].span, Span::new(0, 1));
    assert_eq!(list[2].span, Span::new(2, 3));
    assert_eq!(list.kinds(), &[Variable, Whitespace, IsEqual]);
    assert_eq!(list.kind(3), None);
}

#[test]
fn test_nested_groups_are_paired() {
    // ( [ { } ] )
    let list = TokenList::from_kinds(&[
        OpenParen,
        OpenSquareBracket,
        OpenCurly,
        CloseCurly,
        CloseSquareBracket,
        CloseParen,
    ]);
    assert_eq!(list.partner(0), Some(5));
    assert_eq!(list.partner(5), Some(0));
    assert_eq!(list.partner(1), Some(4));
    assert_eq!(list.partner(2), Some(3));
}

#[test]
fn test_unbalanced_groups_stay_unpaired() {
    // ( ] )  -- the stray `]` does not close the paren
    let list = TokenList::from_kinds(&[OpenParen, CloseSquareBracket, CloseParen, CloseParen]);
    assert_eq!(list.partner(1), None);
    assert_eq!(list.partner(0), Some(2));
    assert_eq!(list.partner(3), None);
    assert_eq!(list.partner(99), None);
}

#[test]
fn test_unclosed_opener_has_no_partner() {
    let list = TokenList::from_kinds(&[OpenParen, Variable]);
    assert_eq!(list.partner(0), None);
}

// === Search ===

#[test]
fn test_find_previous_respects_limit() {
    // $a || $b
    let list = TokenList::from_kinds(&[Variable, BooleanOr, Variable]);
    let vars = TokenSet::single(Variable);
    assert_eq!(list.find_previous(vars, 2, 0), Some(2));
    assert_eq!(list.find_previous(vars, 1, 0), Some(0));
    assert_eq!(list.find_previous(vars, 1, 1), None);
    assert_eq!(list.find_previous(vars, 0, 1), None);
}

#[test]
fn test_find_previous_clamps_past_end() {
    let list = TokenList::from_kinds(&[Variable, Whitespace]);
    assert_eq!(
        list.find_previous(TokenSet::single(Variable), 100, 0),
        Some(0)
    );
    assert_eq!(
        TokenList::new().find_previous(TokenSet::single(Variable), 0, 0),
        None
    );
}

#[test]
fn test_find_previous_in_statement_stops_at_semicolon() {
    // if ; $a ==
    let list = TokenList::from_kinds(&[If, Semicolon, Variable, IsEqual]);
    assert_eq!(
        list.find_previous_in_statement(TokenSet::single(If), 3),
        None
    );
}

#[test]
fn test_find_previous_in_statement_skips_balanced_groups() {
    // if ( foo ( $a || $b ) ==
    let list = TokenList::from_kinds(&[
        If, OpenParen, Ident, OpenParen, Variable, BooleanOr, Variable, CloseParen, IsEqual,
    ]);
    let boundary = TokenSet::BOOLEAN_OPERATORS.with(If);
    assert_eq!(list.find_previous_in_statement(boundary, 8), Some(0));
    // A plain backwards search would have stopped at the nested `||`.
    assert_eq!(list.find_previous(boundary, 8, 0), Some(5));
}

#[test]
fn test_find_previous_in_statement_enters_unclosed_opener() {
    // if ( $a || $b ==   -- the open paren is not a closer, so no jump
    let list = TokenList::from_kinds(&[If, OpenParen, Variable, BooleanOr, Variable, IsEqual]);
    let boundary = TokenSet::BOOLEAN_OPERATORS.with(If);
    assert_eq!(list.find_previous_in_statement(boundary, 5), Some(3));
}

#[test]
fn test_find_previous_in_statement_unpaired_closer() {
    // || ) ==  -- the stray `)` is stepped over like any other token
    let list = TokenList::from_kinds(&[BooleanOr, CloseParen, IsEqual]);
    assert_eq!(
        list.find_previous_in_statement(TokenSet::BOOLEAN_OPERATORS, 2),
        Some(0)
    );
}

#[test]
fn test_find_next_and_excluding() {
    // == /* c */ ' '  'str'
    let list = TokenList::from_kinds(&[IsEqual, Whitespace, Comment, Whitespace, ConstantString]);
    assert_eq!(
        list.find_next_excluding(TokenSet::EMPTY_TOKENS, 1),
        Some(4)
    );
    assert_eq!(list.find_next(TokenSet::single(Comment), 0), Some(2));
    assert_eq!(list.find_next(TokenSet::single(Variable), 0), None);
    assert_eq!(list.find_next_excluding(TokenSet::EMPTY_TOKENS, 5), None);
    assert_eq!(list.find_next_excluding(TokenSet::EMPTY_TOKENS, 50), None);
}

#[test]
fn test_find_next_excluding_only_trivia_left() {
    let list = TokenList::from_kinds(&[IsEqual, Whitespace, Comment]);
    assert_eq!(list.find_next_excluding(TokenSet::EMPTY_TOKENS, 1), None);
}

fn arb_kind() -> impl Strategy<Value = TokenKind> {
    prop::sample::select(TokenKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_partners_are_symmetric(kinds in prop::collection::vec(arb_kind(), 0..64)) {
        let list = TokenList::from_kinds(&kinds);
        for i in 0..list.len() {
            if let Some(j) = list.partner(i) {
                prop_assert_eq!(list.partner(j), Some(i));
                prop_assert_ne!(i, j);
            }
        }
    }

    #[test]
    fn prop_statement_search_stays_in_bounds(
        kinds in prop::collection::vec(arb_kind(), 0..64),
        from in 0usize..80,
    ) {
        let list = TokenList::from_kinds(&kinds);
        let set = TokenSet::BOOLEAN_OPERATORS.with(TokenKind::If);
        if let Some(found) = list.find_previous_in_statement(set, from) {
            prop_assert!(found < list.len());
            prop_assert!(found <= from);
            prop_assert!(set.contains(list.kinds()[found]));
        }
    }
}
