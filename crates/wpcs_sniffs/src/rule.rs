//! The sniff interface.

use wpcs_diagnostic::Diagnostic;
use wpcs_ir::{TokenList, TokenSet};

/// A stateless check over a token stream.
///
/// The host calls [`Rule::check`] once for every token whose kind is in
/// [`Rule::register`], in source order. Calls are independent: a rule may
/// not rely on having seen earlier tokens.
pub trait Rule: Send + Sync {
    /// Dotted sniff name, e.g. `WordPress.PHP.YodaConditions`.
    fn name(&self) -> &'static str;

    /// Token kinds this rule is triggered on.
    fn register(&self) -> TokenSet;

    /// Check the token at `index`.
    ///
    /// Returns at most one diagnostic. Out-of-range indices yield `None`.
    fn check(&self, tokens: &TokenList, index: usize) -> Option<Diagnostic>;
}
