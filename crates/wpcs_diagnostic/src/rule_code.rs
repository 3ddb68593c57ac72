//! Rule codes for all sniff diagnostics.
//!
//! Each code belongs to a sniff (`WordPress.PHP.YodaConditions`) and has a
//! short name (`NotYoda`). The full code joins the two with a dot and is what
//! users put in suppression comments and rulesets.

use std::fmt;
use std::str::FromStr;

/// Rule codes for all sniff diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RuleCode {
    /// Equality comparison with the variable on the left.
    NotYoda,
}

impl RuleCode {
    /// Every rule code.
    pub const ALL: [RuleCode; 1] = [RuleCode::NotYoda];

    /// Short code, unique within its sniff.
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleCode::NotYoda => "NotYoda",
        }
    }

    /// Dotted name of the sniff that owns this code.
    pub const fn sniff(self) -> &'static str {
        match self {
            RuleCode::NotYoda => "WordPress.PHP.YodaConditions",
        }
    }

    /// `sniff.code`, e.g. `WordPress.PHP.YodaConditions.NotYoda`.
    pub fn full_code(self) -> String {
        format!("{}.{}", self.sniff(), self.as_str())
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.sniff(), self.as_str())
    }
}

/// Error returned when a string names no known rule code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule code `{0}`")]
pub struct ParseRuleCodeError(pub String);

impl FromStr for RuleCode {
    type Err = ParseRuleCodeError;

    /// Accepts either the short code or the full dotted code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s || code.full_code() == s)
            .ok_or_else(|| ParseRuleCodeError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests;
