use crate::matcher::{MatchResult, ValueMatcher};
use crate::natex::Natex;
use crate::value::Value;

/// `*` matches every value, including null.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnythingMatcher;

impl ValueMatcher for AnythingMatcher {
    type Value = Value;

    fn matches(&self, _value: &Value, natex: &Natex) -> MatchResult {
        if natex.pattern().trim() == "*" {
            MatchResult::Match
        } else {
            MatchResult::Indeterminate
        }
    }
}
