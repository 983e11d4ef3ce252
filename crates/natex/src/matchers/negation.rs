use crate::matcher::{DataMatcher, MatchResult};
use crate::natex::Natex;
use crate::value::Value;

/// `!pattern` inverts the verdict of `pattern`. An indeterminate operand
/// stays indeterminate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegationMatcher;

impl DataMatcher for NegationMatcher {
    type Value = Value;
    type Data = Natex;

    fn parse(&self, natex: &Natex) -> Option<Natex> {
        if !natex.can_derive() {
            return None;
        }
        let operand = natex.pattern().trim_start().strip_prefix('!')?.trim_start();
        if operand.is_empty() {
            return None;
        }
        Some(natex.derive(operand))
    }

    fn matches(&self, value: &Value, operand: &Natex, _natex: &Natex) -> MatchResult {
        !operand.evaluate(value)
    }
}
