use crate::matcher::{DataMatcher, MatchResult};
use crate::matchers::grammar::{comparison, parse_complete, CompareOp};
use crate::natex::Natex;

/// Parsed form of `>=5`, `<0.5`, `≠1` or a bare number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub op: CompareOp,
    pub operand: f64,
}

/// Relational test of a numeric value against a number. A bare number means
/// equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonMatcher;

impl DataMatcher for ComparisonMatcher {
    type Value = f64;
    type Data = Comparison;

    fn parse(&self, natex: &Natex) -> Option<Comparison> {
        let (op, operand) = parse_complete(natex.pattern(), comparison)?;
        Some(Comparison { op, operand })
    }

    fn matches(&self, value: &f64, data: &Comparison, _natex: &Natex) -> MatchResult {
        data.op.evaluate(*value, data.operand).into()
    }
}
