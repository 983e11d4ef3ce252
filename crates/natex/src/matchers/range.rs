use crate::matcher::{DataMatcher, MatchResult};
use crate::matchers::grammar::{parse_complete, range};
use crate::natex::Natex;

/// Inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// `low-high`, inclusive on both ends. Negative bounds are written with a
/// leading minus: `-5--1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeMatcher;

impl DataMatcher for RangeMatcher {
    type Value = f64;
    type Data = Range;

    fn parse(&self, natex: &Natex) -> Option<Range> {
        let (low, high) = parse_complete(natex.pattern(), range)?;
        Some(Range { low, high })
    }

    fn matches(&self, value: &f64, range: &Range, _natex: &Natex) -> MatchResult {
        range.contains(*value).into()
    }
}
