use crate::matcher::{DataMatcher, MatchResult};
use crate::natex::Natex;
use crate::value::Value;

/// `Text:H* Number:1`: whitespace-separated property groups that must all
/// match the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiFieldMatcher;

impl DataMatcher for MultiFieldMatcher {
    type Value = Value;
    type Data = Vec<Natex>;

    fn parse(&self, natex: &Natex) -> Option<Vec<Natex>> {
        if !natex.can_derive() {
            return None;
        }
        let groups: Vec<&str> = natex.pattern().split_whitespace().collect();
        if groups.len() < 2 || !groups.iter().all(|g| g.contains(':')) {
            return None;
        }
        Some(groups.into_iter().map(|g| natex.derive(g)).collect())
    }

    fn matches(&self, value: &Value, groups: &Vec<Natex>, _natex: &Natex) -> MatchResult {
        MatchResult::match_or_defer(groups.iter().all(|group| group.matches(value)))
    }
}
