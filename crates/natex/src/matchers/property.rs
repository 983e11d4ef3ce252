use crate::matcher::{DataMatcher, MatchResult};
use crate::natex::Natex;
use crate::value::Value;

/// Parsed form of `Owner.Name:pattern`.
#[derive(Debug, Clone)]
pub struct PropertyPath {
    pub names: Vec<String>,
    pub pattern: Natex,
}

/// `path:pattern` resolves a dotted member path on the value and matches the
/// member found there against `pattern`.
///
/// Members are resolved through [`Value::member`]; a missing member, or any
/// step taken from an absent value, yields null. Like the list dialect, a
/// failed match is indeterminate rather than a mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyMatcher;

impl DataMatcher for PropertyMatcher {
    type Value = Value;
    type Data = PropertyPath;

    fn parse(&self, natex: &Natex) -> Option<PropertyPath> {
        if !natex.can_derive() {
            return None;
        }
        let (path, pattern) = natex.pattern().split_once(':')?;
        Some(PropertyPath {
            names: path.trim().split('.').map(str::to_string).collect(),
            pattern: natex.derive(pattern),
        })
    }

    fn matches(&self, value: &Value, data: &PropertyPath, _natex: &Natex) -> MatchResult {
        if value.is_null() {
            return MatchResult::Indeterminate;
        }
        let leaf = value.path(data.names.iter().map(String::as_str));
        MatchResult::match_or_defer(data.pattern.matches(&leaf))
    }
}
