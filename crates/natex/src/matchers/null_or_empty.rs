use crate::matcher::{MatchResult, Matcher, ParsedData};
use crate::natex::Natex;
use crate::value::Value;

/// `null` tests for absence; `empty` tests strings, lists and maps for zero
/// length. Stateless: it never parses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOrEmptyMatcher;

impl Matcher for NullOrEmptyMatcher {
    fn should_parse(&self, _first: bool, _data: Option<&ParsedData>, _natex: &Natex) -> bool {
        false
    }

    fn matches(&self, value: &Value, _data: Option<&ParsedData>, natex: &Natex) -> MatchResult {
        let text = natex.pattern().trim();
        if natex.text_eq(text, "null") {
            return value.is_null().into();
        }
        if natex.text_eq(text, "empty") {
            return match value {
                Value::String(_) | Value::List(_) | Value::Map(_) => {
                    (value.len() == Some(0)).into()
                }
                _ => MatchResult::Indeterminate,
            };
        }
        MatchResult::Indeterminate
    }
}
