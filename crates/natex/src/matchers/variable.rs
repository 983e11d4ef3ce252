use crate::matcher::{DataMatcher, MatchResult};
use crate::matchers::grammar::{parse_complete, variable};
use crate::natex::Natex;
use crate::value::Value;

/// `$name` binds the value on first use within an evaluation and compares
/// against the bound value afterwards, so `a:$x b:$x` requires two fields to
/// be equal.
///
/// Bindings are shared by a root pattern and every pattern derived from it,
/// and are cleared each time the root pattern is evaluated. After a match
/// they can be read back with [`Natex::binding`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableMatcher;

impl DataMatcher for VariableMatcher {
    type Value = Value;
    type Data = String;

    fn parse(&self, natex: &Natex) -> Option<String> {
        parse_complete(natex.pattern(), variable).map(str::to_string)
    }

    fn matches(&self, value: &Value, name: &String, natex: &Natex) -> MatchResult {
        (natex.bind(name, value) == *value).into()
    }
}
