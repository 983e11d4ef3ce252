use crate::matcher::{DataMatcher, MatchResult};
use crate::natex::Natex;
use regex::Regex;

/// The pattern text as a regular expression, searched (unanchored) in
/// string values. Once the text compiles, a failed search is a definite
/// mismatch.
///
/// Regular expressions are always case-sensitive; the case setting of the
/// pattern only governs keywords and globs. Use `(?i)` for a case-insensitive
/// regex.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexMatcher;

impl DataMatcher for RegexMatcher {
    type Value = str;
    type Data = Regex;

    fn parse(&self, natex: &Natex) -> Option<Regex> {
        match Regex::new(natex.pattern()) {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::debug!(
                    pattern = natex.pattern(),
                    error = %e,
                    "not a regular expression"
                );
                None
            }
        }
    }

    fn matches(&self, value: &str, regex: &Regex, _natex: &Natex) -> MatchResult {
        regex.is_match(value).into()
    }
}
