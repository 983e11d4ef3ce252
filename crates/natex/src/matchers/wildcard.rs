use crate::matcher::{DataMatcher, MatchResult};
use crate::natex::Natex;
use regex::{Regex, RegexBuilder};

/// Whole-string glob: `*` matches any run of characters, `?` exactly one.
///
/// Text that reads as a regular expression (`.*`, groups, classes, anchors,
/// alternation, escapes) is left to [`RegexMatcher`](super::RegexMatcher).
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardMatcher;

const REGEX_SYNTAX: &[char] = &['\\', '(', ')', '[', ']', '{', '}', '^', '$', '|', '+'];

fn is_glob(text: &str) -> bool {
    if !text.contains(['*', '?']) || text.contains(REGEX_SYNTAX) {
        return false;
    }
    !text
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == b'.' && matches!(w[1], b'*' | b'?'))
}

/// Translates a glob into an anchored regex, escaping the literal parts.
pub(crate) fn glob_to_regex(glob: &str) -> String {
    let mut regex_str = String::from("(?s)^");
    let mut literal = String::new();
    for c in glob.chars() {
        let wildcard = match c {
            '*' => ".*",
            '?' => ".",
            _ => {
                literal.push(c);
                continue;
            }
        };
        regex_str.push_str(&regex::escape(&literal));
        literal.clear();
        regex_str.push_str(wildcard);
    }
    regex_str.push_str(&regex::escape(&literal));
    regex_str.push('$');
    regex_str
}

impl DataMatcher for WildcardMatcher {
    type Value = str;
    type Data = Regex;

    fn parse(&self, natex: &Natex) -> Option<Regex> {
        if !is_glob(natex.pattern()) {
            return None;
        }
        RegexBuilder::new(&glob_to_regex(natex.pattern()))
            .case_insensitive(natex.is_case_insensitive())
            .build()
            .ok()
    }

    fn matches(&self, value: &str, glob: &Regex, _natex: &Natex) -> MatchResult {
        glob.is_match(value).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_glob_to_regex() {
        assert_eq!(glob_to_regex("H*"), "(?s)^H.*$");
        assert_eq!(glob_to_regex("a?c.txt"), r"(?s)^a.c\.txt$");
        assert_eq!(glob_to_regex("*"), "(?s)^.*$");
    }

    #[test]
    fn test_is_glob() {
        assert!(is_glob("H*"));
        assert!(is_glob("*.json"));
        assert!(is_glob("colou?r"));
        assert!(!is_glob("plain"));
        assert!(!is_glob("A.*D"));
        assert!(!is_glob("a+b*"));
        assert!(!is_glob(r"\d*"));
        assert!(!is_glob("^ab?"));
    }

    #[test]
    fn test_anchored_match() {
        let natex = Natex::new("H*");
        assert!(natex.matches(&"Hi".into()));
        assert!(natex.matches(&"h".into()));
        assert!(!natex.matches(&"Oh Hi".into()));
        assert!(Natex::new("*.json").matches(&"data.json".into()));
        assert!(!Natex::new("*.json").matches(&"data.jsonl".into()));
        assert!(Natex::new("a?c").matches(&"abc".into()));
        assert!(!Natex::new("a?c").matches(&"ac".into()));
    }

    #[test]
    fn test_mismatch_is_definite() {
        let natex = Natex::new("H*");
        let glob = natex.parsed::<WildcardMatcher>().unwrap();
        assert_eq!(
            WildcardMatcher.matches("Xi", &glob, &natex),
            MatchResult::Mismatch
        );
    }

    #[test]
    fn test_case_sensitive() {
        let natex = Natex::new("H*").case_insensitive(false);
        assert!(natex.matches(&"Hi".into()));
        assert!(!natex.matches(&"hi".into()));
    }

    #[test]
    fn test_non_string_values_defer() {
        assert!(!Natex::new("1*").matches(&Value::from(12)));
    }

    #[test]
    fn test_regex_text_is_not_claimed() {
        assert!(Natex::new("A.*D").parsed::<WildcardMatcher>().is_none());
        assert!(Natex::new("A.*D").matches(&"ABCD".into()));
    }
}
