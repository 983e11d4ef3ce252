use crate::matcher::{DataMatcher, MatchResult};
use crate::natex::{Mode, Natex};
use crate::value::Value;

/// `a,b,c` against a list value.
///
/// In [`Mode::Exact`] the n-th sub-pattern must match the n-th element and
/// the lengths must agree; in [`Mode::Inclusive`] every sub-pattern must match
/// some element. A failed list match is indeterminate rather than a
/// mismatch, so later matchers still get to try the whole pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListMatcher;

impl DataMatcher for ListMatcher {
    type Value = [Value];
    type Data = Vec<Natex>;

    fn parse(&self, natex: &Natex) -> Option<Vec<Natex>> {
        if !natex.can_derive() {
            return None;
        }
        let items: Vec<Natex> = natex
            .pattern()
            .split(',')
            .map(|item| natex.derive(item.trim()))
            .collect();
        if items.is_empty() {
            return None;
        }
        Some(items)
    }

    fn matches(&self, value: &[Value], items: &Vec<Natex>, natex: &Natex) -> MatchResult {
        let matched = match natex.get_mode() {
            Mode::Exact => {
                value.len() == items.len()
                    && items.iter().zip(value).all(|(item, v)| item.matches(v))
            }
            Mode::Inclusive => items
                .iter()
                .all(|item| value.iter().any(|v| item.matches(v))),
        };
        MatchResult::match_or_defer(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(items: &[&str]) -> Value {
        Value::from(items.to_vec())
    }

    #[test]
    fn test_exact_mode_is_positional() {
        let natex = Natex::new("a,b,c").mode(Mode::Exact);
        assert!(natex.matches(&letters(&["a", "b", "c"])));
        assert!(!natex.matches(&letters(&["c", "b", "a"])));
        assert!(!natex.matches(&letters(&["a", "b"])));
        assert!(!natex.matches(&letters(&["a", "b", "c", "d"])));
    }

    #[test]
    fn test_inclusive_mode_is_containment() {
        let natex = Natex::new("a,b,c").mode(Mode::Inclusive);
        assert!(natex.matches(&letters(&["c", "b", "a"])));
        assert!(natex.matches(&letters(&["c", "x", "b", "a"])));
        assert!(!natex.matches(&letters(&["a", "b"])));
    }

    #[test]
    fn test_failure_defers() {
        let natex = Natex::new("a,b,c");
        let items = natex.parsed::<ListMatcher>().unwrap();
        let value = letters(&["c", "b", "a"]);
        let Value::List(elements) = &value else {
            unreachable!()
        };
        assert_eq!(
            ListMatcher.matches(elements, &items, &natex),
            MatchResult::Indeterminate
        );
    }

    #[test]
    fn test_sub_patterns_use_full_dialect() {
        let natex = Natex::new(">0, 1-5, null, H*");
        let value = Value::List(vec![7.into(), 3.into(), Value::Null, "Hey".into()]);
        assert!(natex.matches(&value));
    }

    #[test]
    fn test_single_segment_matches_singleton_list() {
        assert!(Natex::new("5").matches(&vec![5].into()));
    }

    #[test]
    fn test_non_list_values_defer() {
        let natex = Natex::new("1,2");
        assert_eq!(natex.evaluate(&Value::from(1)), MatchResult::Indeterminate);
        assert_eq!(natex.evaluate(&true.into()), MatchResult::Indeterminate);
        // A string falls through to the regular expression dialect.
        assert!(natex.matches(&"1,2".into()));
    }

    #[test]
    fn test_failed_list_falls_through_to_property() {
        let value = letters(&["a", "b"]);
        let exact = Natex::new("1:b");
        let items = exact.parsed::<ListMatcher>().unwrap();
        let Value::List(elements) = &value else {
            unreachable!()
        };
        assert_eq!(
            ListMatcher.matches(elements, &items, &exact),
            MatchResult::Indeterminate
        );
        assert!(exact.matches(&value));
        assert!(!Natex::new("1:a").matches(&value));

        assert!(Natex::new("1:b").mode(Mode::Inclusive).matches(&value));
    }

    #[test]
    fn test_nested_lists() {
        let value = Value::List(vec![vec![1].into(), vec![2].into()]);
        assert!(Natex::new("1,2").matches(&value));
    }
}
