//! Natural-expression matching.
//!
//! A [`Natex`] is a short textual pattern such as `>0`, `1-5`, `a,b,c`,
//! `A.*D` or `Text:H* Number:1` that is matched against a runtime [`Value`],
//! yielding a boolean verdict. Patterns are handled by an ordered chain of
//! [`Matcher`]s, one per dialect; each matcher either decides
//! ([`MatchResult::Match`] / [`MatchResult::Mismatch`]) or defers to the next
//! one ([`MatchResult::Indeterminate`]). A pattern no matcher claims never
//! matches.
//!
//! Supports:
//! - Anything: `*`
//! - Null and empty checks: `null`, `empty`
//! - Variables: `$x` binds on first use and compares afterwards
//! - Negation: `!<pattern>`
//! - Globs: `H*`, `a?c`
//! - Comparisons: `>0`, `<=5`, `≥1`, `42`
//! - Ranges: `1-5`, `-5--1`
//! - Lists: `a,b,c` (positional or containment, see [`Mode`])
//! - Regular expressions: `A.*D`
//! - Property paths: `Owner.Name:A*`
//! - Multiple fields: `Text:H* Number:1`
//!
//! # Example
//!
//! ```
//! use natex::{Mode, Natex, Value};
//!
//! let record: Value = [("Text", Value::from("Hi")), ("Number", Value::from(1))]
//!     .into_iter()
//!     .collect();
//!
//! assert!(Natex::new("Text:H* Number:1").matches(&record));
//! assert!(Natex::new("Number:>=1").matches(&record));
//! assert!(!Natex::new("Number:!1").matches(&record));
//!
//! let tags = Value::from(vec!["b", "a"]);
//! assert!(!Natex::new("a,b").matches(&tags));
//! assert!(Natex::new("a,b").mode(Mode::Inclusive).matches(&tags));
//! ```

mod matcher;
pub mod matchers;
mod natex;
mod registry;
mod value;

pub use matcher::{ByData, ByValue, DataMatcher, MatchResult, Matcher, ParsedData, ValueMatcher};
pub use natex::{is_match, Mode, Natex, MAX_DEPTH};
pub use registry::MatcherList;
pub use value::{Members, Value, ValueType};
