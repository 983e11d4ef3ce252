//! Built-in pattern dialects, listed in their default priority order.

mod anything;
mod comparison;
pub mod grammar;
mod list;
mod multi_field;
mod negation;
mod null_or_empty;
mod property;
mod range;
mod regex;
mod variable;
mod wildcard;

pub use anything::AnythingMatcher;
pub use comparison::{Comparison, ComparisonMatcher};
pub use grammar::CompareOp;
pub use list::ListMatcher;
pub use multi_field::MultiFieldMatcher;
pub use negation::NegationMatcher;
pub use null_or_empty::NullOrEmptyMatcher;
pub use property::{PropertyMatcher, PropertyPath};
pub use range::{Range, RangeMatcher};
pub use regex::RegexMatcher;
pub use variable::VariableMatcher;
pub use wildcard::WildcardMatcher;
