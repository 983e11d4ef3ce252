//! The matcher contract and the typed adapters built on top of it.
//!
//! Every pattern dialect implements [`Matcher`]. Most dialects only care
//! about one value shape and one parsed-data type, so they implement the
//! simpler [`ValueMatcher`] or [`DataMatcher`] traits and are registered
//! through the [`ByValue`] / [`ByData`] adapters, which perform the checked
//! downcasts and defer with [`MatchResult::Indeterminate`] when they fail.

use crate::natex::Natex;
use crate::value::{Value, ValueType};
use std::any::Any;
use std::ops::Not;
use std::sync::Arc;

/// Parsed data cached per pattern instance and matcher kind.
pub type ParsedData = Arc<dyn Any + Send + Sync>;

/// Verdict of a single matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchResult {
    Match,
    Mismatch,
    /// The dialect does not apply here; the next matcher gets a turn.
    #[default]
    Indeterminate,
}

impl MatchResult {
    pub fn is_determinate(self) -> bool {
        self != MatchResult::Indeterminate
    }

    pub fn to_bool(self) -> Option<bool> {
        match self {
            MatchResult::Match => Some(true),
            MatchResult::Mismatch => Some(false),
            MatchResult::Indeterminate => None,
        }
    }

    /// `Match` on success, `Indeterminate` otherwise. Used by dialects whose
    /// failed structural match must still let later matchers try.
    pub fn match_or_defer(matched: bool) -> Self {
        if matched {
            MatchResult::Match
        } else {
            MatchResult::Indeterminate
        }
    }
}

impl From<bool> for MatchResult {
    fn from(matched: bool) -> Self {
        if matched {
            MatchResult::Match
        } else {
            MatchResult::Mismatch
        }
    }
}

impl Not for MatchResult {
    type Output = MatchResult;

    fn not(self) -> Self::Output {
        match self {
            MatchResult::Match => MatchResult::Mismatch,
            MatchResult::Mismatch => MatchResult::Match,
            MatchResult::Indeterminate => MatchResult::Indeterminate,
        }
    }
}

/// A self-contained handler for one pattern dialect.
pub trait Matcher: Send + Sync + 'static {
    /// Translates the pattern text into structured data, or `None` if this
    /// dialect's syntax does not apply.
    fn parse(&self, _natex: &Natex) -> Option<ParsedData> {
        None
    }

    /// Decides whether to (re)run [`Matcher::parse`] before a match attempt.
    /// `first` is true when this pattern instance has never been parsed by
    /// this matcher.
    fn should_parse(&self, first: bool, _data: Option<&ParsedData>, _natex: &Natex) -> bool {
        first
    }

    fn matches(&self, value: &Value, data: Option<&ParsedData>, natex: &Natex) -> MatchResult;

    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A matcher that needs no parsed data, only a value of a given shape.
pub trait ValueMatcher: Send + Sync + 'static {
    type Value: ValueType + ?Sized;

    fn matches(&self, value: &Self::Value, natex: &Natex) -> MatchResult;
}

/// A matcher with typed parsed data and a value of a given shape.
pub trait DataMatcher: Send + Sync + 'static {
    type Value: ValueType + ?Sized;
    type Data: Any + Send + Sync;

    fn parse(&self, natex: &Natex) -> Option<Self::Data>;

    fn should_parse(&self, first: bool, _data: Option<&Self::Data>, _natex: &Natex) -> bool {
        first
    }

    fn matches(&self, value: &Self::Value, data: &Self::Data, natex: &Natex) -> MatchResult;
}

/// Adapts a [`ValueMatcher`] to the [`Matcher`] contract.
#[derive(Debug, Clone, Default)]
pub struct ByValue<M>(pub M);

impl<M: ValueMatcher> Matcher for ByValue<M> {
    fn should_parse(&self, _first: bool, _data: Option<&ParsedData>, _natex: &Natex) -> bool {
        false
    }

    fn matches(&self, value: &Value, _data: Option<&ParsedData>, natex: &Natex) -> MatchResult {
        match <M::Value as ValueType>::cast(value) {
            Some(v) => self.0.matches(v, natex),
            None => MatchResult::Indeterminate,
        }
    }

    fn name(&self) -> &'static str {
        std::any::type_name::<M>()
    }
}

/// Adapts a [`DataMatcher`] to the [`Matcher`] contract.
#[derive(Debug, Clone, Default)]
pub struct ByData<M>(pub M);

impl<M: DataMatcher> Matcher for ByData<M> {
    fn parse(&self, natex: &Natex) -> Option<ParsedData> {
        self.0
            .parse(natex)
            .map(|data| Arc::new(data) as ParsedData)
    }

    fn should_parse(&self, first: bool, data: Option<&ParsedData>, natex: &Natex) -> bool {
        match data {
            None => self.0.should_parse(first, None, natex),
            Some(data) => match data.downcast_ref::<M::Data>() {
                Some(typed) => self.0.should_parse(first, Some(typed), natex),
                // A foreign cache entry is a bug upstream, not a dialect miss.
                None => false,
            },
        }
    }

    fn matches(&self, value: &Value, data: Option<&ParsedData>, natex: &Natex) -> MatchResult {
        let Some(value) = <M::Value as ValueType>::cast(value) else {
            return MatchResult::Indeterminate;
        };
        let Some(data) = data.and_then(|d| d.downcast_ref::<M::Data>()) else {
            return MatchResult::Indeterminate;
        };
        self.0.matches(value, data, natex)
    }

    fn name(&self) -> &'static str {
        std::any::type_name::<M>()
    }
}
