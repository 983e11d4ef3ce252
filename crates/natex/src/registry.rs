//! Ordered matcher chain, unique by matcher kind.

use crate::matcher::{ByData, ByValue, DataMatcher, Matcher, ValueMatcher};
use crate::matchers::{
    AnythingMatcher, ComparisonMatcher, ListMatcher, MultiFieldMatcher, NegationMatcher,
    NullOrEmptyMatcher, PropertyMatcher, RangeMatcher, RegexMatcher, VariableMatcher,
    WildcardMatcher,
};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
struct Entry {
    kind: TypeId,
    matcher: Arc<dyn Matcher>,
    any: Arc<dyn Any + Send + Sync>,
}

/// The dispatch chain of a pattern.
///
/// Order is priority: earlier matchers get the first chance to claim a
/// pattern. Each concrete matcher type appears at most once; inserting a
/// second instance of a type replaces the first in place.
///
/// Cloning is cheap and shares the matcher instances, which is how derived
/// patterns inherit their parent's chain.
#[derive(Clone, Default)]
pub struct MatcherList {
    entries: Vec<Entry>,
}

impl MatcherList {
    /// An empty chain. Every pattern evaluated with it is indeterminate.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in chain in its fixed priority order.
    pub fn standard() -> Self {
        Self::new()
            .with(ByValue(AnythingMatcher))
            .with(NullOrEmptyMatcher)
            .with(ByData(VariableMatcher::default()))
            .with(ByData(NegationMatcher))
            .with(ByData(WildcardMatcher))
            .with(ByData(ComparisonMatcher))
            .with(ByData(RangeMatcher))
            .with(ByData(ListMatcher))
            .with(ByData(RegexMatcher))
            .with(ByData(MultiFieldMatcher))
            .with(ByData(PropertyMatcher))
    }

    pub fn with<M: Matcher>(mut self, matcher: M) -> Self {
        self.insert(matcher);
        self
    }

    /// Appends `matcher`, or replaces the existing matcher of the same type
    /// at its current position.
    pub fn insert<M: Matcher>(&mut self, matcher: M) {
        let matcher = Arc::new(matcher);
        let entry = Entry {
            kind: TypeId::of::<M>(),
            matcher: matcher.clone(),
            any: matcher,
        };
        match self.position::<M>() {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn insert_value<M: ValueMatcher>(&mut self, matcher: M) {
        self.insert(ByValue(matcher));
    }

    pub fn insert_data<M: DataMatcher>(&mut self, matcher: M) {
        self.insert(ByData(matcher));
    }

    pub fn remove<M: Matcher>(&mut self) -> bool {
        match self.position::<M>() {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get<M: Matcher>(&self) -> Option<&M> {
        self.entries
            .iter()
            .find(|e| e.kind == TypeId::of::<M>())
            .and_then(|e| e.any.downcast_ref::<M>())
    }

    pub fn contains<M: Matcher>(&self) -> bool {
        self.position::<M>().is_some()
    }

    pub fn position<M: Matcher>(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.kind == TypeId::of::<M>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.matcher.name()).collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (TypeId, &dyn Matcher)> {
        self.entries.iter().map(|e| (e.kind, e.matcher.as_ref()))
    }
}

impl fmt::Debug for MatcherList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
