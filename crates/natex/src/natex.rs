//! The pattern value and the match engine that drives its matcher chain.

use crate::matcher::{ByData, DataMatcher, MatchResult, Matcher, ParsedData};
use crate::registry::MatcherList;
use crate::value::Value;
use parking_lot::Mutex;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Deepest nesting of derived patterns. Dialects that would derive past it
/// do not apply, so a pattern like `!!!…!1` nested beyond it is
/// indeterminate.
pub const MAX_DEPTH: usize = 256;

/// How composite sub-patterns relate to composite values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Positional: the n-th sub-pattern matches the n-th element.
    #[default]
    Exact,
    /// Containment: each sub-pattern matches some element, in any order.
    Inclusive,
}

/// A natural expression: pattern text plus the configuration used to match
/// values against it.
///
/// # Example
///
/// ```
/// use natex::{Mode, Natex, Value};
///
/// assert!(Natex::new(">0").matches(&1.into()));
/// assert!(Natex::new("A.*D").matches(&"ABCD".into()));
///
/// let letters = Value::from(vec!["c", "b", "a"]);
/// assert!(!Natex::new("a,b,c").matches(&letters));
/// assert!(Natex::new("a,b,c").mode(Mode::Inclusive).matches(&letters));
/// ```
pub struct Natex {
    pattern: String,
    matchers: MatcherList,
    mode: Mode,
    case_insensitive: bool,
    root: bool,
    depth: usize,
    cache: Mutex<HashMap<TypeId, Option<ParsedData>>>,
    bindings: Arc<Mutex<HashMap<String, Value>>>,
}

impl Natex {
    /// A root pattern with the standard matcher chain, exact mode and
    /// case-insensitive keywords.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_matchers(pattern, MatcherList::standard())
    }

    pub fn with_matchers(pattern: impl Into<String>, matchers: MatcherList) -> Self {
        Self {
            pattern: pattern.into(),
            matchers,
            mode: Mode::Exact,
            case_insensitive: true,
            root: true,
            depth: 0,
            cache: Mutex::new(HashMap::new()),
            bindings: Arc::default(),
        }
    }

    /// A pattern for `pattern` that copies the matcher chain, mode and case
    /// sensitivity of `parent`. Its parse cache starts empty; variable
    /// bindings are shared with the parent.
    pub fn derived(pattern: impl Into<String>, parent: &Natex) -> Self {
        Self {
            pattern: pattern.into(),
            matchers: parent.matchers.clone(),
            mode: parent.mode,
            case_insensitive: parent.case_insensitive,
            root: false,
            depth: parent.depth + 1,
            cache: Mutex::new(HashMap::new()),
            bindings: parent.bindings.clone(),
        }
    }

    /// Shorthand for [`Natex::derived`] with `self` as the parent.
    pub fn derive(&self, pattern: impl Into<String>) -> Natex {
        Natex::derived(pattern, self)
    }

    /// Number of derivations between this pattern and its root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether sub-patterns may still be derived from this one. Dialects that
    /// nest check this in `parse` and decline once [`MAX_DEPTH`] is reached.
    pub fn can_derive(&self) -> bool {
        self.depth < MAX_DEPTH
    }

    /// An independent copy of this pattern with an empty parse cache and its
    /// own variable bindings.
    pub fn fork(&self) -> Natex {
        Natex {
            root: self.root,
            depth: self.depth,
            bindings: Arc::default(),
            ..Natex::derived(self.pattern.clone(), self)
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.set_mode(mode);
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.set_case_insensitive(case_insensitive);
        self
    }

    pub fn with_matcher<M: Matcher>(mut self, matcher: M) -> Self {
        self.matchers_mut().insert(matcher);
        self
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.cache.get_mut().clear();
    }

    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        self.case_insensitive = case_insensitive;
        self.cache.get_mut().clear();
    }

    /// Mutable access to the chain. Clears the parse cache, since a replaced
    /// matcher must not see its predecessor's data.
    pub fn matchers_mut(&mut self) -> &mut MatcherList {
        self.cache.get_mut().clear();
        &mut self.matchers
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matchers(&self) -> &MatcherList {
        &self.matchers
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether this pattern was created directly rather than derived from a
    /// parent by a matcher.
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Compares `text` with a keyword, honoring the case sensitivity setting.
    pub fn text_eq(&self, text: &str, keyword: &str) -> bool {
        if self.case_insensitive {
            text.eq_ignore_ascii_case(keyword)
        } else {
            text == keyword
        }
    }

    /// The value bound to variable `name` by the last evaluation, if that
    /// evaluation matched. Bindings of a failed root evaluation are dropped.
    pub fn binding(&self, name: &str) -> Option<Value> {
        self.bindings.lock().get(name).cloned()
    }

    pub fn bindings(&self) -> HashMap<String, Value> {
        self.bindings.lock().clone()
    }

    /// Binds `name` to `value` unless it is already bound, and returns the
    /// value bound afterwards.
    pub fn bind(&self, name: &str, value: &Value) -> Value {
        self.bindings
            .lock()
            .entry(name.to_string())
            .or_insert_with(|| value.clone())
            .clone()
    }

    pub fn matches(&self, value: &Value) -> bool {
        self.evaluate(value) == MatchResult::Match
    }

    /// Runs the matcher chain and returns the first determinate verdict, or
    /// `Indeterminate` if no matcher claimed the pattern.
    pub fn evaluate(&self, value: &Value) -> MatchResult {
        if !self.root {
            return self.dispatch(value);
        }
        self.bindings.lock().clear();
        let result = self.dispatch(value);
        if result != MatchResult::Match {
            self.bindings.lock().clear();
        }
        result
    }

    fn dispatch(&self, value: &Value) -> MatchResult {
        for (kind, matcher) in self.matchers.iter() {
            let data = self.ensure_parsed(kind, matcher, false);
            let result = matcher.matches(value, data.as_ref(), self);
            tracing::trace!(
                pattern = %self.pattern,
                matcher = matcher.name(),
                ?result,
                "dispatch"
            );
            if result.is_determinate() {
                return result;
            }
        }
        MatchResult::Indeterminate
    }

    /// Parses with every matcher in the chain. With `force`, matchers'
    /// re-parse policies are bypassed and every entry is rebuilt.
    pub fn parse(&self, force: bool) {
        for (kind, matcher) in self.matchers.iter() {
            self.ensure_parsed(kind, matcher, force);
        }
    }

    /// Parses with the registered matcher of type `M` only. Returns `false`
    /// if no such matcher is registered.
    pub fn parse_matcher<M: Matcher>(&self, force: bool) -> bool {
        let kind = TypeId::of::<M>();
        match self.matchers.iter().find(|(k, _)| *k == kind) {
            Some((kind, matcher)) => {
                self.ensure_parsed(kind, matcher, force);
                true
            }
            None => false,
        }
    }

    /// The typed data a registered [`DataMatcher`] parsed from this pattern,
    /// parsing first if needed. `None` when the matcher is not registered or
    /// its dialect does not apply.
    pub fn parsed<M: DataMatcher>(&self) -> Option<Arc<M::Data>> {
        let kind = TypeId::of::<ByData<M>>();
        let (kind, matcher) = self.matchers.iter().find(|(k, _)| *k == kind)?;
        self.ensure_parsed(kind, matcher, false)?
            .downcast::<M::Data>()
            .ok()
    }

    fn ensure_parsed(
        &self,
        kind: TypeId,
        matcher: &dyn Matcher,
        force: bool,
    ) -> Option<ParsedData> {
        let (first, existing) = match self.cache.lock().get(&kind) {
            Some(data) => (false, data.clone()),
            None => (true, None),
        };
        if !force && !matcher.should_parse(first, existing.as_ref(), self) {
            return existing;
        }

        // Parsing may derive and match sub-patterns, so the lock is not held.
        let data = matcher.parse(self);
        tracing::debug!(
            pattern = %self.pattern,
            matcher = matcher.name(),
            parsed = data.is_some(),
            "parse"
        );
        self.cache.lock().insert(kind, data.clone());
        data
    }
}

impl Clone for Natex {
    fn clone(&self) -> Self {
        self.fork()
    }
}

impl fmt::Debug for Natex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Natex")
            .field("pattern", &self.pattern)
            .field("mode", &self.mode)
            .field("case_insensitive", &self.case_insensitive)
            .field("matchers", &self.matchers)
            .finish()
    }
}

impl fmt::Display for Natex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl From<&str> for Natex {
    fn from(pattern: &str) -> Self {
        Natex::new(pattern)
    }
}

impl From<String> for Natex {
    fn from(pattern: String) -> Self {
        Natex::new(pattern)
    }
}

/// Matches `value` against `pattern` with the default configuration.
pub fn is_match(pattern: &str, value: &Value) -> bool {
    Natex::new(pattern).matches(value)
}
