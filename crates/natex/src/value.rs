//! Dynamic values matched by natural expressions.
//!
//! Host applications convert their data into [`Value`]. Records that should be
//! reachable by property paths either become a [`Value::Map`] or implement
//! [`Members`] and are wrapped in [`Value::Object`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Member lookup supplied by a host object.
///
/// This is the only capability property and multi-field patterns need from
/// the objects they inspect.
///
/// # Example
///
/// ```
/// use natex::{Members, Natex, Value};
///
/// #[derive(Debug)]
/// struct Record {
///     text: String,
///     number: i64,
/// }
///
/// impl Members for Record {
///     fn member(&self, name: &str) -> Option<Value> {
///         match name {
///             "Text" => Some(self.text.as_str().into()),
///             "Number" => Some(self.number.into()),
///             _ => None,
///         }
///     }
/// }
///
/// let record = Value::object(Record { text: "Hi".into(), number: 1 });
/// assert!(Natex::new("Text:H* Number:1").matches(&record));
/// ```
pub trait Members: fmt::Debug + Send + Sync {
    /// Returns the named member, or `None` if the object has no such member.
    fn member(&self, name: &str) -> Option<Value>;
}

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(Arc<dyn Members>),
}

impl Value {
    pub fn object(members: impl Members + 'static) -> Self {
        Value::Object(Arc::new(members))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    /// Element count of sized values: characters of a string, elements of a
    /// list or entries of a map.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Resolves one step of a member path.
    ///
    /// Maps are looked up by key, lists by decimal index, host objects through
    /// [`Members`]. Everything else has no members.
    pub fn member(&self, name: &str) -> Option<Value> {
        match self {
            Value::Map(entries) => entries.get(name).cloned(),
            Value::List(items) => name.parse::<usize>().ok().and_then(|i| items.get(i).cloned()),
            Value::Object(object) => object.member(name),
            _ => None,
        }
    }

    /// Walks a dotted member path. A missing member, or any step taken from
    /// an absent value, resolves to [`Value::Null`].
    pub fn path<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Value {
        let mut current = self.clone();
        for name in names {
            current = current.member(name).unwrap_or(Value::Null);
        }
        current
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Object(object) => write!(f, "{:?}", object),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Checked downcast from a [`Value`] to the shape a typed matcher accepts.
///
/// A failed cast is how a matcher learns that its dialect does not apply to
/// the value at hand.
pub trait ValueType {
    fn cast(value: &Value) -> Option<&Self>;
}

impl ValueType for Value {
    fn cast(value: &Value) -> Option<&Self> {
        Some(value)
    }
}

impl ValueType for str {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl ValueType for f64 {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl ValueType for bool {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl ValueType for [Value] {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl ValueType for BTreeMap<String, Value> {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl ValueType for dyn Members {
    fn cast(value: &Value) -> Option<&Self> {
        match value {
            Value::Object(object) => Some(object.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Point {
        x: f64,
        y: f64,
    }

    impl Members for Point {
        fn member(&self, name: &str) -> Option<Value> {
            match name {
                "x" => Some(self.x.into()),
                "y" => Some(self.y.into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_member_lookup() {
        let map: Value = [("a", Value::from(1)), ("b", Value::from("two"))]
            .into_iter()
            .collect();
        assert_eq!(map.member("a"), Some(Value::Number(1.0)));
        assert_eq!(map.member("missing"), None);

        let list = Value::from(vec!["x", "y"]);
        assert_eq!(list.member("1"), Some(Value::from("y")));
        assert_eq!(list.member("2"), None);
        assert_eq!(list.member("first"), None);

        let point = Value::object(Point { x: 1.0, y: 2.0 });
        assert_eq!(point.member("y"), Some(Value::Number(2.0)));
        assert_eq!(Value::from(3).member("x"), None);
    }

    #[test]
    fn test_path_through_absent_value() {
        let inner: Value = [("point", Value::object(Point { x: 5.0, y: 0.0 }))]
            .into_iter()
            .collect();
        let outer: Value = [("inner", inner)].into_iter().collect();
        assert_eq!(outer.path(["inner", "point", "x"]), Value::Number(5.0));
        assert_eq!(outer.path(["inner", "nope", "x"]), Value::Null);
        assert_eq!(Value::Null.path(["a", "b"]), Value::Null);
    }

    #[test]
    fn test_len() {
        assert_eq!(Value::from("héllo").len(), Some(5));
        assert_eq!(Value::List(vec![]).len(), Some(0));
        assert_eq!(Value::from(1).len(), None);
        assert_eq!(Value::Null.len(), None);
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"name": "bob", "tags": ["a", 1], "age": null}"#).unwrap();
        let value = Value::from(json);
        assert_eq!(value.member("name"), Some(Value::from("bob")));
        assert_eq!(
            value.member("tags"),
            Some(Value::List(vec![Value::from("a"), Value::from(1)]))
        );
        assert_eq!(value.member("age"), Some(Value::Null));
    }

    #[test]
    fn test_cast() {
        assert_eq!(str::cast(&Value::from("s")), Some("s"));
        assert_eq!(str::cast(&Value::from(1)), None);
        assert_eq!(f64::cast(&Value::from(2)), Some(&2.0));
        assert!(<[Value]>::cast(&Value::from(vec![1, 2])).is_some());
        assert!(<[Value]>::cast(&Value::Null).is_none());
        assert!(<dyn Members>::cast(&Value::object(Point { x: 0.0, y: 0.0 })).is_some());
    }

    #[test]
    fn test_objects_compare_by_identity() {
        let a = Value::object(Point { x: 0.0, y: 0.0 });
        let b = Value::object(Point { x: 0.0, y: 0.0 });
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
