/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Values produced by scope and binding callbacks at render time.
//!
//! The compiler never evaluates callbacks. These types exist so that the
//! render step and the callbacks agree on what a "usable" scope value is.

use indexmap::IndexMap;

/// A value returned by a [`Producer`](crate::callback::Producer).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    String(String),

    /// A boolean value.
    Bool(bool),

    /// A numeric value.
    Number(f64),

    /// A list of values.
    List(Vec<Value>),

    /// A map of string keys to values, in insertion order.
    Map(IndexMap<String, Value>),

    /// A null/missing value.
    Null,
}

impl Value {
    /// Check if this value is "truthy" for `with` and `if` directives.
    ///
    /// Truthiness rules (matching `text/template`):
    /// - `false`, `0` and null are falsy
    /// - Empty strings, lists and maps are falsy
    /// - Everything else is truthy, including the string "false"
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => *n != 0.0,
            Value::List(items) => !items.is_empty(),
            Value::Map(m) => !m.is_empty(),
            Value::Null => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
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

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());

        assert!(Value::from("hello").is_truthy());
        assert!(Value::from("false").is_truthy()); // "false" string is truthy!
        assert!(!Value::from("").is_truthy());

        assert!(Value::from(3_i64).is_truthy());
        assert!(!Value::from(0.0).is_truthy());

        assert!(Value::List(vec![Value::Bool(false)]).is_truthy()); // non-empty list
        assert!(!Value::List(vec![]).is_truthy());

        let mut map = IndexMap::new();
        map.insert("key".to_string(), Value::Null);
        assert!(Value::Map(map).is_truthy());
        assert!(!Value::Map(IndexMap::new()).is_truthy());

        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(None::<&str>).is_truthy());
    }
}
