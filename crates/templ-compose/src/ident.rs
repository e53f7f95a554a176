/*
 * ident.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Generation of template function identifiers.

use std::collections::HashMap;

use crate::callback::Callback;

/// Allocates a function identifier for each distinct callback in a pass.
///
/// Identifiers are `<prefix><n>`, numbered in the order callbacks are first
/// seen. Allocating the same callback again returns the identifier it already
/// has. Keys are callback identities, so the callbacks must outlive the
/// generator; [`Framework`](crate::framework::Framework) guarantees this by
/// keeping every allocated callback in its registry.
#[derive(Debug)]
pub struct IdentifierGenerator {
    prefix: String,
    assigned: HashMap<usize, String>,
}

impl IdentifierGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            assigned: HashMap::new(),
        }
    }

    /// Identifier for `callback`, allocating a fresh one on first sight.
    pub fn allocate<R>(&mut self, callback: &Callback<R>) -> String {
        let next = self.assigned.len();
        let prefix = &self.prefix;
        self.assigned
            .entry(callback.identity())
            .or_insert_with(|| format!("{prefix}{next}"))
            .clone()
    }

    /// Number of identifiers allocated so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::{predicate, producer};
    use crate::value::Value;

    #[test]
    fn test_distinct_callbacks_get_distinct_ids() {
        let a = Callback::from(&predicate(|_: &()| true));
        let b = Callback::from(&predicate(|_: &()| true));
        let c = Callback::from(&producer(|_: &()| Value::Null));

        let mut ids = IdentifierGenerator::new("fn");
        assert_eq!(ids.allocate(&a), "fn0");
        assert_eq!(ids.allocate(&b), "fn1");
        assert_eq!(ids.allocate(&c), "fn2");
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_same_callback_is_stable() {
        let shared = predicate(|_: &()| false);
        let first = Callback::from(&shared);
        let second = Callback::from(&shared);

        let mut ids = IdentifierGenerator::new("cb_");
        assert_eq!(ids.allocate(&first), "cb_0");
        assert_eq!(ids.allocate(&second), "cb_0");
        assert_eq!(ids.len(), 1);
    }
}
