/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The function registry handed to the render engine.

use indexmap::IndexMap;

use crate::callback::Callback;
use crate::error::{CompileError, CompileResult};

/// Mapping from generated identifier to callback, in registration order.
///
/// Entries are only ever added. Registering an identifier again is allowed
/// as long as it names the same callback.
#[derive(Debug)]
pub struct FunctionRegistry<R> {
    functions: IndexMap<String, Callback<R>>,
}

impl<R> Default for FunctionRegistry<R> {
    fn default() -> Self {
        Self {
            functions: IndexMap::new(),
        }
    }
}

impl<R> FunctionRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `callback` under `id`, or verify that `id` already names it.
    pub fn insert(&mut self, id: impl Into<String>, callback: Callback<R>) -> CompileResult<()> {
        let id = id.into();
        if let Some(existing) = self.functions.get(&id) {
            if existing.same_as(&callback) {
                return Ok(());
            }
            return Err(CompileError::RegistryConflict { id });
        }
        self.functions.insert(id, callback);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Callback<R>> {
        self.functions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.functions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered identifiers, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Callback<R>)> {
        self.functions.iter().map(|(id, f)| (id.as_str(), f))
    }
}
