/*
 * callback.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-request callbacks referenced by generated template functions.
//!
//! Callbacks are opaque to the compiler: it only records them under a
//! generated identifier. The render engine calls them with the request
//! context `R`.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Callback deciding whether a guarded block renders.
pub type Predicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// Callback producing the operand of a `with` or a variable binding.
pub type Producer<R> = Arc<dyn Fn(&R) -> Value + Send + Sync>;

/// Wrap a closure as a [`Predicate`].
pub fn predicate<R, F>(f: F) -> Predicate<R>
where
    F: Fn(&R) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`Producer`].
pub fn producer<R, F>(f: F) -> Producer<R>
where
    F: Fn(&R) -> Value + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A callback stored in the function registry.
pub enum Callback<R> {
    Predicate(Predicate<R>),
    Producer(Producer<R>),
}

impl<R> Callback<R> {
    /// Address of the shared allocation behind this callback.
    ///
    /// Clones of the same `Arc` share an identity. Two live callbacks built
    /// separately never do, even if their closures are identical.
    pub fn identity(&self) -> usize {
        match self {
            Callback::Predicate(f) => Arc::as_ptr(f) as *const () as usize,
            Callback::Producer(f) => Arc::as_ptr(f) as *const () as usize,
        }
    }

    pub fn same_as(&self, other: &Callback<R>) -> bool {
        self.identity() == other.identity()
    }

    /// Call the callback against a request context.
    ///
    /// Predicates yield [`Value::Bool`].
    pub fn invoke(&self, request: &R) -> Value {
        match self {
            Callback::Predicate(f) => Value::Bool(f(request)),
            Callback::Producer(f) => f(request),
        }
    }
}

impl<R> Clone for Callback<R> {
    fn clone(&self) -> Self {
        match self {
            Callback::Predicate(f) => Callback::Predicate(Arc::clone(f)),
            Callback::Producer(f) => Callback::Producer(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for Callback<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Callback::Predicate(_) => "Predicate",
            Callback::Producer(_) => "Producer",
        };
        write!(f, "{kind}@{:#x}", self.identity())
    }
}

impl<R> From<&Predicate<R>> for Callback<R> {
    fn from(f: &Predicate<R>) -> Self {
        Callback::Predicate(Arc::clone(f))
    }
}

impl<R> From<&Producer<R>> for Callback<R> {
    fn from(f: &Producer<R>) -> Self {
        Callback::Producer(Arc::clone(f))
    }
}
