/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Component tree types.
//!
//! A tree is built once by the caller and is never modified by compilation.
//! Compilation itself lives in [`crate::compile`].

use crate::callback::{Predicate, Producer};

/// A node in the component tree.
pub enum Node<R> {
    /// Template text written as-is.
    Literal(Literal),

    /// Children compiled in order.
    Fragment(Fragment<R>),

    /// Local binding: `{{$name := fn $r}}`
    Variable(Variable<R>),

    /// Scoped content: `{{with fn $r}}...{{end}}`
    With(With<R>),

    /// Guarded content: `{{if fn $r}}...{{end}}`
    Condition(Condition<R>),

    /// Exclusive chain: `{{if}}...{{else if}}...{{else}}...{{end}}`
    Conditions(Conditions<R>),
}

/// Literal template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub text: String,
}

/// An ordered list of children sharing one output stream.
pub struct Fragment<R> {
    pub children: Vec<Node<R>>,
}

/// Binds the result of a per-request callback to a template variable.
pub struct Variable<R> {
    /// Variable name, with or without the leading `$`. Must be an identifier.
    pub name: String,
    pub func: Producer<R>,
}

/// Narrows the template context to a per-request value for its content.
pub struct With<R> {
    pub func: Producer<R>,
    /// Absent content compiles to nothing.
    pub content: Option<Box<Node<R>>>,
}

/// Content guarded by a per-request predicate.
///
/// Without a predicate the content is unconditional. Inside a
/// [`Conditions`] chain such entries become the trailing `else` block.
pub struct Condition<R> {
    pub predicate: Option<Predicate<R>>,
    /// Absent content compiles to nothing.
    pub content: Option<Box<Node<R>>>,
}

/// Mutually exclusive conditions, rendered as one `if`/`else if`/`else` chain.
pub struct Conditions<R> {
    pub entries: Vec<Condition<R>>,
}

impl<R> Node<R> {
    pub fn literal(text: impl Into<String>) -> Self {
        Node::Literal(Literal { text: text.into() })
    }

    pub fn fragment(children: impl IntoIterator<Item = Node<R>>) -> Self {
        Node::Fragment(Fragment {
            children: children.into_iter().collect(),
        })
    }

    pub fn variable(name: impl Into<String>, func: Producer<R>) -> Self {
        Node::Variable(Variable {
            name: name.into(),
            func,
        })
    }

    pub fn with(func: Producer<R>, content: Node<R>) -> Self {
        Node::With(With {
            func,
            content: Some(Box::new(content)),
        })
    }

    pub fn conditions(entries: impl IntoIterator<Item = Condition<R>>) -> Self {
        Node::Conditions(Conditions {
            entries: entries.into_iter().collect(),
        })
    }
}

impl<R> Condition<R> {
    /// Content rendered only when `predicate` holds.
    pub fn when(predicate: Predicate<R>, content: Node<R>) -> Self {
        Self {
            predicate: Some(predicate),
            content: Some(Box::new(content)),
        }
    }

    /// Unconditional content; the fallback branch of a chain.
    pub fn otherwise(content: Node<R>) -> Self {
        Self {
            predicate: None,
            content: Some(Box::new(content)),
        }
    }
}

impl<R> From<Literal> for Node<R> {
    fn from(literal: Literal) -> Self {
        Node::Literal(literal)
    }
}

impl<R> From<Fragment<R>> for Node<R> {
    fn from(fragment: Fragment<R>) -> Self {
        Node::Fragment(fragment)
    }
}

impl<R> From<Variable<R>> for Node<R> {
    fn from(variable: Variable<R>) -> Self {
        Node::Variable(variable)
    }
}

impl<R> From<With<R>> for Node<R> {
    fn from(with: With<R>) -> Self {
        Node::With(with)
    }
}

impl<R> From<Condition<R>> for Node<R> {
    fn from(condition: Condition<R>) -> Self {
        Node::Condition(condition)
    }
}

impl<R> From<Conditions<R>> for Node<R> {
    fn from(conditions: Conditions<R>) -> Self {
        Node::Conditions(conditions)
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Literal {
            text: text.to_string(),
        }
    }
}
