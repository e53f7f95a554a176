/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Component-tree compiler for Go-style `text/template` sources.
//!
//! A tree of [`Node`]s is compiled once per template build into:
//!
//! - template source containing literal text and directives
//!   (`{{if}}`/`{{else if}}`/`{{else}}`/`{{end}}`, `{{with}}`, `{{$x := ...}}`)
//! - a [`FunctionRegistry`] mapping every generated function identifier in
//!   that source to the per-request callback it calls
//!
//! Rendering is left to the template engine: it resolves each identifier
//! through the registry and calls the callback with the request context.
//!
//! # Example
//!
//! ```ignore
//! use templ_compose::{compile, predicate, CompileConfig, Condition, Node};
//!
//! struct Request { admin: bool }
//!
//! let tree = Node::conditions([
//!     Condition::when(predicate(|r: &Request| r.admin), Node::literal("Admin")),
//!     Condition::otherwise(Node::literal("Guest")),
//! ]);
//!
//! let compiled = compile(&tree, CompileConfig::default())?;
//! assert_eq!(compiled.source, "{{if fn0 $r}}Admin{{else}}Guest{{end}}");
//! ```

pub mod callback;
mod compile;
pub mod config;
mod directive;
pub mod error;
pub mod framework;
pub mod ident;
pub mod node;
pub mod registry;
pub mod value;

// Re-export main types at crate root
pub use callback::{Callback, Predicate, Producer, predicate, producer};
pub use config::CompileConfig;
pub use error::{CompileError, CompileResult, ConfigError, Phase};
pub use framework::Framework;
pub use ident::IdentifierGenerator;
pub use node::{Condition, Conditions, Fragment, Literal, Node, Variable, With};
pub use registry::FunctionRegistry;
pub use value::Value;

/// The two outputs of a compilation pass.
#[derive(Debug)]
pub struct CompiledTemplate<R> {
    /// Template source for the render engine.
    pub source: String,

    /// Callbacks for every function identifier used in `source`.
    pub functions: FunctionRegistry<R>,
}

impl<R> CompiledTemplate<R> {
    /// Function identifiers, in the order they were first registered.
    pub fn referenced_identifiers(&self) -> Vec<&str> {
        self.functions.names().collect()
    }
}

/// Compile `root` with a fresh [`Framework`].
///
/// The config is validated first. Output is only returned when the whole
/// tree compiled; a failed pass leaves nothing worth reusing.
pub fn compile<R>(root: &Node<R>, config: CompileConfig) -> CompileResult<CompiledTemplate<R>> {
    config.validate()?;
    let mut fw = Framework::new(config);
    let mut out: Vec<u8> = Vec::new();

    tracing::debug!(templating = fw.can_template(), "Compiling component tree");
    if let Err(error) = root.compile(&mut fw, &mut out) {
        tracing::debug!(error = %error, "Component tree compilation failed");
        return Err(error);
    }

    let functions = fw.into_registry();
    // Every write is a `&str`, so the buffer is always valid UTF-8.
    let source = String::from_utf8_lossy(&out).into_owned();
    tracing::debug!(
        functions = functions.len(),
        bytes = source.len(),
        "Compiled component tree"
    );

    Ok(CompiledTemplate { source, functions })
}
