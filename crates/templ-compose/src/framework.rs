/*
 * framework.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Compilation state shared by every node of one compilation pass.
//!
//! A [`Framework`] is threaded through all compile functions to:
//! 1. Collect the callbacks that generated template functions refer to
//! 2. Hand out collision-free function identifiers
//! 3. Gate directive emission through the templating flag

use crate::callback::Callback;
use crate::config::CompileConfig;
use crate::directive::Directives;
use crate::error::CompileResult;
use crate::ident::IdentifierGenerator;
use crate::registry::FunctionRegistry;

/// Mutable state for one compilation pass.
///
/// Create one per template build and drop it (keeping the registry) once the
/// pass is done. Independent passes need independent frameworks.
#[derive(Debug)]
pub struct Framework<R> {
    functions: FunctionRegistry<R>,
    generator: IdentifierGenerator,
    templating: bool,
    config: CompileConfig,
}

impl<R> Framework<R> {
    pub fn new(config: CompileConfig) -> Self {
        Self {
            functions: FunctionRegistry::new(),
            generator: IdentifierGenerator::new(config.identifier_prefix.clone()),
            templating: config.templating,
            config,
        }
    }

    /// Whether directive-emitting nodes may be compiled.
    pub fn can_template(&self) -> bool {
        self.templating
    }

    pub fn set_templating(&mut self, enabled: bool) {
        self.templating = enabled;
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    pub(crate) fn directives(&self) -> Directives<'_> {
        Directives::new(&self.config)
    }

    /// Allocate an identifier for `callback` and record it in the registry.
    ///
    /// The returned identifier is always registered before it is returned,
    /// so callers may emit it straight away.
    pub fn register(&mut self, callback: impl Into<Callback<R>>) -> CompileResult<String> {
        let callback = callback.into();
        let id = self.generator.allocate(&callback);
        tracing::trace!(id = %id, callback = ?callback, "Registering template function");
        self.functions.insert(id.clone(), callback)?;
        Ok(id)
    }

    pub fn registry(&self) -> &FunctionRegistry<R> {
        &self.functions
    }

    pub fn into_registry(self) -> FunctionRegistry<R> {
        self.functions
    }
}

impl<R> Default for Framework<R> {
    fn default() -> Self {
        Self::new(CompileConfig::default())
    }
}
