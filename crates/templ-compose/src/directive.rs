/*
 * directive.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Spelling of the directives nodes emit.
//!
//! With the default config the shapes are:
//!
//! - `{{if fn0 $r}}` / `{{else if fn0 $r}}` / `{{else}}` / `{{end}}`
//! - `{{with fn0 $r}}`
//! - `{{$name := fn0 $r}}`

use crate::config::CompileConfig;

pub(crate) struct Directives<'a> {
    config: &'a CompileConfig,
}

impl<'a> Directives<'a> {
    pub(crate) fn new(config: &'a CompileConfig) -> Self {
        Self { config }
    }

    /// `if ID $r`, the guard used by single conditions and chains alike.
    pub(crate) fn condition_string(&self, id: &str) -> String {
        format!("if {} {}", id, self.config.request_binding)
    }

    /// Guard opening a block; `chained` turns it into an `else if`.
    pub(crate) fn guard(&self, id: &str, chained: bool) -> String {
        let prefix = if chained { "else " } else { "" };
        self.wrap(&format!("{}{}", prefix, self.condition_string(id)))
    }

    pub(crate) fn else_(&self) -> String {
        self.wrap("else")
    }

    pub(crate) fn end(&self) -> String {
        self.wrap("end")
    }

    pub(crate) fn with(&self, id: &str) -> String {
        self.wrap(&format!("with {} {}", id, self.config.request_binding))
    }

    /// Local binding; `name` may be given with or without its leading `$`.
    pub(crate) fn assign(&self, name: &str, id: &str) -> String {
        let name = name.strip_prefix('$').unwrap_or(name);
        self.wrap(&format!(
            "${} := {} {}",
            name, id, self.config.request_binding
        ))
    }

    fn wrap(&self, action: &str) -> String {
        format!(
            "{}{}{}",
            self.config.left_delimiter, action, self.config.right_delimiter
        )
    }
}
