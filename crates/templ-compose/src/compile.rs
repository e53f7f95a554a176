/*
 * compile.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Compilation of component trees into template source.
//!
//! Each node writes its template text to the output stream and registers
//! the callbacks its directives refer to in the [`Framework`]. The stream is
//! append-only: a failing node stops further writes but does not undo what
//! earlier nodes wrote.

use std::io::Write;

use crate::callback::Callback;
use crate::config::is_identifier;
use crate::error::{CompileError, CompileResult, Phase};
use crate::framework::Framework;
use crate::node::{Condition, Conditions, Fragment, Literal, Node, Variable, With};

/// Longest literal prefix quoted in write errors.
const EXCERPT_LEN: usize = 40;

impl<R> Node<R> {
    /// Compile this node into `w`, registering its callbacks in `fw`.
    pub fn compile<W: Write + ?Sized>(&self, fw: &mut Framework<R>, w: &mut W) -> CompileResult<()> {
        match self {
            Node::Literal(Literal { text }) => write_literal(w, text),
            Node::Fragment(fragment) => fragment.compile(fw, w),
            Node::Variable(variable) => variable.compile(fw, w),
            Node::With(with) => with.compile(fw, w),
            Node::Condition(condition) => condition.compile(fw, w),
            Node::Conditions(conditions) => conditions.compile(fw, w),
        }
    }
}

impl<R> Fragment<R> {
    pub fn compile<W: Write + ?Sized>(&self, fw: &mut Framework<R>, w: &mut W) -> CompileResult<()> {
        compile_sequence(&self.children, fw, w)
    }
}

impl<R> Variable<R> {
    pub fn compile<W: Write + ?Sized>(&self, fw: &mut Framework<R>, w: &mut W) -> CompileResult<()> {
        ensure_templating(fw, "Variable")?;
        let bare = self.name.strip_prefix('$').unwrap_or(&self.name);
        if !is_identifier(bare) {
            return Err(CompileError::InvalidVariableName {
                name: self.name.clone(),
            });
        }
        let id = fw.register(Callback::from(&self.func))?;
        let directive = fw.directives().assign(&self.name, &id);
        write_literal(w, &directive).map_err(|e| e.in_phase(Phase::VariableDirective))
    }
}

impl<R> With<R> {
    pub fn compile<W: Write + ?Sized>(&self, fw: &mut Framework<R>, w: &mut W) -> CompileResult<()> {
        ensure_templating(fw, "With")?;
        let Some(content) = &self.content else {
            return Ok(());
        };

        let id = fw.register(Callback::from(&self.func))?;
        let prefix = fw.directives().with(&id);
        write_literal(w, &prefix).map_err(|e| e.in_phase(Phase::WithPrefix))?;
        content
            .compile(fw, w)
            .map_err(|e| e.in_phase(Phase::WithContent))?;
        let suffix = fw.directives().end();
        write_literal(w, &suffix).map_err(|e| e.in_phase(Phase::WithSuffix))
    }
}

impl<R> Condition<R> {
    pub fn compile<W: Write + ?Sized>(&self, fw: &mut Framework<R>, w: &mut W) -> CompileResult<()> {
        ensure_templating(fw, "Condition")?;
        let Some(content) = &self.content else {
            return Ok(());
        };
        // No predicate: the content is written unguarded.
        let Some(predicate) = &self.predicate else {
            return content.compile(fw, w);
        };

        let id = fw.register(Callback::from(predicate))?;
        let prefix = fw.directives().guard(&id, false);
        write_literal(w, &prefix).map_err(|e| e.in_phase(Phase::ConditionPrefix))?;
        content
            .compile(fw, w)
            .map_err(|e| e.in_phase(Phase::ConditionContent))?;
        let suffix = fw.directives().end();
        write_literal(w, &suffix).map_err(|e| e.in_phase(Phase::ConditionSuffix))
    }
}

impl<R> Conditions<R> {
    /// Compile the entries as one exclusive chain.
    ///
    /// Guarded entries become `if`/`else if` branches in order. Entries
    /// without a predicate are merged, in order, into a single trailing
    /// `else` block; when no entry is guarded that block is written bare.
    pub fn compile<W: Write + ?Sized>(&self, fw: &mut Framework<R>, w: &mut W) -> CompileResult<()> {
        ensure_templating(fw, "Conditions")?;
        match self.entries.as_slice() {
            [] => return Ok(()),
            [only] => return only.compile(fw, w),
            _ => {}
        }

        let mut fallback: Vec<&Node<R>> = Vec::new();
        let mut branches = 0usize;

        for (i, entry) in self.entries.iter().enumerate() {
            let Some(predicate) = &entry.predicate else {
                if let Some(content) = &entry.content {
                    fallback.push(content);
                }
                continue;
            };
            // A guarded entry without content contributes no branch.
            let Some(content) = &entry.content else {
                continue;
            };

            let id = fw.register(Callback::from(predicate))?;
            let guard = fw.directives().guard(&id, branches > 0);
            write_literal(w, &guard).map_err(|e| e.in_phase(Phase::ChainEntry(i)))?;
            content
                .compile(fw, w)
                .map_err(|e| e.in_phase(Phase::ChainEntryContent(i)))?;
            branches += 1;
        }

        if !fallback.is_empty() {
            if branches > 0 {
                let directive = fw.directives().else_();
                write_literal(w, &directive).map_err(|e| e.in_phase(Phase::ChainElse))?;
            }
            compile_sequence(fallback.iter().copied(), fw, w)
                .map_err(|e| e.in_phase(Phase::ChainFallback))?;
        }

        if branches > 0 {
            let directive = fw.directives().end();
            write_literal(w, &directive).map_err(|e| e.in_phase(Phase::ChainTermination))?;
        }

        tracing::trace!(branches, fallbacks = fallback.len(), "Compiled condition chain");
        Ok(())
    }
}

/// Compile `nodes` in order, stopping at the first failure.
fn compile_sequence<'a, R: 'a, W: Write + ?Sized>(
    nodes: impl IntoIterator<Item = &'a Node<R>>,
    fw: &mut Framework<R>,
    w: &mut W,
) -> CompileResult<()> {
    for (i, node) in nodes.into_iter().enumerate() {
        node.compile(fw, w)
            .map_err(|e| e.in_phase(Phase::FragmentChild(i)))?;
    }
    Ok(())
}

fn ensure_templating<R>(fw: &Framework<R>, node: &'static str) -> CompileResult<()> {
    if fw.can_template() {
        return Ok(());
    }
    tracing::debug!(node, "Templating unavailable, refusing to emit directives");
    Err(CompileError::TemplatingUnavailable)
}

fn write_literal<W: Write + ?Sized>(w: &mut W, text: &str) -> CompileResult<()> {
    w.write_all(text.as_bytes())
        .map_err(|source| CompileError::Write {
            excerpt: excerpt(text),
            source,
        })
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(EXCERPT_LEN) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
