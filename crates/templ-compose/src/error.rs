/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for component compilation and configuration.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while compiling a component tree.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A directive-emitting node was compiled while templating is disabled.
    #[error("templating is not available in this context")]
    TemplatingUnavailable,

    /// Writing literal template text to the output stream failed.
    #[error("failed to write literal {excerpt:?}: {source}")]
    Write {
        excerpt: String,
        #[source]
        source: std::io::Error,
    },

    /// A nested step failed; `phase` names the step that was being written.
    #[error("failed to write {phase}: {source}")]
    Phase {
        phase: Phase,
        #[source]
        source: Box<CompileError>,
    },

    /// A variable name that cannot be spelled as a template variable.
    #[error("invalid variable name {name:?}: expected an identifier")]
    InvalidVariableName { name: String },

    /// An identifier was registered twice with different callbacks.
    #[error("function `{id}` is already registered to a different callback")]
    RegistryConflict { id: String },

    /// The compile config cannot spell directives.
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
}

impl CompileError {
    /// Wrap this error with the phase that was being written when it occurred.
    pub fn in_phase(self, phase: Phase) -> Self {
        CompileError::Phase {
            phase,
            source: Box::new(self),
        }
    }

    /// The innermost error, with every phase wrapper removed.
    pub fn root_cause(&self) -> &CompileError {
        let mut current = self;
        while let CompileError::Phase { source, .. } = current {
            current = source;
        }
        current
    }

    /// Phases from outermost to innermost.
    pub fn phases(&self) -> Vec<&Phase> {
        let mut phases = Vec::new();
        let mut current = self;
        while let CompileError::Phase { phase, source } = current {
            phases.push(phase);
            current = source;
        }
        phases
    }

    pub fn is_templating_unavailable(&self) -> bool {
        matches!(self.root_cause(), CompileError::TemplatingUnavailable)
    }
}

/// The step of a node's compilation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Child `i` of a fragment.
    FragmentChild(usize),
    /// The `{{$name := ...}}` directive of a variable.
    VariableDirective,
    WithPrefix,
    WithContent,
    WithSuffix,
    ConditionPrefix,
    ConditionContent,
    ConditionSuffix,
    /// Guard directive of chain entry `i` (0-based).
    ChainEntry(usize),
    /// Content of chain entry `i` (0-based).
    ChainEntryContent(usize),
    ChainElse,
    ChainFallback,
    ChainTermination,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::FragmentChild(i) => write!(f, "Fragment[{i}]"),
            Phase::VariableDirective => f.write_str("variable directive"),
            Phase::WithPrefix => f.write_str("with prefix"),
            Phase::WithContent => f.write_str("with content"),
            Phase::WithSuffix => f.write_str("with suffix"),
            Phase::ConditionPrefix => f.write_str("condition prefix"),
            Phase::ConditionContent => f.write_str("condition content"),
            Phase::ConditionSuffix => f.write_str("condition suffix"),
            Phase::ChainEntry(i) => write!(f, "Conditions[{i}]"),
            Phase::ChainEntryContent(i) => write!(f, "Conditions[{i}].Content"),
            Phase::ChainElse => f.write_str("Conditions else"),
            Phase::ChainFallback => f.write_str("Conditions fallback content"),
            Phase::ChainTermination => f.write_str("Conditions termination"),
        }
    }
}

/// Errors in a [`CompileConfig`](crate::config::CompileConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid TOML for a `CompileConfig`.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value directives cannot be spelled with.
    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_wrapping_keeps_root_cause() {
        let err = CompileError::TemplatingUnavailable
            .in_phase(Phase::WithContent)
            .in_phase(Phase::FragmentChild(2));

        assert!(err.is_templating_unavailable());
        assert_eq!(
            err.phases(),
            vec![&Phase::FragmentChild(2), &Phase::WithContent]
        );
        assert_eq!(
            err.to_string(),
            "failed to write Fragment[2]: failed to write with content: \
             templating is not available in this context"
        );
    }

    #[test]
    fn test_write_error_names_literal() {
        let err = CompileError::Write {
            excerpt: "<div>".to_string(),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "failed to write literal \"<div>\": disk full");
        assert!(!err.is_templating_unavailable());
    }
}
