/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Compilation settings.
//!
//! Every field has a default matching Go's `text/template` conventions, so
//! `CompileConfig::default()` is the common case. A config can also be read
//! from TOML:
//!
//! ```toml
//! request_binding = "$req"
//! identifier_prefix = "cb"
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    /// Template variable holding the request context, passed to every callback.
    pub request_binding: String,

    /// Opening directive delimiter.
    pub left_delimiter: String,

    /// Closing directive delimiter.
    pub right_delimiter: String,

    /// Prefix of generated function identifiers.
    pub identifier_prefix: String,

    /// Whether directive-emitting nodes may be compiled at all.
    pub templating: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            request_binding: "$r".to_string(),
            left_delimiter: "{{".to_string(),
            right_delimiter: "}}".to_string(),
            identifier_prefix: "fn".to_string(),
            templating: true,
        }
    }
}

impl CompileConfig {
    /// Parse and validate a config from TOML. Missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CompileConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that directives can be spelled with these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.request_binding.strip_prefix('$') {
            Some(name) if is_identifier(name) => {}
            _ => {
                return Err(ConfigError::Invalid {
                    field: "request_binding",
                    message: format!(
                        "expected `$` followed by an identifier, got {:?}",
                        self.request_binding
                    ),
                });
            }
        }

        if !is_identifier(&self.identifier_prefix) {
            return Err(ConfigError::Invalid {
                field: "identifier_prefix",
                message: format!("{:?} is not an identifier", self.identifier_prefix),
            });
        }

        if self.left_delimiter.is_empty() {
            return Err(ConfigError::Invalid {
                field: "left_delimiter",
                message: "must not be empty".to_string(),
            });
        }
        if self.right_delimiter.is_empty() {
            return Err(ConfigError::Invalid {
                field: "right_delimiter",
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// ASCII letter or underscore, then letters, digits or underscores.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
