//! Dialect configuration: quote character, name separator and extra reserved words.
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a [`DialectConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dialect config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{role} character {ch:?} cannot be an identifier character or whitespace")]
    InvalidCharacter { role: &'static str, ch: char },

    #[error("quote and separator must differ (both are {0:?})")]
    QuoteIsSeparator(char),
}

/// Immutable dialect settings, built once and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectConfig {
    /// Quote character wrapped around identifiers (default `"`).
    pub quote: char,
    /// Separator between qualified name parts (default `.`).
    pub separator: char,
    /// Words reserved in addition to the built-in list, any case.
    pub extra_reserved_words: Vec<String>,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            quote: '"',
            separator: '.',
            extra_reserved_words: Vec::new(),
        }
    }
}

impl DialectConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: DialectConfig = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (role, ch) in [("quote", self.quote), ("separator", self.separator)] {
            if is_identifier_char(ch) || ch.is_whitespace() {
                return Err(ConfigError::InvalidCharacter { role, ch });
            }
        }
        if self.quote == self.separator {
            return Err(ConfigError::QuoteIsSeparator(self.quote));
        }
        Ok(())
    }
}

/// Characters allowed in a bare identifier: `[A-Za-z0-9_$]`.
pub(crate) fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
