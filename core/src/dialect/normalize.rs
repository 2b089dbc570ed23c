//! Identifier quoting decisions and canonical/storage case folding.
//!
//! The engine folds unquoted identifiers to uppercase. The calling toolkit
//! treats lowercase names as case-insensitive, so an uppercase storage name
//! maps to a lowercase canonical name and back. Anything else only survives
//! when quoted and is carried with `Ident::quoted == true`.
use std::collections::HashSet;

use super::config::{DialectConfig, is_identifier_char};
use super::keywords;
use crate::ir::{Ident, QualifiedName};

/// Why an identifier cannot be emitted bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotingReason {
    /// A reserved word under some casing.
    Reserved,
    /// Empty, or does not start with a letter or underscore.
    InvalidStart,
    /// Contains a character outside `[A-Za-z0-9_$]`.
    SpecialChars,
    /// Contains both upper and lower case letters.
    MixedCase,
}

impl std::fmt::Display for QuotingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotingReason::Reserved => write!(f, "reserved word"),
            QuotingReason::InvalidStart => write!(f, "does not start with a letter or underscore"),
            QuotingReason::SpecialChars => write!(f, "contains characters outside [A-Za-z0-9_$]"),
            QuotingReason::MixedCase => write!(f, "mixed case"),
        }
    }
}

/// Applies a [`DialectConfig`] to identifiers. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct IdentifierPreparer {
    config: DialectConfig,
    extra_reserved: HashSet<String>,
}

impl Default for IdentifierPreparer {
    fn default() -> Self {
        Self::new(DialectConfig::default())
    }
}

impl IdentifierPreparer {
    pub fn new(config: DialectConfig) -> Self {
        let extra_reserved = config
            .extra_reserved_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self {
            config,
            extra_reserved,
        }
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Check a word against the reserved set, ignoring case.
    pub fn is_reserved(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        keywords::is_reserved(&lower) || self.extra_reserved.contains(&lower)
    }

    /// Whether `ident` must be quoted to be referenced exactly as written.
    pub fn requires_quoting(&self, ident: &str) -> bool {
        self.quoting_reason(ident).is_some()
    }

    /// The first rule that forces `ident` to be quoted, checked in order.
    pub fn quoting_reason(&self, ident: &str) -> Option<QuotingReason> {
        if self.is_reserved(ident) {
            return Some(QuotingReason::Reserved);
        }

        // The empty string never resolves bare
        match ident.chars().next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return Some(QuotingReason::InvalidStart),
        }

        if !ident.chars().all(is_identifier_char) {
            return Some(QuotingReason::SpecialChars);
        }

        // Mixed case does not survive the engine's fold
        let has_upper = ident.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = ident.chars().any(|c| c.is_ascii_lowercase());
        if has_upper && has_lower {
            return Some(QuotingReason::MixedCase);
        }

        None
    }

    /// Translate a name reported by the engine into canonical form.
    pub fn to_canonical(&self, storage_name: &str) -> Ident {
        if storage_name.is_empty() {
            return Ident::default();
        }

        if storage_name.is_ascii() && is_uppercase(storage_name) {
            let lower = storage_name.to_lowercase();
            if !self.requires_quoting(&lower) {
                return Ident::new(lower);
            }
        }

        // Lowercase storage only exists for names created quoted. Mixed case,
        // reserved words and special characters need quotes as well.
        Ident::quoted(storage_name)
    }

    /// Translate a canonical identifier into the text the engine stores.
    pub fn to_storage(&self, ident: &Ident) -> String {
        if !ident.quoted && is_lowercase(&ident.value) && !self.requires_quoting(&ident.value) {
            ident.value.to_uppercase()
        } else {
            ident.value.clone()
        }
    }

    /// [`to_canonical`](Self::to_canonical) over an optional name; absent stays absent.
    pub fn normalize_name(&self, storage_name: Option<&str>) -> Option<Ident> {
        storage_name.map(|n| self.to_canonical(n))
    }

    /// [`to_storage`](Self::to_storage) over an optional identifier; absent stays absent.
    pub fn denormalize_name(&self, ident: Option<&Ident>) -> Option<String> {
        ident.map(|i| self.to_storage(i))
    }

    /// Wrap `value` in the quote character, doubling embedded quotes.
    pub fn quote(&self, value: &str) -> String {
        let q = self.config.quote;
        let mut out = String::with_capacity(value.len() + 2);
        out.push(q);
        for c in value.chars() {
            if c == q {
                out.push(q);
            }
            out.push(c);
        }
        out.push(q);
        out
    }

    /// Render the identifier for SQL output, quoting if necessary.
    pub fn quote_if_needed(&self, ident: &Ident) -> String {
        if ident.quoted || self.requires_quoting(&ident.value) {
            self.quote(&ident.value)
        } else {
            ident.value.clone()
        }
    }

    /// Join name parts with the separator, quoting each part on its own.
    ///
    /// Absent and empty parts are skipped without leaving a separator behind.
    pub fn qualify<'a, I>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = Option<&'a Ident>>,
    {
        let mut out = String::new();
        for part in parts.into_iter().flatten() {
            if part.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(self.config.separator);
            }
            out.push_str(&self.quote_if_needed(part));
        }
        out
    }

    /// Render a schema-qualified name.
    pub fn format_qualified(&self, name: &QualifiedName) -> String {
        self.qualify(name.parts())
    }
}

fn is_uppercase(s: &str) -> bool {
    s.to_uppercase() == s
}

fn is_lowercase(s: &str) -> bool {
    s.to_lowercase() == s
}
