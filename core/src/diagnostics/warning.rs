//! Findings raised while reflecting metadata or linting identifiers.

/// How much a finding affects the result handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational; the result is complete.
    Info,
    /// Part of the result is less precise than the engine's metadata.
    Lossy,
    /// The engine reported something with no generic counterpart.
    Unsupported,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Lossy => write!(f, "lossy"),
            Severity::Unsupported => write!(f, "unsupported"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Warning {
    /// Stable code such as `TYPE_UNKNOWN`.
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    /// Object the finding is about (`schema.table.column`, identifier text).
    pub object: Option<String>,
}

impl Warning {
    pub fn new(code: &'static str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            object: None,
        }
    }

    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = Some(object.into());
        self
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.object {
            Some(obj) => write!(f, "[{}] {}: {}", self.code, obj, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

// Reflection
pub const TYPE_UNKNOWN: &str = "TYPE_UNKNOWN";
pub const COLUMN_NOT_DESCRIBED: &str = "COLUMN_NOT_DESCRIBED";
pub const INDEXES_UNSUPPORTED: &str = "INDEXES_UNSUPPORTED";

// Identifier lint
pub const IDENT_RESERVED: &str = "IDENT_RESERVED";
pub const IDENT_SPECIAL_CHARS: &str = "IDENT_SPECIAL_CHARS";
pub const IDENT_CASE_SENSITIVE: &str = "IDENT_CASE_SENSITIVE";
