//! Autocommit resolution for textual statements.
use std::sync::LazyLock;

use regex::Regex;

/// Statements that modify data: UPDATE, INSERT, DELETE and MERGE.
static AUTOCOMMIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:UPDATE|INSERT|DELETE|MERGE)").expect("autocommit pattern is valid")
});

/// How the caller asked autocommit to be decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutocommitMode {
    Enabled,
    Disabled,
    /// Decide from the statement text.
    #[default]
    ParseText,
}

/// Whether plain statement text modifies data and should be committed.
pub fn should_autocommit_text(statement: &str) -> bool {
    AUTOCOMMIT_RE.is_match(statement)
}

/// Resolve the autocommit decision for one execution.
///
/// An explicit `Enabled` never commits DDL.
pub fn should_autocommit(mode: AutocommitMode, statement: &str, is_ddl: bool) -> bool {
    match mode {
        AutocommitMode::ParseText => should_autocommit_text(statement),
        AutocommitMode::Enabled => !is_ddl,
        AutocommitMode::Disabled => false,
    }
}
