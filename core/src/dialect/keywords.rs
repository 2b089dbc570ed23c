//! Reserved words that cannot appear as bare identifiers.

/// ANSI reserved words plus the engine's own additions, lowercase.
pub const RESERVED_WORDS: &[&str] = &[
    // ANSI
    "all",
    "alter",
    "and",
    "any",
    "as",
    "between",
    "by",
    "check",
    "column",
    "connect",
    "create",
    "current",
    "delete",
    "distinct",
    "drop",
    "else",
    "exists",
    "for",
    "from",
    "grant",
    "group",
    "having",
    "in",
    "insert",
    "intersect",
    "into",
    "is",
    "like",
    "not",
    "null",
    "of",
    "on",
    "or",
    "order",
    "revoke",
    "row",
    "rows",
    "select",
    "set",
    "start",
    "table",
    "then",
    "to",
    "trigger",
    "union",
    "unique",
    "update",
    "values",
    "whenever",
    "where",
    "with",
    // engine
    "regexp",
    "rlike",
    "some",
    // Oracle compatibility
    "minus",
    "increment",
];

/// Check a lowercase word against the built-in reserved list.
pub fn is_reserved(lowercase_word: &str) -> bool {
    RESERVED_WORDS.contains(&lowercase_word)
}
