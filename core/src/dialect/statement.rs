/// Fragments of DDL and sequence statements that embed identifiers.
use super::normalize::IdentifierPreparer;
use crate::ir::{ColumnDef, Sequence};

/// Render a column definition for CREATE TABLE.
///
/// AUTOINCREMENT is only emitted for the autoincrement column when no server
/// default is present.
pub fn column_specification(preparer: &IdentifierPreparer, column: &ColumnDef) -> String {
    let mut spec = vec![
        preparer.quote_if_needed(&column.name),
        column.sql_type.to_string(),
    ];

    if !column.nullable {
        spec.push("NOT NULL".to_string());
    }

    if let Some(default) = &column.default {
        spec.push(format!("DEFAULT {default}"));
    }

    if column.autoincrement && !column.server_default {
        spec.push("AUTOINCREMENT".to_string());
    }

    spec.join(" ")
}

/// Expression producing the next value of a sequence.
pub fn sequence_next_value(preparer: &IdentifierPreparer, sequence: &Sequence) -> String {
    format!("{}.nextval", preparer.format_qualified(&sequence.name))
}

/// Standalone statement that fetches the next value of a sequence.
pub fn fire_sequence_sql(preparer: &IdentifierPreparer, sequence: &Sequence) -> String {
    format!("SELECT {}", sequence_next_value(preparer, sequence))
}
