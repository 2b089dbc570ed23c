/// Reflection model types handed back to the calling toolkit.
use super::ident::{Ident, QualifiedName};
use super::types::SqlType;

/// A reflected column, in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: Ident,
    /// `None` when the engine reported a type name with no generic mapping.
    pub sql_type: Option<SqlType>,
    /// Engine type name as reported by `information_schema`.
    pub type_name: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub autoincrement: bool,
    pub primary_key: bool,
}

/// Primary key columns of a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimaryKeyInfo {
    pub constrained_columns: Vec<Ident>,
    /// The engine does not report primary key names through `DESCRIBE`.
    pub name: Option<Ident>,
}

/// A reflected foreign key.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyInfo {
    /// Constraint name exactly as the engine reports it.
    pub name: String,
    pub constrained_columns: Vec<Ident>,
    pub referred_schema: Option<Ident>,
    pub referred_table: Ident,
    pub referred_columns: Vec<Ident>,
}

/// A reflected index. The engine has none, so this is never populated.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexInfo {
    pub name: Ident,
    pub column_names: Vec<Ident>,
    pub unique: bool,
}

/// Column definition used when rendering DDL.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: Ident,
    pub sql_type: SqlType,
    pub nullable: bool,
    /// Rendered default expression, emitted verbatim.
    pub default: Option<String>,
    /// The column is the table's autoincrement column.
    pub autoincrement: bool,
    /// A server-side default exists, which suppresses AUTOINCREMENT.
    pub server_default: bool,
}

impl ColumnDef {
    pub fn new(name: Ident, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type,
            nullable: true,
            default: None,
            autoincrement: false,
            server_default: false,
        }
    }
}

/// A sequence reference.
#[derive(Debug, Clone)]
pub struct Sequence {
    pub name: QualifiedName,
}
