//! Boundary to the external SQL execution interface.

/// Failure reported by the executor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// The engine rejected the statement, e.g. the named object does not exist.
    #[error("SQL compilation error: {0}")]
    Programming(String),

    /// Any other failure: network, authentication, internal errors.
    #[error("database error: {0}")]
    Database(String),
}

/// A named bind parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub value: String,
}

impl Param {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Tabular result of a statement. Cells are text; SQL NULL is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { columns, rows }
    }

    /// Position of a column by its exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Text of a cell, treating missing cells like NULL.
pub(crate) fn cell(row: &[Option<String>], idx: usize) -> Option<&str> {
    row.get(idx).and_then(Option::as_deref)
}

/// Runs SQL on behalf of the reflection layer.
pub trait SqlExecutor {
    fn execute(&mut self, sql: &str, params: &[Param]) -> Result<ResultSet, ExecuteError>;
}

impl<E: SqlExecutor + ?Sized> SqlExecutor for &mut E {
    fn execute(&mut self, sql: &str, params: &[Param]) -> Result<ResultSet, ExecuteError> {
        (**self).execute(sql, params)
    }
}
