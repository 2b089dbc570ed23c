//! Schema reflection over the engine's introspection commands.
//!
//! Every statement is built with [`IdentifierPreparer`] so names reach the
//! engine in the form it stores them, and every name read back is returned in
//! canonical form.
pub mod executor;
pub mod type_map;

use std::collections::HashMap;

use indexmap::IndexMap;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::diagnostics::warning::{self, Severity, Warning};
use crate::diagnostics::{StrictViolation, check_strict};
use crate::dialect::IdentifierPreparer;
use crate::ir::{ColumnInfo, ForeignKeyInfo, Ident, IndexInfo, PrimaryKeyInfo};
use executor::{ExecuteError, Param, ResultSet, SqlExecutor, cell};
use type_map::{TypeModifiers, map_type};

/// Errors raised by reflection.
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    #[error("Failed to execute `{sql}`: {source}")]
    Execute {
        sql: String,
        #[source]
        source: ExecuteError,
    },

    #[error("Result of `{sql}` has no `{column}` column")]
    MissingColumn { sql: String, column: &'static str },

    #[error("{0}")]
    Strict(#[from] StrictViolation),
}

/// Options for an [`Inspector`].
#[derive(Debug, Clone, Default)]
pub struct ReflectOptions {
    /// Schema used when a call does not name one. When absent the session's
    /// current schema is asked for.
    pub default_schema: Option<Ident>,
    /// If true, lossy or unsupported findings fail the call.
    pub strict: bool,
}

/// Object kinds accepted by `DESC <kind> <name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Table,
    Sequence,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectKind::Table => write!(f, "TABLE"),
            ObjectKind::Sequence => write!(f, "SEQUENCE"),
        }
    }
}

const COLUMNS_QUERY: &str = "SELECT ic.column_name,
       ic.data_type,
       ic.character_maximum_length,
       ic.numeric_precision,
       ic.numeric_scale,
       ic.is_nullable,
       ic.column_default,
       ic.is_identity
  FROM information_schema.columns ic
 WHERE ic.table_schema = %(table_schema)s
   AND ic.table_name = %(table_name)s
 ORDER BY ic.ordinal_position";

const COLUMNS_QUERY_CURRENT_SCHEMA: &str = "SELECT ic.column_name,
       ic.data_type,
       ic.character_maximum_length,
       ic.numeric_precision,
       ic.numeric_scale,
       ic.is_nullable,
       ic.column_default,
       ic.is_identity
  FROM information_schema.columns ic
 WHERE ic.table_schema = CURRENT_SCHEMA()
   AND ic.table_name = %(table_name)s
 ORDER BY ic.ordinal_position";

/// Reads schema metadata through an external executor.
pub struct Inspector<'a, E: SqlExecutor> {
    executor: E,
    preparer: &'a IdentifierPreparer,
    options: ReflectOptions,
    warnings: Vec<Warning>,
}

impl<'a, E: SqlExecutor> Inspector<'a, E> {
    pub fn new(executor: E, preparer: &'a IdentifierPreparer, options: ReflectOptions) -> Self {
        Self {
            executor,
            preparer,
            options,
            warnings: Vec::new(),
        }
    }

    /// Findings accumulated so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    pub fn has_table(&mut self, table: &Ident, schema: Option<&Ident>) -> Result<bool, ReflectError> {
        self.has_object(ObjectKind::Table, table, schema)
    }

    pub fn has_sequence(
        &mut self,
        sequence: &Ident,
        schema: Option<&Ident>,
    ) -> Result<bool, ReflectError> {
        self.has_object(ObjectKind::Sequence, sequence, schema)
    }

    /// `DESC` the object; a rejected statement means it does not exist.
    pub fn has_object(
        &mut self,
        kind: ObjectKind,
        name: &Ident,
        schema: Option<&Ident>,
    ) -> Result<bool, ReflectError> {
        let sql = format!("DESC {kind} {}", self.preparer.qualify([schema, Some(name)]));
        match self.executor.execute(&sql, &[]) {
            Ok(rs) => Ok(!rs.is_empty()),
            Err(ExecuteError::Programming(_)) => Ok(false),
            Err(source) => Err(ReflectError::Execute { sql, source }),
        }
    }

    pub fn get_table_names(&mut self, schema: Option<&Ident>) -> Result<Vec<Ident>, ReflectError> {
        let rs = self.show("TABLES", schema)?;
        self.names_where(&rs, "SHOW TABLES", |_| true)
    }

    pub fn get_view_names(&mut self, schema: Option<&Ident>) -> Result<Vec<Ident>, ReflectError> {
        let rs = self.show("VIEWS", schema)?;
        self.names_where(&rs, "SHOW VIEWS", |_| true)
    }

    pub fn get_temp_table_names(
        &mut self,
        schema: Option<&Ident>,
    ) -> Result<Vec<Ident>, ReflectError> {
        let rs = self.show("TABLES", schema)?;
        let kind = require_column(&rs, "SHOW TABLES", "kind")?;
        self.names_where(&rs, "SHOW TABLES", |row| cell(row, kind) == Some("TEMPORARY"))
    }

    /// Source text of a view, or `None` when no such view exists.
    pub fn get_view_definition(
        &mut self,
        view: &Ident,
        schema: Option<&Ident>,
    ) -> Result<Option<String>, ReflectError> {
        let pattern = self.preparer.to_storage(view).replace('\'', "''");
        let sql = match self.schema_or_default(schema) {
            Some(s) => format!(
                "SHOW VIEWS LIKE '{pattern}' IN {}",
                self.preparer.qualify([Some(&s)])
            ),
            None => format!("SHOW VIEWS LIKE '{pattern}'"),
        };
        let rs = self.run(&sql, &[])?;
        let name = require_column(&rs, &sql, "name")?;
        let text = require_column(&rs, &sql, "text")?;

        // LIKE treats `_` and `%` as wildcards; only an exact name is the view
        let storage_name = self.preparer.to_storage(view);
        Ok(rs
            .rows
            .iter()
            .find(|row| cell(row, name) == Some(storage_name.as_str()))
            .and_then(|row| cell(row, text))
            .map(str::to_string))
    }

    pub fn get_primary_keys(
        &mut self,
        table: &Ident,
        schema: Option<&Ident>,
    ) -> Result<PrimaryKeyInfo, ReflectError> {
        let schema = self.resolve_schema(schema)?;
        let described = self.describe_table(table, schema.as_ref())?;
        let constrained_columns = described
            .into_iter()
            .filter(|(_, is_pk)| *is_pk)
            .map(|(name, _)| self.preparer.to_canonical(&name))
            .collect();

        Ok(PrimaryKeyInfo {
            constrained_columns,
            name: None,
        })
    }

    pub fn get_columns(
        &mut self,
        table: &Ident,
        schema: Option<&Ident>,
    ) -> Result<Vec<ColumnInfo>, ReflectError> {
        let start = self.warnings.len();
        let schema = self.resolve_schema(schema)?;
        let primary: HashMap<String, bool> = self
            .describe_table(table, schema.as_ref())?
            .into_iter()
            .collect();

        let table_param = Param::new("table_name", self.preparer.to_storage(table));
        let rs = match &schema {
            Some(s) => {
                let schema_param = Param::new("table_schema", self.preparer.to_storage(s));
                self.run(COLUMNS_QUERY, &[schema_param, table_param])?
            }
            None => self.run(COLUMNS_QUERY_CURRENT_SCHEMA, &[table_param])?,
        };

        let mut columns = Vec::with_capacity(rs.rows.len());
        for row in &rs.rows {
            let column_name = cell(row, 0).unwrap_or_default();
            let type_name = cell(row, 1).unwrap_or_default();
            let name = self.preparer.to_canonical(column_name);
            let object = self
                .preparer
                .qualify([schema.as_ref(), Some(table), Some(&name)]);

            let modifiers = TypeModifiers {
                character_maximum_length: parse_u32(cell(row, 2)),
                numeric_precision: parse_u32(cell(row, 3)),
                numeric_scale: parse_u32(cell(row, 4)),
            };
            let sql_type = map_type(type_name, modifiers, &object, &mut self.warnings);

            let primary_key = match primary.get(column_name) {
                Some(is_pk) => *is_pk,
                None => {
                    self.warnings.push(
                        Warning::new(
                            warning::COLUMN_NOT_DESCRIBED,
                            Severity::Lossy,
                            "column missing from DESCRIBE TABLE; primary key flag unknown",
                        )
                        .with_object(&object),
                    );
                    false
                }
            };

            columns.push(ColumnInfo {
                name,
                sql_type,
                type_name: type_name.to_string(),
                nullable: cell(row, 5) == Some("YES"),
                default: cell(row, 6).map(str::to_string),
                autoincrement: cell(row, 7) == Some("YES"),
                primary_key,
            });
        }

        self.finish(start)?;
        Ok(columns)
    }

    /// Foreign keys whose constrained table is `table`, grouped by constraint name.
    pub fn get_foreign_keys(
        &mut self,
        table: &Ident,
        schema: Option<&Ident>,
    ) -> Result<Vec<ForeignKeyInfo>, ReflectError> {
        let current_sql = "SELECT CURRENT_DATABASE(), CURRENT_SCHEMA()";
        let current = self.run(current_sql, &[])?;
        let row = current.rows.first().map(Vec::as_slice).unwrap_or_default();
        let database = cell(row, 0).map(|d| self.preparer.to_canonical(d));
        let schema = self
            .schema_or_default(schema)
            .or_else(|| cell(row, 1).map(|s| self.preparer.to_canonical(s)));

        let sql = format!(
            "SHOW IMPORTED KEYS IN SCHEMA {}",
            self.preparer.qualify([database.as_ref(), schema.as_ref()])
        );
        let rs = self.run(&sql, &[])?;
        let fk_name = require_column(&rs, &sql, "fk_name")?;
        let fk_table = require_column(&rs, &sql, "fk_table_name")?;
        let fk_column = require_column(&rs, &sql, "fk_column_name")?;
        let pk_schema = require_column(&rs, &sql, "pk_schema_name")?;
        let pk_table = require_column(&rs, &sql, "pk_table_name")?;
        let pk_column = require_column(&rs, &sql, "pk_column_name")?;

        let canonical = |row: &[Option<String>], idx: usize| {
            self.preparer.to_canonical(cell(row, idx).unwrap_or_default())
        };

        // Compare in storage form so the quoted marker does not matter
        let storage_table = self.preparer.to_storage(table);
        let mut keys: IndexMap<String, ForeignKeyInfo> = IndexMap::new();
        for row in rs.rows.iter().map(Vec::as_slice) {
            if cell(row, fk_table) != Some(storage_table.as_str()) {
                continue;
            }
            let name = cell(row, fk_name).unwrap_or_default().to_string();
            let constrained = canonical(row, fk_column);
            let referred = canonical(row, pk_column);

            match keys.get_mut(&name) {
                Some(fk) => {
                    fk.constrained_columns.push(constrained);
                    fk.referred_columns.push(referred);
                }
                None => {
                    let referred_schema = cell(row, pk_schema).map(|s| self.preparer.to_canonical(s));
                    keys.insert(
                        name.clone(),
                        ForeignKeyInfo {
                            name,
                            constrained_columns: vec![constrained],
                            referred_schema,
                            referred_table: canonical(row, pk_table),
                            referred_columns: vec![referred],
                        },
                    );
                }
            }
        }

        Ok(keys.into_values().collect())
    }

    /// The engine has no indexes; always empty.
    pub fn get_indexes(
        &mut self,
        table: &Ident,
        schema: Option<&Ident>,
    ) -> Result<Vec<IndexInfo>, ReflectError> {
        let start = self.warnings.len();
        self.warnings.push(
            Warning::new(
                warning::INDEXES_UNSUPPORTED,
                Severity::Info,
                "the engine does not support indexes",
            )
            .with_object(self.preparer.qualify([schema, Some(table)])),
        );
        self.finish(start)?;
        Ok(Vec::new())
    }

    fn schema_or_default(&self, schema: Option<&Ident>) -> Option<Ident> {
        schema
            .cloned()
            .or_else(|| self.options.default_schema.clone())
    }

    /// Explicit schema, then the default, then the session's current schema.
    fn resolve_schema(&mut self, schema: Option<&Ident>) -> Result<Option<Ident>, ReflectError> {
        if let Some(s) = self.schema_or_default(schema) {
            return Ok(Some(s));
        }
        let rs = self.run("SELECT CURRENT_SCHEMA()", &[])?;
        Ok(rs
            .rows
            .first()
            .and_then(|row| cell(row, 0))
            .map(|s| self.preparer.to_canonical(s)))
    }

    fn show(&mut self, what: &str, schema: Option<&Ident>) -> Result<ResultSet, ReflectError> {
        let sql = match self.schema_or_default(schema) {
            Some(s) => format!("SHOW {what} IN {}", self.preparer.qualify([Some(&s)])),
            None => format!("SHOW {what}"),
        };
        self.run(&sql, &[])
    }

    /// `(storage column name, is primary key)` pairs in table order.
    fn describe_table(
        &mut self,
        table: &Ident,
        schema: Option<&Ident>,
    ) -> Result<Vec<(String, bool)>, ReflectError> {
        let sql = format!(
            "DESCRIBE TABLE {}",
            self.preparer.qualify([schema, Some(table)])
        );
        let rs = self.run(&sql, &[])?;
        let name = require_column(&rs, &sql, "name")?;
        let primary_key = require_column(&rs, &sql, "primary key")?;

        Ok(rs
            .rows
            .iter()
            .map(|row| {
                (
                    cell(row, name).unwrap_or_default().to_string(),
                    cell(row, primary_key) == Some("Y"),
                )
            })
            .collect())
    }

    fn names_where(
        &self,
        rs: &ResultSet,
        sql: &str,
        keep: impl Fn(&[Option<String>]) -> bool,
    ) -> Result<Vec<Ident>, ReflectError> {
        let name = require_column(rs, sql, "name")?;
        Ok(rs
            .rows
            .iter()
            .filter(|row| keep(row.as_slice()))
            .filter_map(|row| cell(row, name))
            .map(|n| self.preparer.to_canonical(n))
            .collect())
    }

    fn run(&mut self, sql: &str, params: &[Param]) -> Result<ResultSet, ReflectError> {
        #[cfg(feature = "tracing")]
        debug!(target: "reflect", params = params.len(), "{sql}");

        self.executor
            .execute(sql, params)
            .map_err(|source| ReflectError::Execute {
                sql: sql.to_string(),
                source,
            })
    }

    fn finish(&self, start: usize) -> Result<(), ReflectError> {
        if self.options.strict {
            check_strict(&self.warnings[start..])?;
        }
        Ok(())
    }
}

fn require_column(rs: &ResultSet, sql: &str, column: &'static str) -> Result<usize, ReflectError> {
    rs.column_index(column)
        .ok_or_else(|| ReflectError::MissingColumn {
            sql: sql.to_string(),
            column,
        })
}

fn parse_u32(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse().ok())
}
