// Reflection tests: drive Inspector against recorded introspection output.

use std::path::PathBuf;

use serde::Deserialize;
use snowname_core::diagnostics::warning;
use snowname_core::{
    DialectConfig, ExecuteError, Ident, IdentifierPreparer, Inspector, Param, ReflectError, ReflectOptions,
    ResultSet, SqlExecutor, SqlType,
};

#[derive(Debug, Deserialize)]
struct RecordedResponse {
    sql: String,
    #[serde(default)]
    prefix: bool,
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Option<String>>>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    kind: Option<String>,
}

/// Replays a fixture file and records every statement it receives.
struct ReplayExecutor {
    responses: Vec<RecordedResponse>,
    executed: Vec<(String, Vec<Param>)>,
}

impl ReplayExecutor {
    fn load(fixture: &str) -> Self {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(fixture);
        let input = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()));
        let responses = serde_yaml::from_str(&input)
            .unwrap_or_else(|e| panic!("Invalid fixture {}: {e}", path.display()));
        Self {
            responses,
            executed: Vec::new(),
        }
    }

    fn statements(&self) -> Vec<&str> {
        self.executed.iter().map(|(sql, _)| sql.as_str()).collect()
    }
}

impl SqlExecutor for ReplayExecutor {
    fn execute(&mut self, sql: &str, params: &[Param]) -> Result<ResultSet, ExecuteError> {
        self.executed.push((sql.to_string(), params.to_vec()));
        let response = self
            .responses
            .iter()
            .find(|r| if r.prefix { sql.starts_with(&r.sql) } else { sql == r.sql })
            .ok_or_else(|| ExecuteError::Database(format!("no recorded response for {sql}")))?;

        match (&response.error, response.kind.as_deref()) {
            (Some(msg), Some("database")) => Err(ExecuteError::Database(msg.clone())),
            (Some(msg), _) => Err(ExecuteError::Programming(msg.clone())),
            (None, _) => Ok(ResultSet::new(
                response.columns.clone(),
                response.rows.clone(),
            )),
        }
    }
}

fn public_options() -> ReflectOptions {
    ReflectOptions {
        default_schema: Some(Ident::new("public")),
        strict: false,
    }
}

#[test]
fn test_table_names_are_canonical() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    let names = inspector.get_table_names(None).unwrap();
    assert_eq!(
        names,
        vec![
            Ident::new("orders"),
            Ident::new("customers"),
            Ident::quoted("LineItems"),
            Ident::new("scratch"),
        ]
    );
    assert_eq!(exec.statements(), vec!["SHOW TABLES IN public"]);
}

#[test]
fn test_lowercase_schema_is_quoted_in_show() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, ReflectOptions::default());

    let raw = preparer.to_canonical("raw");
    let names = inspector.get_table_names(Some(&raw)).unwrap();
    assert_eq!(names, vec![Ident::quoted("events")]);
    assert_eq!(exec.statements(), vec!["SHOW TABLES IN \"raw\""]);
}

#[test]
fn test_show_tables_without_schema_propagates_failure() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, ReflectOptions::default());

    let err = inspector.get_table_names(None).unwrap_err();
    match err {
        ReflectError::Execute { sql, source } => {
            assert_eq!(sql, "SHOW TABLES");
            assert!(matches!(source, ExecuteError::Database(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_temp_table_names() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    assert_eq!(
        inspector.get_temp_table_names(None).unwrap(),
        vec![Ident::new("scratch")]
    );
}

#[test]
fn test_view_names_and_definition() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    assert_eq!(
        inspector.get_view_names(None).unwrap(),
        vec![Ident::new("open_orders")]
    );

    let definition = inspector
        .get_view_definition(&Ident::new("open_orders"), None)
        .unwrap();
    assert_eq!(
        definition.as_deref(),
        Some("CREATE VIEW OPEN_ORDERS AS SELECT * FROM ORDERS WHERE STATUS = 'O'")
    );

    let missing = inspector
        .get_view_definition(&Ident::new("missing"), None)
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_view_definition_ignores_like_wildcard_matches() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    let definition = inspector
        .get_view_definition(&Ident::new("my_view"), None)
        .unwrap();
    assert_eq!(
        definition.as_deref(),
        Some("CREATE VIEW MY_VIEW AS SELECT 2 AS Y")
    );
}

#[test]
fn test_has_table_and_sequence() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, ReflectOptions::default());
    let public = Ident::new("public");

    assert!(inspector.has_table(&Ident::new("orders"), Some(&public)).unwrap());
    assert!(!inspector.has_table(&Ident::new("missing"), Some(&public)).unwrap());
    assert!(
        inspector
            .has_sequence(&Ident::new("order_seq"), Some(&public))
            .unwrap()
    );

    let err = inspector
        .has_table(&Ident::new("broken"), Some(&public))
        .unwrap_err();
    assert!(matches!(
        err,
        ReflectError::Execute {
            source: ExecuteError::Database(_),
            ..
        }
    ));
}

#[test]
fn test_columns_bind_storage_names() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    inspector.get_columns(&Ident::new("orders"), None).unwrap();

    let (sql, params) = &exec.executed[1];
    assert!(sql.starts_with("SELECT ic.column_name"));
    assert_eq!(
        params,
        &vec![
            Param::new("table_schema", "PUBLIC"),
            Param::new("table_name", "ORDERS"),
        ]
    );
}

#[test]
fn test_columns_shape() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    let columns = inspector.get_columns(&Ident::new("orders"), None).unwrap();
    assert_eq!(columns.len(), 4);

    let id = &columns[0];
    assert_eq!(id.name, Ident::new("id"));
    assert_eq!(
        id.sql_type,
        Some(SqlType::Decimal {
            precision: Some(38),
            scale: Some(0)
        })
    );
    assert!(!id.nullable);
    assert!(id.autoincrement);
    assert!(id.primary_key);

    let note = &columns[2];
    assert_eq!(note.name, Ident::quoted("Note"));
    assert_eq!(note.sql_type, Some(SqlType::Varchar { length: Some(200) }));
    assert!(note.nullable);
    assert_eq!(note.default.as_deref(), Some("'n/a'"));
    assert!(!note.primary_key);

    let location = &columns[3];
    assert_eq!(location.sql_type, None);
    assert_eq!(location.type_name, "GEOGRAPHY");

    let warnings = inspector.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, warning::TYPE_UNKNOWN);
    assert_eq!(warnings[0].object.as_deref(), Some("public.orders.location"));
}

#[test]
fn test_column_warning_object_follows_dialect() {
    let preparer = IdentifierPreparer::new(DialectConfig {
        separator: ':',
        ..Default::default()
    });
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    inspector.get_columns(&Ident::new("orders"), None).unwrap();
    assert_eq!(
        inspector.warnings()[0].object.as_deref(),
        Some("public:orders:location")
    );
}

#[test]
fn test_columns_missing_from_describe_quote_objects() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    inspector
        .get_columns(&Ident::new("line_items"), None)
        .unwrap();
    assert!(
        inspector
            .warnings()
            .iter()
            .any(|w| w.code == warning::COLUMN_NOT_DESCRIBED
                && w.object.as_deref() == Some("public.line_items.\"Note\""))
    );
}

#[test]
fn test_columns_strict_fails_on_unknown_type() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let options = ReflectOptions {
        strict: true,
        ..public_options()
    };
    let mut inspector = Inspector::new(&mut exec, &preparer, options);

    let err = inspector
        .get_columns(&Ident::new("orders"), None)
        .unwrap_err();
    assert!(matches!(err, ReflectError::Strict(_)));
    assert!(err.to_string().contains("TYPE_UNKNOWN"));
}

#[test]
fn test_columns_missing_from_describe_are_reported() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    let columns = inspector
        .get_columns(&Ident::new("line_items"), None)
        .unwrap();
    assert!(columns.iter().all(|c| !c.primary_key));
    let not_described = inspector
        .take_warnings()
        .into_iter()
        .filter(|w| w.code == warning::COLUMN_NOT_DESCRIBED)
        .count();
    assert_eq!(not_described, 4);
    assert!(inspector.warnings().is_empty());
}

#[test]
fn test_primary_keys_resolve_current_schema() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, ReflectOptions::default());

    let pk = inspector
        .get_primary_keys(&Ident::new("line_items"), None)
        .unwrap();
    assert_eq!(
        pk.constrained_columns,
        vec![Ident::new("order_id"), Ident::new("line_no")]
    );
    assert!(pk.name.is_none());
    assert_eq!(
        exec.statements(),
        vec!["SELECT CURRENT_SCHEMA()", "DESCRIBE TABLE public.line_items"]
    );
}

#[test]
fn test_foreign_keys_grouped_in_order() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, ReflectOptions::default());

    let fks = inspector
        .get_foreign_keys(&Ident::new("line_items"), None)
        .unwrap();
    assert_eq!(fks.len(), 2);

    assert_eq!(fks[0].name, "FK_LINE_ORDER");
    assert_eq!(fks[0].constrained_columns, vec![Ident::new("order_id")]);
    assert_eq!(fks[0].referred_schema, Some(Ident::new("public")));
    assert_eq!(fks[0].referred_table, Ident::new("orders"));
    assert_eq!(fks[0].referred_columns, vec![Ident::new("id")]);

    assert_eq!(fks[1].name, "FK_LINE_ORDER_LINE");
    assert_eq!(
        fks[1].constrained_columns,
        vec![Ident::new("order_id"), Ident::new("line_no")]
    );
    assert_eq!(fks[1].referred_table, Ident::new("order_lines"));
    assert_eq!(
        fks[1].referred_columns,
        vec![Ident::new("order_id"), Ident::new("line_no")]
    );

    assert_eq!(
        exec.statements(),
        vec![
            "SELECT CURRENT_DATABASE(), CURRENT_SCHEMA()",
            "SHOW IMPORTED KEYS IN SCHEMA sales.public",
        ]
    );
}

#[test]
fn test_foreign_keys_filtered_to_table() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    let fks = inspector.get_foreign_keys(&Ident::new("orders"), None).unwrap();
    assert_eq!(fks.len(), 1);
    assert_eq!(fks[0].referred_table, Ident::new("customers"));
    assert!(
        inspector
            .get_foreign_keys(&Ident::new("customers"), None)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_foreign_keys_match_mixed_case_table_without_marker() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let mut inspector = Inspector::new(&mut exec, &preparer, public_options());

    let unmarked = inspector
        .get_foreign_keys(&Ident::new("LineItems"), None)
        .unwrap();
    let marked = inspector
        .get_foreign_keys(&Ident::quoted("LineItems"), None)
        .unwrap();
    assert_eq!(unmarked.len(), 1);
    assert_eq!(unmarked, marked);
    assert_eq!(unmarked[0].name, "FK_MIXED_LINE_ORDER");
    assert_eq!(unmarked[0].referred_table, Ident::new("orders"));
}

#[test]
fn test_indexes_always_empty() {
    let preparer = IdentifierPreparer::default();
    let mut exec = ReplayExecutor::load("sales_schema.yaml");
    let options = ReflectOptions {
        strict: true,
        ..public_options()
    };
    let mut inspector = Inspector::new(&mut exec, &preparer, options);

    let indexes = inspector.get_indexes(&Ident::new("orders"), None).unwrap();
    assert!(indexes.is_empty());
    assert_eq!(inspector.warnings()[0].code, warning::INDEXES_UNSUPPORTED);
    assert!(exec.executed.is_empty());
}
