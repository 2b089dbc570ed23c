/// Engine type name → generic type mapping.
use crate::diagnostics::warning::{self, Severity, Warning};
use crate::ir::SqlType;

/// Type modifiers reported next to the type name by `information_schema.columns`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeModifiers {
    pub character_maximum_length: Option<u32>,
    pub numeric_precision: Option<u32>,
    pub numeric_scale: Option<u32>,
}

/// Map an engine type name to a generic type, warning when there is no mapping.
///
/// Names are matched case-insensitively; a parenthesized suffix such as
/// `NUMBER(38,0)` is ignored in favor of the reported modifiers.
pub fn map_type(
    type_name: &str,
    modifiers: TypeModifiers,
    object: &str,
    warnings: &mut Vec<Warning>,
) -> Option<SqlType> {
    let base = type_name
        .split('(')
        .next()
        .unwrap_or(type_name)
        .trim()
        .to_ascii_uppercase();

    let length = modifiers.character_maximum_length;
    let mapped = match base.as_str() {
        "BIGINT" => SqlType::BigInt,
        "INT" | "INTEGER" => SqlType::Integer,
        "BYTEINT" | "SMALLINT" | "TINYINT" => SqlType::SmallInt,

        "DEC" | "DECIMAL" | "FIXED" | "NUMBER" | "NUMERIC" => SqlType::Decimal {
            precision: modifiers.numeric_precision,
            scale: modifiers.numeric_scale,
        },
        "DOUBLE" | "FLOAT" => SqlType::Float,
        "REAL" => SqlType::Real,

        "CHAR" | "CHARACTER" => SqlType::Char { length },
        "STRING" | "TEXT" | "VARCHAR" => SqlType::Varchar { length },

        "VARIANT" | "OBJECT" => SqlType::Clob,

        "BOOLEAN" => SqlType::Boolean,

        "DATE" => SqlType::Date,
        "DATETIME" => SqlType::DateTime,
        "TIME" => SqlType::Time,
        "TIMESTAMP" | "TIMESTAMP_NTZ" => SqlType::Timestamp { with_tz: false },
        "TIMESTAMP_LTZ" | "TIMESTAMP_TZ" => SqlType::Timestamp { with_tz: true },

        "BINARY" | "VARBINARY" => SqlType::Binary { length },

        _ => {
            warnings.push(
                Warning::new(
                    warning::TYPE_UNKNOWN,
                    Severity::Unsupported,
                    format!("no generic type for '{type_name}'"),
                )
                .with_object(object),
            );
            return None;
        }
    };

    Some(mapped)
}
