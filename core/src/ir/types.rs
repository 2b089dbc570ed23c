//! Generic column types exposed to the calling toolkit.

/// Column types the reflection layer reports and the statement helpers render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    // Integer types
    SmallInt,
    Integer,
    BigInt,

    // Numeric types
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Float,
    Real,

    // Character types
    Char {
        length: Option<u32>,
    },
    Varchar {
        length: Option<u32>,
    },

    // Semi-structured values (VARIANT, OBJECT, ARRAY)
    Clob,

    // Boolean
    Boolean,

    // Date/Time types
    Date,
    DateTime,
    Time,
    Timestamp {
        with_tz: bool,
    },

    // Binary
    Binary {
        length: Option<u32>,
    },
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlType::SmallInt => write!(f, "SMALLINT"),
            SqlType::Integer => write!(f, "INTEGER"),
            SqlType::BigInt => write!(f, "BIGINT"),
            SqlType::Decimal { precision, scale } => match (precision, scale) {
                (Some(p), Some(s)) => write!(f, "DECIMAL({p}, {s})"),
                (Some(p), None) => write!(f, "DECIMAL({p})"),
                _ => write!(f, "DECIMAL"),
            },
            SqlType::Float => write!(f, "FLOAT"),
            SqlType::Real => write!(f, "REAL"),
            SqlType::Char { length } => match length {
                Some(n) => write!(f, "CHAR({n})"),
                None => write!(f, "CHAR"),
            },
            SqlType::Varchar { length } => match length {
                Some(n) => write!(f, "VARCHAR({n})"),
                None => write!(f, "VARCHAR"),
            },
            SqlType::Clob => write!(f, "VARIANT"),
            SqlType::Boolean => write!(f, "BOOLEAN"),
            SqlType::Date => write!(f, "DATE"),
            SqlType::DateTime => write!(f, "DATETIME"),
            SqlType::Time => write!(f, "TIME"),
            SqlType::Timestamp { with_tz } => {
                if *with_tz {
                    write!(f, "TIMESTAMP_TZ")
                } else {
                    write!(f, "TIMESTAMP_NTZ")
                }
            }
            SqlType::Binary { length } => match length {
                Some(n) => write!(f, "BINARY({n})"),
                None => write!(f, "BINARY"),
            },
        }
    }
}
