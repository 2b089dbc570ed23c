//! snowname-core: identifier folding, quoting and schema reflection for
//! uppercase-folding warehouse SQL engines.

pub mod diagnostics;
pub mod dialect;
pub mod ir;
pub mod lint;
pub mod reflect;

pub use dialect::{DialectConfig, IdentifierPreparer, QuotingReason};
pub use ir::{Ident, QualifiedName, SqlType};
pub use lint::lint_identifiers;
pub use reflect::executor::{ExecuteError, Param, ResultSet, SqlExecutor};
pub use reflect::{Inspector, ReflectError, ReflectOptions};
