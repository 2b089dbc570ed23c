pub mod ident;
pub mod model;
pub mod types;

pub use ident::{Ident, QualifiedName};
pub use model::*;
pub use types::SqlType;
