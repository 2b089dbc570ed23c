pub mod autocommit;
pub mod config;
pub mod connect;
pub mod keywords;
pub mod normalize;
pub mod statement;

pub use autocommit::{AutocommitMode, should_autocommit, should_autocommit_text};
pub use config::{ConfigError, DialectConfig};
pub use connect::{ConnectError, ConnectUrl, create_connect_args};
pub use normalize::{IdentifierPreparer, QuotingReason};
