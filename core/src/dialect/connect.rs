//! Connection argument assembly from URL components.
use indexmap::IndexMap;

/// Domain appended to bare account names.
pub const ACCOUNT_DOMAIN: &str = "snowflakecomputing.com";

/// Port used when the host is derived from an account name.
pub const DEFAULT_PORT: &str = "443";

/// Errors raised while turning a URL into connection arguments.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("Invalid name space is specified: {0}")]
    InvalidNamespace(String),
}

/// Components of a connection URL such as `snowflake://user:pw@acct/db/schema?warehouse=wh`.
#[derive(Debug, Clone, Default)]
pub struct ConnectUrl {
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: Option<u16>,
    /// `database` or `database/schema`.
    pub database: Option<String>,
    pub query: IndexMap<String, String>,
}

/// Build driver keyword arguments.
///
/// A host without a dot is an account name; it is expanded to the account's
/// public endpoint on port 443. Autocommit is off unless the query string
/// turns it on, and query entries override everything else.
pub fn create_connect_args(url: &ConnectUrl) -> Result<IndexMap<String, String>, ConnectError> {
    let mut opts = IndexMap::new();

    if let Some(user) = &url.username {
        opts.insert("user".to_string(), user.clone());
    }
    if let Some(password) = &url.password {
        opts.insert("password".to_string(), password.clone());
    }

    if let Some(database) = &url.database {
        let name_spaces: Vec<&str> = database.split('/').collect();
        match name_spaces.as_slice() {
            [db] => {
                opts.insert("database".to_string(), db.to_string());
            }
            [db, schema] => {
                opts.insert("database".to_string(), db.to_string());
                opts.insert("schema".to_string(), schema.to_string());
            }
            _ => return Err(ConnectError::InvalidNamespace(database.clone())),
        }
    }

    if url.host.contains('.') {
        opts.insert("host".to_string(), url.host.clone());
        if let Some(port) = url.port {
            opts.insert("port".to_string(), port.to_string());
        }
    } else {
        opts.insert("account".to_string(), url.host.clone());
        opts.insert("host".to_string(), format!("{}.{ACCOUNT_DOMAIN}", url.host));
        opts.insert("port".to_string(), DEFAULT_PORT.to_string());
    }

    opts.insert("autocommit".to_string(), "false".to_string());

    for (key, value) in &url.query {
        opts.insert(key.clone(), value.clone());
    }

    Ok(opts)
}
