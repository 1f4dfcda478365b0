use std::path::Path;
use std::str::FromStr;

use sqlx::{Connection, SqliteConnection, sqlite::SqliteConnectOptions};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
mod schema;

use error::Result;

/// Handle on the SQLite store.
///
/// No connection is held here; every caller opens its own with
/// [`Database::connect`] and the connection is closed when it is dropped.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    pub fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?;
        Ok(Self::with_options(options))
    }

    pub fn from_path(path: &Path) -> Self {
        Self::with_options(SqliteConnectOptions::new().filename(path))
    }

    // Foreign keys are declared in the schema but not enforced: athletes may
    // reference categories or centers that do not exist.
    fn with_options(options: SqliteConnectOptions) -> Self {
        Self {
            options: options.create_if_missing(true).foreign_keys(false),
        }
    }

    /// Open a connection owned exclusively by the caller
    pub async fn connect(&self) -> Result<SqliteConnection> {
        let conn = SqliteConnection::connect_with(&self.options).await?;
        Ok(conn)
    }

    /// Create the tables if they are missing. Safe to run on every startup.
    pub async fn initialize(&self) -> Result<()> {
        let mut conn = self.connect().await?;
        schema::create_tables(&mut conn).await
    }

    pub fn filename(&self) -> &Path {
        self.options.get_filename()
    }
}
