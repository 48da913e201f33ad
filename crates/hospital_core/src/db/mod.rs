//! SQLite connection provider and schema readiness checks.
//!
//! # Responsibility
//! - Resolve where the hospital-records database lives.
//! - Open one configured connection per command invocation.
//! - Verify that the tables read by the accessors are present.
//!
//! # Invariants
//! - The database file is owned by an external process; it is never created here.
//! - Accessors must not run before `verify_schema` succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod config;
mod open;
pub mod schema;

pub use config::{DbConfig, DB_PATH_ENV, DEFAULT_DB_FILE_NAME};
pub use open::open_db;
pub use schema::verify_schema;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    NotFound(PathBuf),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::NotFound(path) => write!(f, "database file not found: {}", path.display()),
            Self::MissingRequiredTable(table) => {
                write!(f, "database is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "table `{table}` is missing required column `{column}`")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::NotFound(_)
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
