//! Entity accessors over the hospital-records tables.
//!
//! # Responsibility
//! - One use-case oriented accessor per entity (trait + SQLite implementation).
//! - Map rows to typed records and surface semantic errors (`NotFound`,
//!   `InvalidData`) alongside DB transport errors.
//!
//! # Invariants
//! - Every key is bound as a statement parameter.
//! - Read paths reject malformed persisted rows instead of defaulting fields.
//! - Repositories are only constructed over a connection whose table passed
//!   schema verification (`try_new`).

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod admission_repo;
pub mod doctor_repo;
pub mod examination_repo;
pub mod patient_repo;
pub mod stay_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error shared by all entity accessors.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { entity: &'static str, key: String },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, key } => write!(f, "{entity} not found: {key}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
