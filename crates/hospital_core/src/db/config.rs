//! Database location resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no explicit path is given.
pub const DB_PATH_ENV: &str = "HOSPITAL_DB_PATH";
/// Fallback database file, relative to the working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "hospital.db";

/// Location of the hospital-records database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub path: PathBuf,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the database path: explicit value, then `HOSPITAL_DB_PATH`,
    /// then `hospital.db`.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::from_sources(explicit, std::env::var_os(DB_PATH_ENV))
    }

    fn from_sources(explicit: Option<PathBuf>, env_value: Option<OsString>) -> Self {
        let path = explicit
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| {
                env_value
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
