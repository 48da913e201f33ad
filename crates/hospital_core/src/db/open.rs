//! Connection bootstrap for the hospital-records database.
//!
//! # Responsibility
//! - Open an existing SQLite file with read/write access.
//! - Configure connection pragmas and verify schema readiness.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections passed `verify_schema`.

use super::config::DbConfig;
use super::schema::verify_schema;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::time::{Duration, Instant};

/// Opens the configured database and checks that all accessor tables exist.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
///
/// # Errors
/// - `DbError::NotFound` when the file does not exist.
/// - `DbError::MissingRequiredTable`/`MissingRequiredColumn` when the schema
///   does not match what the accessors read.
pub fn open_db(config: &DbConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    if !config.path().is_file() {
        error!(
            "event=db_open module=db status=error mode=file duration_ms={} error_code=db_missing",
            started_at.elapsed().as_millis()
        );
        return Err(DbError::NotFound(config.path().to_path_buf()));
    }

    let conn = match Connection::open_with_flags(
        config.path(),
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    ) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    verify_schema(conn)
}
