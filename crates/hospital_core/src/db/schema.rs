//! Schema readiness checks for the externally managed database.
//!
//! The tool never creates or alters tables. It only confirms that every
//! table and column the accessors select is present.

use super::{DbError, DbResult};
use rusqlite::Connection;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
pub struct RequiredTable {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const PATIENTS: RequiredTable = RequiredTable {
    name: "Patients",
    columns: &["ssn", "first_name", "last_name", "address", "phone"],
};

pub const DOCTORS: RequiredTable = RequiredTable {
    name: "Doctors",
    columns: &["id", "gender", "specialty", "first_name", "last_name"],
};

pub const ADMISSIONS: RequiredTable = RequiredTable {
    name: "Admissions",
    columns: &[
        "id",
        "patient_ssn",
        "admit_date",
        "leave_date",
        "total_payment",
        "insurance_payment",
        "future_visit_date",
    ],
};

pub const STAYS: RequiredTable = RequiredTable {
    name: "Stays",
    columns: &["admission_id", "room_number", "start_date", "end_date"],
};

pub const EXAMINATIONS: RequiredTable = RequiredTable {
    name: "Examinations",
    columns: &["doctor_id", "admission_id", "comment_text"],
};

pub const REQUIRED_TABLES: &[RequiredTable] =
    &[PATIENTS, DOCTORS, ADMISSIONS, STAYS, EXAMINATIONS];

/// Verifies every table in `REQUIRED_TABLES`.
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    for table in REQUIRED_TABLES {
        verify_table(conn, table)?;
    }
    Ok(())
}

/// Verifies one table and its selected columns. Names compare
/// case-insensitively, matching SQLite identifier rules.
pub fn verify_table(conn: &Connection, table: &RequiredTable) -> DbResult<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type IN ('table', 'view') AND name = ?1 COLLATE NOCASE
        );",
        [table.name],
        |row| row.get(0),
    )?;
    if !exists {
        return Err(DbError::MissingRequiredTable(table.name));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([table.name], |row| row.get::<_, String>(0))?
        .map(|name| name.map(|value| value.to_ascii_lowercase()))
        .collect::<Result<HashSet<_>, _>>()?;

    for column in table.columns {
        if !present.contains(*column) {
            return Err(DbError::MissingRequiredColumn {
                table: table.name,
                column: *column,
            });
        }
    }

    Ok(())
}
