//! Patient accessor.

use crate::db::schema::{verify_table, PATIENTS};
use crate::model::patient::Patient;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

const PATIENT_SELECT_SQL: &str = "SELECT
    ssn,
    first_name,
    last_name,
    address,
    phone
FROM Patients";

pub trait PatientRepository {
    /// Looks up one patient by SSN. Returns `None` when no row matches.
    fn get_patient(&self, ssn: &str) -> RepoResult<Option<Patient>>;
}

pub struct SqlitePatientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePatientRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_table(conn, &PATIENTS)?;
        Ok(Self { conn })
    }
}

impl PatientRepository for SqlitePatientRepository<'_> {
    fn get_patient(&self, ssn: &str) -> RepoResult<Option<Patient>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PATIENT_SELECT_SQL} WHERE ssn = ?1;"))?;

        let mut rows = stmt.query(params![ssn])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_patient_row(row)?));
        }

        Ok(None)
    }
}

fn parse_patient_row(row: &Row<'_>) -> RepoResult<Patient> {
    Ok(Patient {
        ssn: row.get("ssn")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        address: row.get("address")?,
        phone: row.get("phone")?,
    })
}
