//! Doctor accessor.
//!
//! # Invariants
//! - `Doctors.gender` must decode through `Gender::from_code`; unknown codes
//!   surface as `RepoError::InvalidData`.

use crate::db::schema::{verify_table, DOCTORS};
use crate::model::doctor::{Doctor, DoctorId, Gender};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const DOCTOR_SELECT_SQL: &str = "SELECT
    id,
    gender,
    specialty,
    first_name,
    last_name
FROM Doctors";

pub trait DoctorRepository {
    /// Looks up one doctor by id. Returns `None` when no row matches.
    fn get_doctor(&self, id: DoctorId) -> RepoResult<Option<Doctor>>;
}

pub struct SqliteDoctorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDoctorRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_table(conn, &DOCTORS)?;
        Ok(Self { conn })
    }
}

impl DoctorRepository for SqliteDoctorRepository<'_> {
    fn get_doctor(&self, id: DoctorId) -> RepoResult<Option<Doctor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOCTOR_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_doctor_row(row)?));
        }

        Ok(None)
    }
}

fn parse_doctor_row(row: &Row<'_>) -> RepoResult<Doctor> {
    let gender_code: i64 = row.get("gender")?;
    let gender = Gender::from_code(gender_code).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid gender code `{gender_code}` in Doctors.gender"))
    })?;

    Ok(Doctor {
        id: row.get("id")?,
        gender,
        specialty: row.get("specialty")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}
