//! Admission accessor: lookup by id and total-payment update.
//!
//! # Invariants
//! - `set_total_payment` touches exactly the `total_payment` column of one row.
//! - Updating a missing admission is `RepoError::NotFound`, not a silent no-op.

use crate::db::schema::{verify_table, ADMISSIONS};
use crate::model::admission::{Admission, AdmissionId};
use crate::repo::{RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, Row};

const ADMISSION_SELECT_SQL: &str = "SELECT
    id,
    patient_ssn,
    admit_date,
    leave_date,
    total_payment,
    insurance_payment,
    future_visit_date
FROM Admissions";

pub trait AdmissionRepository {
    /// Looks up one admission by id. Returns `None` when no row matches.
    fn get_admission(&self, id: AdmissionId) -> RepoResult<Option<Admission>>;
    /// Overwrites the total payment of one admission.
    fn set_total_payment(&self, id: AdmissionId, total_payment: f64) -> RepoResult<()>;
}

pub struct SqliteAdmissionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAdmissionRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_table(conn, &ADMISSIONS)?;
        Ok(Self { conn })
    }
}

impl AdmissionRepository for SqliteAdmissionRepository<'_> {
    fn get_admission(&self, id: AdmissionId) -> RepoResult<Option<Admission>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ADMISSION_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_admission_row(row)?));
        }

        Ok(None)
    }

    fn set_total_payment(&self, id: AdmissionId, total_payment: f64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE Admissions SET total_payment = ?1 WHERE id = ?2;",
            params![total_payment, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "admission",
                key: id.to_string(),
            });
        }

        info!("event=admission_payment_update module=repo status=ok admission_id={id}");
        Ok(())
    }
}

fn parse_admission_row(row: &Row<'_>) -> RepoResult<Admission> {
    Ok(Admission {
        id: row.get("id")?,
        patient_ssn: row.get("patient_ssn")?,
        admit_date: row.get("admit_date")?,
        leave_date: row.get("leave_date")?,
        total_payment: row.get("total_payment")?,
        insurance_payment: row.get("insurance_payment")?,
        future_visit_date: row.get("future_visit_date")?,
    })
}
