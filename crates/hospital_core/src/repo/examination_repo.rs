//! Examination accessor.

use crate::db::schema::{verify_table, EXAMINATIONS};
use crate::model::admission::AdmissionId;
use crate::model::examination::Examination;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

pub trait ExaminationRepository {
    /// Lists examinations recorded during one admission ordered by doctor id.
    /// An unknown admission yields an empty list.
    fn list_examinations_by_admission(
        &self,
        admission_id: AdmissionId,
    ) -> RepoResult<Vec<Examination>>;
}

pub struct SqliteExaminationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExaminationRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_table(conn, &EXAMINATIONS)?;
        Ok(Self { conn })
    }
}

impl ExaminationRepository for SqliteExaminationRepository<'_> {
    fn list_examinations_by_admission(
        &self,
        admission_id: AdmissionId,
    ) -> RepoResult<Vec<Examination>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                doctor_id,
                admission_id,
                comment_text
             FROM Examinations
             WHERE admission_id = ?1
             ORDER BY doctor_id ASC;",
        )?;

        let mut rows = stmt.query(params![admission_id])?;
        let mut examinations = Vec::new();
        while let Some(row) = rows.next()? {
            examinations.push(parse_examination_row(row)?);
        }

        Ok(examinations)
    }
}

fn parse_examination_row(row: &Row<'_>) -> RepoResult<Examination> {
    Ok(Examination {
        doctor_id: row.get("doctor_id")?,
        admission_id: row.get("admission_id")?,
        comment_text: row.get("comment_text")?,
    })
}
