//! Stay accessor.

use crate::db::schema::{verify_table, STAYS};
use crate::model::admission::AdmissionId;
use crate::model::stay::Stay;
use crate::repo::RepoResult;
use rusqlite::{params, Connection, Row};

pub trait StayRepository {
    /// Lists the room stays of one admission ordered by start date.
    /// An unknown admission yields an empty list.
    fn list_stays_by_admission(&self, admission_id: AdmissionId) -> RepoResult<Vec<Stay>>;
}

pub struct SqliteStayRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStayRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_table(conn, &STAYS)?;
        Ok(Self { conn })
    }
}

impl StayRepository for SqliteStayRepository<'_> {
    fn list_stays_by_admission(&self, admission_id: AdmissionId) -> RepoResult<Vec<Stay>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                admission_id,
                room_number,
                start_date,
                end_date
             FROM Stays
             WHERE admission_id = ?1
             ORDER BY start_date ASC, room_number ASC;",
        )?;

        let mut rows = stmt.query(params![admission_id])?;
        let mut stays = Vec::new();
        while let Some(row) = rows.next()? {
            stays.push(parse_stay_row(row)?);
        }

        Ok(stays)
    }
}

fn parse_stay_row(row: &Row<'_>) -> RepoResult<Stay> {
    Ok(Stay {
        admission_id: row.get("admission_id")?,
        room_number: row.get("room_number")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
    })
}
