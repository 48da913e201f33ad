#![allow(dead_code)]

use hospital_core::{open_db, DbConfig};
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SCHEMA_SQL: &str = "
CREATE TABLE Patients (
    ssn TEXT PRIMARY KEY NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    address TEXT,
    phone TEXT
);

CREATE TABLE Doctors (
    id INTEGER PRIMARY KEY NOT NULL,
    gender INTEGER NOT NULL,
    specialty TEXT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
);

CREATE TABLE Admissions (
    id INTEGER PRIMARY KEY NOT NULL,
    patient_ssn TEXT NOT NULL REFERENCES Patients(ssn),
    admit_date TEXT NOT NULL,
    leave_date TEXT,
    total_payment REAL NOT NULL DEFAULT 0,
    insurance_payment REAL NOT NULL DEFAULT 0,
    future_visit_date TEXT
);

CREATE TABLE Stays (
    admission_id INTEGER NOT NULL REFERENCES Admissions(id),
    room_number TEXT NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT
);

CREATE TABLE Examinations (
    doctor_id INTEGER NOT NULL REFERENCES Doctors(id),
    admission_id INTEGER NOT NULL REFERENCES Admissions(id),
    comment_text TEXT
);
";

pub const SEED_SQL: &str = "
INSERT INTO Patients VALUES ('111-22-3333', 'Ada', 'Lovelace', '12 St James Sq', '555-0100');
INSERT INTO Patients VALUES ('444-55-6666', 'Alan', 'Turing', NULL, NULL);

INSERT INTO Doctors VALUES (3, 0, 'Cardiology', 'Grace', 'Hopper');
INSERT INTO Doctors VALUES (4, 1, NULL, 'Edsger', 'Dijkstra');

INSERT INTO Admissions VALUES (7, '111-22-3333', '2024-01-05', '2024-01-09', 1200.0, 800.5, '2024-03-01');
INSERT INTO Admissions VALUES (8, '444-55-6666', '2024-02-10', NULL, 300, 0, NULL);

INSERT INTO Stays VALUES (7, '205', '2024-01-07', '2024-01-09');
INSERT INTO Stays VALUES (7, '101', '2024-01-05', '2024-01-07');

INSERT INTO Examinations VALUES (4, 7, NULL);
INSERT INTO Examinations VALUES (3, 7, 'stable after surgery');
";

/// A seeded hospital database in a temporary directory.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn seeded() -> Self {
        let fixture = Self::with_schema();
        fixture.raw().execute_batch(SEED_SQL).unwrap();
        fixture
    }

    pub fn with_schema() -> Self {
        Self::with_sql(SCHEMA_SQL)
    }

    pub fn with_sql(sql: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hospital.db");
        Connection::open(&path).unwrap().execute_batch(sql).unwrap();
        Self { _dir: dir, path }
    }

    pub fn config(&self) -> DbConfig {
        DbConfig::new(&self.path)
    }

    /// Opens through the production connection provider.
    pub fn open(&self) -> Connection {
        open_db(&self.config()).unwrap()
    }

    /// Opens without schema verification, for fixture tampering.
    pub fn raw(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }
}
