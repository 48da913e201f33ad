use serde::{Deserialize, Serialize};

/// Patients are keyed by social security number.
pub type PatientSsn = String;

/// One row of `Patients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub ssn: PatientSsn,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}
