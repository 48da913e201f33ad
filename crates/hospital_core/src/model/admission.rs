//! Admission record.
//!
//! # Invariants
//! - `admit_date` is always set; `leave_date` and `future_visit_date` are
//!   `None` while the patient is still admitted or no visit is scheduled.
//! - Payments are stored as floating point currency amounts.

use crate::model::patient::PatientSsn;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type AdmissionId = i64;

/// One row of `Admissions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    pub id: AdmissionId,
    pub patient_ssn: PatientSsn,
    pub admit_date: NaiveDate,
    pub leave_date: Option<NaiveDate>,
    pub total_payment: f64,
    pub insurance_payment: f64,
    pub future_visit_date: Option<NaiveDate>,
}
