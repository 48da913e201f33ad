//! Report payloads produced by command handlers and their text/JSON rendering.
//!
//! # Invariants
//! - Text labels are stable; scripts grep them.
//! - Absent nullable fields render as `N/A` in text and `null` in JSON.
//! - Money renders with two decimals in text.

use super::CommandResult;
use crate::model::admission::{Admission, AdmissionId};
use crate::model::doctor::Doctor;
use crate::model::examination::Examination;
use crate::model::patient::Patient;
use crate::model::stay::Stay;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::{Display, Formatter};

const MISSING: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Admission with the stays and examinations recorded under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionReport {
    pub admission: Admission,
    pub stays: Vec<Stay>,
    pub examinations: Vec<Examination>,
}

/// Result of a total-payment update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentUpdate {
    pub admission_id: AdmissionId,
    pub previous_total_payment: f64,
    pub total_payment: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Patient(Patient),
    Doctor(Doctor),
    Admission(AdmissionReport),
    PaymentUpdate(PaymentUpdate),
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> CommandResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => {
                let json = match self {
                    Self::Patient(patient) => serde_json::to_string_pretty(patient)?,
                    Self::Doctor(doctor) => serde_json::to_string_pretty(doctor)?,
                    Self::Admission(report) => serde_json::to_string_pretty(report)?,
                    Self::PaymentUpdate(update) => serde_json::to_string_pretty(update)?,
                };
                Ok(json)
            }
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patient(patient) => write_patient(f, patient),
            Self::Doctor(doctor) => write_doctor(f, doctor),
            Self::Admission(report) => write_admission(f, report),
            Self::PaymentUpdate(update) => write!(
                f,
                "Updated total payment for admission {}: {:.2} -> {:.2}",
                update.admission_id, update.previous_total_payment, update.total_payment
            ),
        }
    }
}

fn write_patient(f: &mut Formatter<'_>, patient: &Patient) -> std::fmt::Result {
    writeln!(f, "Patient SSN: {}", patient.ssn)?;
    writeln!(f, "Patient First Name: {}", patient.first_name)?;
    writeln!(f, "Patient Last Name: {}", patient.last_name)?;
    writeln!(f, "Patient Address: {}", text_or_missing(&patient.address))?;
    write!(f, "Patient Phone: {}", text_or_missing(&patient.phone))
}

fn write_doctor(f: &mut Formatter<'_>, doctor: &Doctor) -> std::fmt::Result {
    writeln!(f, "Doctor ID: {}", doctor.id)?;
    writeln!(f, "Doctor First Name: {}", doctor.first_name)?;
    writeln!(f, "Doctor Last Name: {}", doctor.last_name)?;
    writeln!(f, "Doctor Gender: {}", doctor.gender)?;
    write!(f, "Doctor Specialty: {}", text_or_missing(&doctor.specialty))
}

fn write_admission(f: &mut Formatter<'_>, report: &AdmissionReport) -> std::fmt::Result {
    let admission = &report.admission;
    writeln!(f, "Admission ID: {}", admission.id)?;
    writeln!(f, "Patient SSN: {}", admission.patient_ssn)?;
    writeln!(f, "Admission date (start date): {}", admission.admit_date)?;
    writeln!(f, "Leave date: {}", date_or_missing(admission.leave_date))?;
    writeln!(f, "Total Payment: {:.2}", admission.total_payment)?;
    writeln!(f, "Insurance Payment: {:.2}", admission.insurance_payment)?;
    writeln!(
        f,
        "Future visit date: {}",
        date_or_missing(admission.future_visit_date)
    )?;

    writeln!(f, "Rooms:")?;
    for stay in &report.stays {
        writeln!(
            f,
            "\tRoom Num: {} FromDate: {} ToDate: {}",
            stay.room_number,
            stay.start_date,
            date_or_missing(stay.end_date)
        )?;
    }

    write!(f, "Doctors examined the patient in this admission:")?;
    for examination in &report.examinations {
        write!(f, "\n\tDoctor ID: {}", examination.doctor_id)?;
    }
    Ok(())
}

fn text_or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

fn date_or_missing(value: Option<NaiveDate>) -> String {
    value.map_or_else(|| MISSING.to_string(), |date| date.to_string())
}
