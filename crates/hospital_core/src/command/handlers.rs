//! The four command handlers.
//!
//! Each handler prompts for its key on the console, reads through the
//! entity accessors and returns a `Report`. Handlers are generic over the
//! accessor traits; `dispatch` wires in the SQLite implementations.

use super::console::Console;
use super::report::{AdmissionReport, PaymentUpdate, Report};
use super::{CommandError, CommandResult};
use crate::model::admission::AdmissionId;
use crate::model::doctor::DoctorId;
use crate::repo::admission_repo::AdmissionRepository;
use crate::repo::doctor_repo::DoctorRepository;
use crate::repo::examination_repo::ExaminationRepository;
use crate::repo::patient_repo::PatientRepository;
use crate::repo::stay_repo::StayRepository;
use std::io::{BufRead, Write};

pub const PATIENT_SSN_PROMPT: &str = "Enter Patient SSN:";
pub const DOCTOR_ID_PROMPT: &str = "Enter Doctor ID:";
pub const ADMISSION_ID_PROMPT: &str = "Enter Admission ID:";
pub const ADMISSION_NUMBER_PROMPT: &str = "Enter Admission Number:";
pub const TOTAL_PAYMENT_PROMPT: &str = "Enter the new total payment:";

pub fn report_patient<R: BufRead, W: Write, P: Write>(
    patients: &impl PatientRepository,
    console: &mut Console<R, W, P>,
) -> CommandResult<Report> {
    console.prompt(PATIENT_SSN_PROMPT)?;
    let ssn = console.read_field("patient SSN")?;

    match patients.get_patient(&ssn)? {
        Some(patient) => Ok(Report::Patient(patient)),
        None => Err(CommandError::NotFound {
            entity: "patient",
            key: ssn,
        }),
    }
}

pub fn report_doctor<R: BufRead, W: Write, P: Write>(
    doctors: &impl DoctorRepository,
    console: &mut Console<R, W, P>,
) -> CommandResult<Report> {
    console.prompt(DOCTOR_ID_PROMPT)?;
    let id: DoctorId = console.read_parsed("doctor id")?;

    match doctors.get_doctor(id)? {
        Some(doctor) => Ok(Report::Doctor(doctor)),
        None => Err(CommandError::NotFound {
            entity: "doctor",
            key: id.to_string(),
        }),
    }
}

/// Reports an admission with its stays and examinations. Related rows are
/// only queried once the admission itself exists.
pub fn report_admission<R: BufRead, W: Write, P: Write>(
    admissions: &impl AdmissionRepository,
    stays: &impl StayRepository,
    examinations: &impl ExaminationRepository,
    console: &mut Console<R, W, P>,
) -> CommandResult<Report> {
    console.prompt(ADMISSION_ID_PROMPT)?;
    let id: AdmissionId = console.read_parsed("admission id")?;

    let Some(admission) = admissions.get_admission(id)? else {
        return Err(CommandError::NotFound {
            entity: "admission",
            key: id.to_string(),
        });
    };

    Ok(Report::Admission(AdmissionReport {
        admission,
        stays: stays.list_stays_by_admission(id)?,
        examinations: examinations.list_examinations_by_admission(id)?,
    }))
}

/// Replaces the total payment of an existing admission.
///
/// The admission is looked up before the amount is requested, so an unknown
/// id fails without prompting for a payment.
pub fn update_admission_payment<R: BufRead, W: Write, P: Write>(
    admissions: &impl AdmissionRepository,
    console: &mut Console<R, W, P>,
) -> CommandResult<Report> {
    console.prompt(ADMISSION_NUMBER_PROMPT)?;
    let id: AdmissionId = console.read_parsed("admission number")?;

    let Some(admission) = admissions.get_admission(id)? else {
        return Err(CommandError::NotFound {
            entity: "admission",
            key: id.to_string(),
        });
    };

    console.prompt(TOTAL_PAYMENT_PROMPT)?;
    let total_payment = read_payment(console)?;
    admissions.set_total_payment(id, total_payment)?;

    Ok(Report::PaymentUpdate(PaymentUpdate {
        admission_id: id,
        previous_total_payment: admission.total_payment,
        total_payment,
    }))
}

fn read_payment<R: BufRead, W: Write, P: Write>(
    console: &mut Console<R, W, P>,
) -> CommandResult<f64> {
    let field = "total payment";
    let value = console.read_field(field)?;
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(CommandError::Parse { field, value }),
    }
}
