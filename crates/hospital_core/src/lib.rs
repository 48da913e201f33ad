//! Core of the hospital-records command-line tool.
//! Connection provider, entity accessors, and the four menu commands.

pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use command::console::Console;
pub use command::report::{AdmissionReport, OutputFormat, PaymentUpdate, Report};
pub use command::{dispatch, CommandError, CommandKind, CommandResult};
pub use db::{open_db, DbConfig, DbError, DbResult};
pub use logging::{
    default_log_dir, default_log_level, flush_logging, init_logging, logging_status,
};
pub use model::admission::{Admission, AdmissionId};
pub use model::doctor::{Doctor, DoctorId, Gender};
pub use model::examination::Examination;
pub use model::patient::{Patient, PatientSsn};
pub use model::stay::Stay;
pub use repo::admission_repo::{AdmissionRepository, SqliteAdmissionRepository};
pub use repo::doctor_repo::{DoctorRepository, SqliteDoctorRepository};
pub use repo::examination_repo::{ExaminationRepository, SqliteExaminationRepository};
pub use repo::patient_repo::{PatientRepository, SqlitePatientRepository};
pub use repo::stay_repo::{SqliteStayRepository, StayRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
