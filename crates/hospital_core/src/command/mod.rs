//! Command selection and dispatch.
//!
//! # Responsibility
//! - Map the numeric menu selector to one of four commands.
//! - Run the selected handler against one connection and one console.
//! - Render the handler's report in the requested output format.
//!
//! # Invariants
//! - A dispatch performs at most one write (`UpdateAdmissionPayment`).
//! - A failed command writes no report; the caller reports the error.

use crate::db::DbError;
use crate::repo::admission_repo::SqliteAdmissionRepository;
use crate::repo::doctor_repo::SqliteDoctorRepository;
use crate::repo::examination_repo::SqliteExaminationRepository;
use crate::repo::patient_repo::SqlitePatientRepository;
use crate::repo::stay_repo::SqliteStayRepository;
use crate::repo::RepoError;
use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::time::Instant;

pub mod console;
pub mod handlers;
pub mod report;

use console::Console;
use report::OutputFormat;

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug)]
pub enum CommandError {
    Input(std::io::Error),
    EmptyInput(&'static str),
    Parse { field: &'static str, value: String },
    NotFound { entity: &'static str, key: String },
    Repo(RepoError),
    Db(DbError),
    Render(serde_json::Error),
}

impl CommandError {
    /// Stable short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::EmptyInput(_) => "empty_input",
            Self::Parse { .. } => "parse",
            Self::NotFound { .. } => "not_found",
            Self::Repo(_) => "repo",
            Self::Db(_) => "db",
            Self::Render(_) => "render",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "console error: {err}"),
            Self::EmptyInput(field) => write!(f, "no {field} was entered"),
            Self::Parse { field, value } => write!(f, "invalid {field}: `{value}`"),
            Self::NotFound { entity, .. } => write!(f, "Unable to find {entity}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "failed to render report: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::EmptyInput(_) | Self::Parse { .. } | Self::NotFound { .. } => None,
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(value: std::io::Error) -> Self {
        Self::Input(value)
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, key } => Self::NotFound { entity, key },
            other => Self::Repo(other),
        }
    }
}

impl From<DbError> for CommandError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}

/// The four commands offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ReportPatient,
    ReportDoctor,
    ReportAdmission,
    UpdateAdmissionPayment,
}

impl CommandKind {
    pub const ALL: [Self; 4] = [
        Self::ReportPatient,
        Self::ReportDoctor,
        Self::ReportAdmission,
        Self::UpdateAdmissionPayment,
    ];

    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Self::ReportPatient),
            2 => Some(Self::ReportDoctor),
            3 => Some(Self::ReportAdmission),
            4 => Some(Self::UpdateAdmissionPayment),
            _ => None,
        }
    }

    pub fn selector(self) -> i64 {
        match self {
            Self::ReportPatient => 1,
            Self::ReportDoctor => 2,
            Self::ReportAdmission => 3,
            Self::UpdateAdmissionPayment => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ReportPatient => "Report Patients Basic Information",
            Self::ReportDoctor => "Report Doctors Basic Information",
            Self::ReportAdmission => "Report Admissions Information",
            Self::UpdateAdmissionPayment => "Update Admissions Payment",
        }
    }

    fn log_name(self) -> &'static str {
        match self {
            Self::ReportPatient => "report_patient",
            Self::ReportDoctor => "report_doctor",
            Self::ReportAdmission => "report_admission",
            Self::UpdateAdmissionPayment => "update_admission_payment",
        }
    }

    /// Menu lines printed when no selector is given, e.g. `1- Report ...`.
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(|kind| format!("{}- {}", kind.selector(), kind.title()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs one command against `conn`, reading answers from and writing the
/// report to `console`.
///
/// # Side effects
/// - Emits `command_run` logging events with duration and status.
pub fn dispatch<R: BufRead, W: Write, P: Write>(
    kind: CommandKind,
    conn: &Connection,
    console: &mut Console<R, W, P>,
    format: OutputFormat,
) -> CommandResult<()> {
    let started_at = Instant::now();
    info!(
        "event=command_run module=command status=start command={}",
        kind.log_name()
    );

    let result = run(kind, conn, console).and_then(|report| {
        let rendered = report.render(format)?;
        console.write_block(&rendered)
    });

    match &result {
        Ok(()) => info!(
            "event=command_run module=command status=ok command={} duration_ms={}",
            kind.log_name(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=command_run module=command status=error command={} duration_ms={} error_code={}",
            kind.log_name(),
            started_at.elapsed().as_millis(),
            err.code()
        ),
    }

    result
}

fn run<R: BufRead, W: Write, P: Write>(
    kind: CommandKind,
    conn: &Connection,
    console: &mut Console<R, W, P>,
) -> CommandResult<report::Report> {
    match kind {
        CommandKind::ReportPatient => {
            let patients = SqlitePatientRepository::try_new(conn)?;
            handlers::report_patient(&patients, console)
        }
        CommandKind::ReportDoctor => {
            let doctors = SqliteDoctorRepository::try_new(conn)?;
            handlers::report_doctor(&doctors, console)
        }
        CommandKind::ReportAdmission => {
            let admissions = SqliteAdmissionRepository::try_new(conn)?;
            let stays = SqliteStayRepository::try_new(conn)?;
            let examinations = SqliteExaminationRepository::try_new(conn)?;
            handlers::report_admission(&admissions, &stays, &examinations, console)
        }
        CommandKind::UpdateAdmissionPayment => {
            let admissions = SqliteAdmissionRepository::try_new(conn)?;
            handlers::update_admission_payment(&admissions, console)
        }
    }
}
