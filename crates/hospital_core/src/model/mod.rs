//! Plain records for the hospital-records tables.
//!
//! # Responsibility
//! - Mirror one row of each accessor query as a typed struct.
//! - Own the persisted encodings of small enums (`Gender`).
//!
//! # Invariants
//! - Records carry no behavior beyond formatting and code conversion.
//! - Calendar columns are `chrono::NaiveDate`; nullable columns are `Option`.

pub mod admission;
pub mod doctor;
pub mod examination;
pub mod patient;
pub mod stay;
