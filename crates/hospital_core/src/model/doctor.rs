//! Doctor record and gender encoding.
//!
//! # Invariants
//! - `Gender` is persisted as `0` (female) or `1` (male); other codes are invalid.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type DoctorId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Decodes the integer stored in `Doctors.gender`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Female),
            1 => Some(Self::Male),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Female => f.write_str("Female"),
            Self::Male => f.write_str("Male"),
        }
    }
}

/// One row of `Doctors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub gender: Gender,
    pub specialty: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::Gender;

    #[test]
    fn gender_codes_map_both_ways() {
        for gender in [Gender::Female, Gender::Male] {
            assert_eq!(Gender::from_code(gender.code()), Some(gender));
        }
    }

    #[test]
    fn unknown_gender_code_is_rejected() {
        assert_eq!(Gender::from_code(2), None);
        assert_eq!(Gender::from_code(-1), None);
    }

    #[test]
    fn gender_displays_capitalized_label() {
        assert_eq!(Gender::Female.to_string(), "Female");
        assert_eq!(Gender::Male.to_string(), "Male");
    }
}
