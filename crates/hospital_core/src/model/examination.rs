use crate::model::admission::AdmissionId;
use crate::model::doctor::DoctorId;
use serde::{Deserialize, Serialize};

/// A doctor's examination of the patient during an admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Examination {
    pub doctor_id: DoctorId,
    pub admission_id: AdmissionId,
    pub comment_text: Option<String>,
}
