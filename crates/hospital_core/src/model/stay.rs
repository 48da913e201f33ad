use crate::model::admission::AdmissionId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One room occupancy within an admission. `end_date` is `None` while the
/// patient still occupies the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub admission_id: AdmissionId,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}
