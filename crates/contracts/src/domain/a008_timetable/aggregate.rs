use serde::{Deserialize, Serialize};

/// One lesson in the weekly timetable of a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub day: String,
    pub period: u8,
    pub subject: String,
    #[serde(default)]
    pub teacher: Option<String>,
}

/// Body of `POST /timetable/gettimetable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableQuery {
    pub form: u8,
    pub stream: String,
}
