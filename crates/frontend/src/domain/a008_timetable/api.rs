use contracts::domain::a008_timetable::aggregate::{TimetableQuery, TimetableSlot};

use crate::shared::api_error::ApiError;
use crate::shared::http_client::client;

pub async fn fetch_timetable(query: TimetableQuery) -> Result<Vec<TimetableSlot>, ApiError> {
    client().post("/timetable/gettimetable", &query).await
}
