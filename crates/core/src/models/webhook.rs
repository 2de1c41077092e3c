use serde::{Deserialize, Serialize};

use super::{
    course::{CourseConfig, Location, Rates},
    lenient,
    tee_time::TimeSlot,
};

/// Body shared by intents that only need to know which course is calling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub course_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentDateTimeResponse {
    pub current_date: String,
    pub current_time: String,
    pub day_of_week: String,
    pub display_time: String,
    pub display_date: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckTeeTimesRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub course_id: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub time_preference: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_party_size")]
    pub number_of_players: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckTeeTimesResponse {
    pub date: String,
    pub available_times: Vec<TimeSlot>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookTeeTimeResponse {
    pub success: bool,
    pub confirmation_number: String,
    pub date: String,
    pub time: String,
    pub display_time: String,
    pub player_name: String,
    pub phone_number: String,
    pub number_of_players: u8,
    pub course_name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInfoResponse {
    pub course_name: String,
    pub phone: String,
    pub hours: CourseConfig,
    pub rates: Rates,
    pub features: Vec<String>,
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub booking_system: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseSummary>,
}
