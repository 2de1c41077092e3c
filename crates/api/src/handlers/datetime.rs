use axum::{Json, extract::State};
use std::sync::Arc;
use teetalk_core::{
    clock::{format_12h, format_24h},
    models::webhook::{CourseRequest, CurrentDateTimeResponse},
};
use tracing::info;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, json::WebhookJson},
};

/// Reports the current date and time in the courses' timezone
///
/// An unknown or missing `course_id` is not an error here; it only affects
/// the log line.
#[axum::debug_handler]
pub async fn get_current_datetime(
    State(state): State<Arc<ApiState>>,
    WebhookJson(payload): WebhookJson<CourseRequest>,
) -> Result<Json<CurrentDateTimeResponse>, AppError> {
    let now = state.clock.now();
    let course_name = state
        .courses
        .get(&payload.course_id)
        .map(|course| course.name.as_str())
        .unwrap_or("Golf Course");

    let response = CurrentDateTimeResponse {
        current_date: now.format("%Y-%m-%d").to_string(),
        current_time: format_24h(now.time()),
        day_of_week: now.format("%A").to_string(),
        display_time: format_12h(now.time()),
        display_date: now.format("%B %d, %Y").to_string(),
        timezone: now.timezone().name().to_string(),
    };

    info!(
        "[{}] Current time: {} on {}",
        course_name, response.display_time, response.day_of_week
    );

    Ok(Json(response))
}
