use axum::{Json, extract::State};
use chrono::Timelike;
use std::sync::Arc;
use teetalk_core::models::{
    weather::WeatherReport,
    webhook::{CourseInfoResponse, CourseRequest},
};
use tracing::info;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, json::WebhookJson},
};

#[axum::debug_handler]
pub async fn get_course_info(
    State(state): State<Arc<ApiState>>,
    WebhookJson(payload): WebhookJson<CourseRequest>,
) -> Result<Json<CourseInfoResponse>, AppError> {
    let course = state.course(&payload.course_id)?;

    info!("[{}] Getting course info", course.name);

    let response = CourseInfoResponse {
        course_name: course.name.clone(),
        phone: course.phone.clone(),
        hours: course.hours,
        rates: course.rates.clone(),
        features: course.features.clone(),
        location: course.location.clone(),
    };

    Ok(Json(response))
}

/// Demo conditions for the course's current hour
#[axum::debug_handler]
pub async fn get_weather_conditions(
    State(state): State<Arc<ApiState>>,
    WebhookJson(payload): WebhookJson<CourseRequest>,
) -> Result<Json<WeatherReport>, AppError> {
    let course = state.course(&payload.course_id)?;
    let report = WeatherReport::demo(state.clock.now().hour());

    info!(
        "[{}] Weather: {}°F, {}",
        course.name, report.temperature, report.conditions
    );

    Ok(Json(report))
}
