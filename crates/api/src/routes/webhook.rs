use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

/// Intent endpoints, in the order the assistant's tool list declares them
pub const WEBHOOK_PATHS: [&str; 5] = [
    "/get_current_datetime",
    "/check_tee_times",
    "/book_tee_time",
    "/get_course_info",
    "/get_weather_conditions",
];

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/get_current_datetime",
            post(handlers::datetime::get_current_datetime),
        )
        .route("/check_tee_times", post(handlers::tee_times::check_tee_times))
        .route("/book_tee_time", post(handlers::booking::book_tee_time))
        .route("/get_course_info", post(handlers::course::get_course_info))
        .route(
            "/get_weather_conditions",
            post(handlers::course::get_weather_conditions),
        )
}
