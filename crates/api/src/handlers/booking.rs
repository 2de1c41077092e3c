use axum::{Json, extract::State};
use std::sync::Arc;
use teetalk_core::{
    clock::format_24h,
    models::{booking::BookingRequest, webhook::BookTeeTimeResponse},
};
use tracing::{info, warn};

use crate::{
    ApiState,
    middleware::{error_handling::AppError, json::WebhookJson},
};

/// Validates and confirms a tee-time booking
///
/// Nothing is reserved: an accepted booking is echoed back with a confirmation
/// number. Rejections become an [`AppError`] carrying the reason code.
#[axum::debug_handler]
pub async fn book_tee_time(
    State(state): State<Arc<ApiState>>,
    WebhookJson(payload): WebhookJson<BookingRequest>,
) -> Result<Json<BookTeeTimeResponse>, AppError> {
    let course = state.course(&payload.course_id)?;
    let now = state.clock.now();

    info!(
        "[{}] Booking: {}, {}p on {} at {}",
        course.name, payload.player_name, payload.party_size, payload.date, payload.time_of_day
    );

    let result = state
        .booking_validator
        .validate(&payload, &course.hours, &now);
    if let Some(reason) = result.rejection() {
        warn!("[{}] Booking rejected: {}", course.name, reason.code());
    }
    let booking = result.into_result()?;

    let response = BookTeeTimeResponse {
        success: true,
        confirmation_number: booking.confirmation_code,
        date: booking.date.format("%Y-%m-%d").to_string(),
        time: format_24h(booking.time_of_day),
        display_time: booking.display_label,
        message: format!("Tee time booked for {}", booking.player_name),
        player_name: booking.player_name,
        phone_number: booking.phone_number,
        number_of_players: booking.party_size,
        course_name: course.name.clone(),
    };

    Ok(Json(response))
}
