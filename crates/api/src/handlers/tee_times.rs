//! # Tee-Time Availability Handler
//!
//! Answers "what times are open?" for a course. The handler:
//!
//! 1. Resolves the course and captures the current time once
//! 2. Parses the requested date, defaulting to today when none is given
//! 3. Generates slots with the shared [`SlotGenerator`](teetalk_core::slots::SlotGenerator)
//! 4. Narrows them by time of day and party size
//! 5. Returns at most [`MAX_OFFERED_SLOTS`] slots plus a sentence the assistant can read out

use axum::{Json, extract::State};
use chrono::NaiveDate;
use std::sync::Arc;
use teetalk_core::{
    errors::TeeTimeError,
    models::{
        tee_time::{TimePreference, TimeSlot},
        webhook::{CheckTeeTimesRequest, CheckTeeTimesResponse},
    },
};
use tracing::info;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, json::WebhookJson},
};

/// Slots offered per answer; more than this is too long to read aloud.
pub const MAX_OFFERED_SLOTS: usize = 5;

#[axum::debug_handler]
pub async fn check_tee_times(
    State(state): State<Arc<ApiState>>,
    WebhookJson(payload): WebhookJson<CheckTeeTimesRequest>,
) -> Result<Json<CheckTeeTimesResponse>, AppError> {
    let course = state.course(&payload.course_id)?;
    let now = state.clock.now();

    let date = match payload.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            TeeTimeError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw))
        })?,
        _ => now.date_naive(),
    };

    let preference = payload
        .time_preference
        .as_deref()
        .map(TimePreference::parse)
        .unwrap_or_default();
    let players = payload.number_of_players.unwrap_or(1);

    info!("[{}] Checking tee times for {}", course.name, date);

    let available_times: Vec<TimeSlot> = state
        .slot_generator
        .generate(&course.hours, date, &now)
        .into_iter()
        .filter(|slot| preference.admits(slot.time_of_day))
        .filter(|slot| i64::from(slot.capacity) >= players)
        .take(MAX_OFFERED_SLOTS)
        .collect();

    let response = CheckTeeTimesResponse {
        date: date.format("%Y-%m-%d").to_string(),
        message: availability_message(&available_times),
        available_times,
    };

    Ok(Json(response))
}

/// Sentence summarising the first one or two slots
pub fn availability_message(slots: &[TimeSlot]) -> String {
    match slots {
        [] => "No tee times available for that date".to_string(),
        [only] => format!("We have {} available", only.display_label),
        [first, second, ..] => format!(
            "Next available times are {} and {}",
            first.display_label, second.display_label
        ),
    }
}
