//! # Booking validation
//!
//! A booking request passes through a fixed sequence of checks and the first
//! failure decides the rejection reason:
//!
//! 1. Date and time are well-formed (`YYYY-MM-DD`, `HH:MM`)
//! 2. Player name and phone number are present
//! 3. Party size is between 1 and [`SLOT_CAPACITY`]
//! 4. Time lies in `[open, close)`
//! 5. For today, time is not before the next slot boundary
//!
//! Anything that survives is accepted and echoed back with a confirmation code.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::{
    clock::{format_12h, parse_time, round_up_to_slot},
    models::{
        booking::{Booking, BookingRequest, BookingResult, RejectionReason},
        course::CourseConfig,
        tee_time::SLOT_CAPACITY,
    },
};

/// Used when the course id has fewer than two usable characters.
const FALLBACK_PREFIX: &str = "TT";

#[derive(Debug, Clone, Copy, Default)]
pub struct BookingValidator {
    reject_past_dates: bool,
}

impl BookingValidator {
    /// With `reject_past_dates` set, bookings dated before today are
    /// rejected as [`RejectionReason::TimeAlreadyPassed`].
    pub fn new(reject_past_dates: bool) -> Self {
        Self { reject_past_dates }
    }

    pub fn validate(
        &self,
        request: &BookingRequest,
        course: &CourseConfig,
        reference_now: &DateTime<Tz>,
    ) -> BookingResult {
        match self.check(request, course, reference_now) {
            Ok(booking) => BookingResult::Accepted(booking),
            Err(reason) => reason.into(),
        }
    }

    fn check(
        &self,
        request: &BookingRequest,
        course: &CourseConfig,
        reference_now: &DateTime<Tz>,
    ) -> Result<Booking, RejectionReason> {
        let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d")
            .map_err(|_| RejectionReason::InvalidFormat)?;
        let time_of_day =
            parse_time(&request.time_of_day).ok_or(RejectionReason::InvalidFormat)?;

        let player_name = request.player_name.trim();
        let phone_number = request.phone_number.trim();
        if player_name.is_empty() || phone_number.is_empty() {
            return Err(RejectionReason::MissingContactInfo);
        }

        let party_size = u8::try_from(request.party_size)
            .ok()
            .filter(|size| (1..=SLOT_CAPACITY).contains(size))
            .ok_or(RejectionReason::InvalidPartySize)?;

        if time_of_day < course.open_time || time_of_day >= course.close_time {
            return Err(RejectionReason::OutsideOperatingHours);
        }

        let today = reference_now.date_naive();
        if date == today {
            // No boundary left today means every time has passed.
            let earliest = round_up_to_slot(reference_now.time(), course.slot_interval_minutes)
                .ok_or(RejectionReason::TimeAlreadyPassed)?;
            if time_of_day < earliest {
                return Err(RejectionReason::TimeAlreadyPassed);
            }
        } else if self.reject_past_dates && date < today {
            return Err(RejectionReason::TimeAlreadyPassed);
        }

        Ok(Booking {
            confirmation_code: confirmation_code(&request.course_id, reference_now),
            course_id: request.course_id.trim().to_string(),
            date,
            time_of_day,
            display_label: format_12h(time_of_day),
            player_name: player_name.to_string(),
            phone_number: phone_number.to_string(),
            party_size,
        })
    }
}

/// Builds `XX-yymmddHHMM`: the first two alphanumeric characters of the
/// course id, upper-cased, then the minute the booking was made.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::America::Chicago;
/// use teetalk_core::validation::confirmation_code;
///
/// let booked_at = Chicago.with_ymd_and_hms(2026, 10, 19, 11, 21, 0).unwrap();
/// assert_eq!(confirmation_code("cedar-ridge", &booked_at), "CE-2610191121");
/// ```
pub fn confirmation_code(course_id: &str, booked_at: &DateTime<Tz>) -> String {
    let prefix: String = course_id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(2)
        .collect::<String>()
        .to_ascii_uppercase();
    let prefix = if prefix.len() == 2 { prefix.as_str() } else { FALLBACK_PREFIX };

    format!("{}-{}", prefix, booked_at.format("%y%m%d%H%M"))
}
