//! # Tee-time slot generation
//!
//! Slots are enumerated from a start time to the course's last tee time in
//! fixed steps. For "today" the start is the current time rounded up to the
//! next slot boundary, so already-passed slots never appear.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::{
    clock::{minutes_of_day, round_up_to_slot, time_from_minutes},
    models::{course::CourseConfig, tee_time::TimeSlot},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SlotGenerator {
    reject_past_dates: bool,
}

impl SlotGenerator {
    /// With `reject_past_dates` set, dates before today produce no slots;
    /// otherwise they produce the full day like any future date.
    pub fn new(reject_past_dates: bool) -> Self {
        Self { reject_past_dates }
    }

    pub fn rejects_past_dates(&self) -> bool {
        self.reject_past_dates
    }

    /// Bookable slots for `course` on `query_date`, in increasing order.
    ///
    /// `reference_now` must already be in the course timezone; its calendar
    /// date decides whether `query_date` is today.
    pub fn generate(
        &self,
        course: &CourseConfig,
        query_date: NaiveDate,
        reference_now: &DateTime<Tz>,
    ) -> Vec<TimeSlot> {
        let today = reference_now.date_naive();
        if self.reject_past_dates && query_date < today {
            return Vec::new();
        }

        let start_time = if query_date == today {
            match round_up_to_slot(reference_now.time(), course.slot_interval_minutes) {
                Some(next_slot) => next_slot.max(course.open_time),
                None => return Vec::new(),
            }
        } else {
            course.open_time
        };

        if start_time > course.last_tee_time {
            return Vec::new();
        }

        let interval = course.slot_interval_minutes.max(1) as usize;
        (minutes_of_day(start_time)..=minutes_of_day(course.last_tee_time))
            .step_by(interval)
            .filter_map(time_from_minutes)
            .map(TimeSlot::at)
            .collect()
    }
}
