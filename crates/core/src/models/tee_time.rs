use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::clock::{format_12h, hhmm};

/// Players per slot. There is no real inventory, so every slot reports this.
pub const SLOT_CAPACITY: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(rename = "time", with = "hhmm")]
    pub time_of_day: NaiveTime,

    #[serde(rename = "display_time")]
    pub display_label: String,

    #[serde(rename = "available_slots")]
    pub capacity: u8,
}

impl TimeSlot {
    pub fn at(time_of_day: NaiveTime) -> Self {
        Self {
            time_of_day,
            display_label: format_12h(time_of_day),
            capacity: SLOT_CAPACITY,
        }
    }
}

/// Part of the day a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePreference {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Any,
}

impl TimePreference {
    /// Lenient parse of the assistant's free-form preference; unknown values mean `Any`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "morning" => Self::Morning,
            "afternoon" => Self::Afternoon,
            "evening" => Self::Evening,
            _ => Self::Any,
        }
    }

    /// Morning ends at noon, afternoon at 17:00.
    pub fn admits(self, time_of_day: NaiveTime) -> bool {
        let hour = time_of_day.hour();
        match self {
            Self::Morning => hour < 12,
            Self::Afternoon => (12..17).contains(&hour),
            Self::Evening => hour >= 17,
            Self::Any => true,
        }
    }
}
