use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lenient;
use crate::clock::hhmm;

/// A booking exactly as the caller sent it. Every field is kept raw, and `null`
/// or oddly typed values still deserialize, so the validator can classify them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub course_id: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,

    #[serde(default, rename = "time", deserialize_with = "lenient::text")]
    pub time_of_day: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub player_name: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub phone_number: String,

    #[serde(
        default = "default_party_size",
        rename = "number_of_players",
        deserialize_with = "lenient::party_size"
    )]
    pub party_size: i64,
}

fn default_party_size() -> i64 {
    1
}

/// Why a booking was turned down, in the order the checks run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    #[error("date must be YYYY-MM-DD and time must be HH:MM on a 24-hour clock")]
    InvalidFormat,

    #[error("player name and phone number are required")]
    MissingContactInfo,

    #[error("party size must be between 1 and 4 players")]
    InvalidPartySize,

    #[error("requested time is outside the course's operating hours")]
    OutsideOperatingHours,

    #[error("requested tee time has already passed")]
    TimeAlreadyPassed,
}

impl RejectionReason {
    /// Stable identifier for transport-level error signaling.
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidFormat => "InvalidFormat",
            Self::MissingContactInfo => "MissingContactInfo",
            Self::InvalidPartySize => "InvalidPartySize",
            Self::OutsideOperatingHours => "OutsideOperatingHours",
            Self::TimeAlreadyPassed => "TimeAlreadyPassed",
        }
    }
}

/// An accepted booking. Nothing is stored; this is only echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub confirmation_code: String,
    pub course_id: String,
    pub date: NaiveDate,
    #[serde(rename = "time", with = "hhmm")]
    pub time_of_day: NaiveTime,
    #[serde(rename = "display_time")]
    pub display_label: String,
    pub player_name: String,
    pub phone_number: String,
    pub party_size: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum BookingResult {
    Accepted(Booking),
    Rejected { reason: RejectionReason },
}

impl BookingResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }

    /// Converts into a `Result`, so `?` can lift a rejection into [`crate::errors::TeeTimeError`].
    pub fn into_result(self) -> Result<Booking, RejectionReason> {
        match self {
            Self::Accepted(booking) => Ok(booking),
            Self::Rejected { reason } => Err(reason),
        }
    }
}

impl From<RejectionReason> for BookingResult {
    fn from(reason: RejectionReason) -> Self {
        Self::Rejected { reason }
    }
}
