use std::collections::BTreeMap;

use chrono::{NaiveTime, Timelike};
use eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    clock::{hhmm, minutes_of_day},
    errors::{TeeTimeError, TeeTimeResult},
};

/// Operating hours and slot spacing for a single course.
///
/// Slot generation and booking validation assume a config that passed
/// [`CourseConfig::check`]; the directory loader enforces it at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseConfig {
    #[serde(rename = "open", with = "hhmm")]
    pub open_time: NaiveTime,

    #[serde(rename = "close", with = "hhmm")]
    pub close_time: NaiveTime,

    #[serde(with = "hhmm")]
    pub last_tee_time: NaiveTime,

    pub slot_interval_minutes: u32,
}

impl CourseConfig {
    pub fn new(
        open_time: NaiveTime,
        close_time: NaiveTime,
        last_tee_time: NaiveTime,
        slot_interval_minutes: u32,
    ) -> Self {
        Self {
            open_time,
            close_time,
            last_tee_time,
            slot_interval_minutes,
        }
    }

    /// Verifies the hours are internally consistent.
    pub fn check(&self) -> TeeTimeResult<()> {
        match self.inconsistency() {
            Some(problem) => Err(TeeTimeError::Configuration(eyre!(problem))),
            None => Ok(()),
        }
    }

    fn inconsistency(&self) -> Option<String> {
        let interval = self.slot_interval_minutes;
        if interval == 0 || 60 % interval != 0 {
            return Some(format!(
                "slot interval {} minutes must be positive and divide 60",
                interval
            ));
        }
        if self.open_time >= self.close_time {
            return Some(format!(
                "open time {} must be before close time {}",
                self.open_time, self.close_time
            ));
        }
        if self.last_tee_time < self.open_time || self.last_tee_time > self.close_time {
            return Some(format!(
                "last tee time {} must lie between open {} and close {}",
                self.last_tee_time, self.open_time, self.close_time
            ));
        }
        if self.open_time.second() != 0 || minutes_of_day(self.open_time) % interval != 0 {
            return Some(format!(
                "open time {} is not on a {}-minute slot boundary",
                self.open_time, interval
            ));
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Published green fees, already formatted for speech (e.g. "$42").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rates {
    pub weekday_18: String,
    pub weekend_18: String,
    pub weekday_9: String,
    pub weekend_9: String,
}

/// Everything the webhook knows about a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseProfile {
    pub name: String,
    pub phone: String,
    #[serde(default = "default_booking_system")]
    pub booking_system: String,
    pub location: Location,
    pub hours: CourseConfig,
    pub rates: Rates,
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_booking_system() -> String {
    "call_for_details".to_string()
}

/// Courses keyed by their webhook identifier (e.g. `cedar-ridge`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDirectory {
    #[serde(default)]
    courses: BTreeMap<String, CourseProfile>,
}

impl CourseDirectory {
    pub fn new(courses: BTreeMap<String, CourseProfile>) -> Self {
        Self { courses }
    }

    /// The single demo course shipped with the service.
    pub fn demo() -> Self {
        let at = |hour, minute| NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();

        let cedar_ridge = CourseProfile {
            name: "Cedar Ridge Golf Club".to_string(),
            phone: "+13193641111".to_string(),
            booking_system: default_booking_system(),
            location: Location {
                city: "Cedar Rapids".to_string(),
                state: "IA".to_string(),
                zip: "52402".to_string(),
            },
            hours: CourseConfig::new(at(6, 0), at(20, 0), at(16, 0), 10),
            rates: Rates {
                weekday_18: "$42".to_string(),
                weekend_18: "$52".to_string(),
                weekday_9: "$24".to_string(),
                weekend_9: "$32".to_string(),
            },
            features: vec![
                "18-hole championship course".to_string(),
                "Full driving range".to_string(),
                "Pro shop".to_string(),
                "Restaurant and bar".to_string(),
                "Golf lessons available".to_string(),
            ],
        };

        let mut courses = BTreeMap::new();
        courses.insert("cedar-ridge".to_string(), cedar_ridge);
        Self { courses }
    }

    pub fn get(&self, course_id: &str) -> Option<&CourseProfile> {
        self.courses.get(course_id.trim())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CourseProfile)> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Runs [`CourseConfig::check`] on every course, naming the first offender.
    pub fn check(&self) -> TeeTimeResult<()> {
        for (course_id, profile) in &self.courses {
            if let Some(problem) = profile.hours.inconsistency() {
                return Err(TeeTimeError::Configuration(eyre!(
                    "course '{}': {}",
                    course_id,
                    problem
                )));
            }
        }
        Ok(())
    }
}
