use serde::{Deserialize, Serialize};

/// Canned conditions for demos; there is no weather feed behind this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: i32,
    pub conditions: String,
    pub wind_speed: u32,
    pub course_status: String,
    pub cart_path_only: bool,
    pub message: String,
}

impl WeatherReport {
    /// Conditions for the given hour of day (0-23) in the course timezone.
    pub fn demo(hour: u32) -> Self {
        let (temperature, conditions) = match hour {
            6..=11 => (68, "Clear"),
            12..=17 => (75, "Partly Cloudy"),
            _ => (62, "Clear"),
        };

        Self {
            temperature,
            conditions: conditions.to_string(),
            wind_speed: 8,
            course_status: "Open - Excellent Conditions".to_string(),
            cart_path_only: false,
            message: format!(
                "It's {} degrees with {} skies. Course is in great shape!",
                temperature,
                conditions.to_lowercase()
            ),
        }
    }
}
