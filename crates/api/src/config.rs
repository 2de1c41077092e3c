//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the TeeTalk webhook
//! server. It retrieves configuration values from environment variables and provides
//! defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT` or `PORT`: The port to listen on (default: 5000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `COURSE_TIMEZONE`: IANA timezone shared by every course (default: "America/Chicago")
//! - `COURSES_FILE`: Course directory file (TOML, JSON or YAML); the demo course is used when unset
//! - `REJECT_PAST_DATES`: Refuse availability and bookings for dates before today (default: false)

use std::{
    env,
    path::{Path, PathBuf},
};

use chrono_tz::Tz;
use eyre::{Result, WrapErr, eyre};
use teetalk_core::models::course::CourseDirectory;
use tracing::Level;

pub const DEFAULT_TIMEZONE: &str = "America/Chicago";

/// Configuration for the TeeTalk webhook server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use teetalk_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Operating timezone for every course
    pub timezone: Tz,

    /// Optional course directory file
    pub courses_file: Option<PathBuf>,

    /// Past-date policy for availability and bookings
    pub reject_past_dates: bool,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The port value cannot be parsed as a u16
    /// - `COURSE_TIMEZONE` is not a known IANA timezone
    /// - `REJECT_PAST_DATES` is not a boolean
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    ///
    /// [`ApiConfig::from_env`] delegates here; tests pass a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        // Course settings
        let timezone_name =
            lookup("COURSE_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = timezone_name
            .trim()
            .parse::<Tz>()
            .map_err(|e| eyre!("Invalid COURSE_TIMEZONE '{}': {}", timezone_name, e))?;

        let courses_file = lookup("COURSES_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let reject_past_dates = match lookup("REJECT_PAST_DATES") {
            Some(value) => parse_flag(&value)
                .ok_or_else(|| eyre!("Invalid REJECT_PAST_DATES value '{}'", value))?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            timezone,
            courses_file,
            reject_past_dates,
        })
    }

    /// Returns the server address as a string (e.g., "0.0.0.0:5000")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loads the course directory and checks every course's hours
    ///
    /// Falls back to [`CourseDirectory::demo`] when no file is configured.
    pub fn load_courses(&self) -> Result<CourseDirectory> {
        let directory = match &self.courses_file {
            Some(path) => load_course_file(path)?,
            None => CourseDirectory::demo(),
        };

        directory
            .check()
            .wrap_err("Invalid course directory")?;

        Ok(directory)
    }
}

/// Reads a course directory with a top-level `courses` table keyed by course id
fn load_course_file(path: &Path) -> Result<CourseDirectory> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .wrap_err_with(|| format!("Failed to read course file {}", path.display()))?;

    settings
        .try_deserialize()
        .wrap_err_with(|| format!("Invalid course definitions in {}", path.display()))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
