//! # TeeTalk API
//!
//! The API crate provides the webhook server a voice assistant calls to answer
//! golf-course intents: current time, tee-time availability, booking, course
//! info and weather.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define webhook endpoints and URL structure
//! - **Handlers**: Resolve the course, capture the current time and call into `teetalk-core`
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and course directory configuration
//!
//! The API uses Axum as the web framework. There is no database: the course
//! directory is loaded once at startup and shared read-only through [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers for each webhook intent
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use teetalk_core::{
    clock::{Clock, SystemClock},
    errors::{TeeTimeError, TeeTimeResult},
    models::course::{CourseDirectory, CourseProfile},
    slots::SlotGenerator,
    validation::BookingValidator,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Name reported by the info and health endpoints
pub const SERVICE_NAME: &str = "TeeTalk AI";

/// Shared application state that is accessible to all request handlers
///
/// Everything here is read-only after startup, so handlers never coordinate.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chrono_tz::America::Chicago;
/// use teetalk_api::{ApiState, build_router};
/// use teetalk_core::{clock::SystemClock, models::course::CourseDirectory};
///
/// let state = ApiState::new(CourseDirectory::demo(), Arc::new(SystemClock::new(Chicago)), false);
/// let app = build_router(Arc::new(state));
/// ```
pub struct ApiState {
    /// Courses keyed by webhook identifier
    pub courses: CourseDirectory,
    /// Source of `reference_now`; read once per request
    pub clock: Arc<dyn Clock>,
    pub slot_generator: SlotGenerator,
    pub booking_validator: BookingValidator,
}

impl ApiState {
    pub fn new(courses: CourseDirectory, clock: Arc<dyn Clock>, reject_past_dates: bool) -> Self {
        Self {
            courses,
            clock,
            slot_generator: SlotGenerator::new(reject_past_dates),
            booking_validator: BookingValidator::new(reject_past_dates),
        }
    }

    /// Looks up a course, signalling an unknown id before any core logic runs
    pub fn course(&self, course_id: &str) -> TeeTimeResult<&CourseProfile> {
        self.courses
            .get(course_id)
            .ok_or_else(|| TeeTimeError::NotFound(format!("course '{}'", course_id)))
    }

    /// IANA name of the operating timezone
    pub fn timezone_name(&self) -> &'static str {
        self.clock.now().timezone().name()
    }
}

/// Builds the router with every webhook, admin and health route attached
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health and service info endpoints
        .merge(routes::health::routes())
        // Voice assistant webhook intents
        .merge(routes::webhook::routes())
        // Admin listing endpoints
        .merge(routes::admin::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the webhook server with the provided configuration
///
/// This function initializes logging, loads the course directory, configures
/// routes and middleware, and serves until Ctrl-C.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, timezone and courses
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = teetalk_api::config::ApiConfig::from_env()?;
/// teetalk_api::start_server(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let courses = config.load_courses()?;
    info!(timezone = config.timezone.name(), courses = courses.len(), "TeeTalk AI webhook server");
    for (course_id, course) in courses.iter() {
        info!(
            "Configured course {} ({}), booking system: {}",
            course.name, course_id, course.booking_system
        );
    }
    if config.reject_past_dates {
        info!("Past dates are rejected for availability and bookings");
    }

    // Create shared state with dependencies
    let clock = Arc::new(SystemClock::new(config.timezone));
    let state = Arc::new(ApiState::new(courses, clock, config.reject_past_dates));

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
