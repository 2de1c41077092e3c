#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, TimeZone};
use chrono_tz::{America::Chicago, Tz};
use mockall::mock;
use serde_json::Value;
use teetalk_api::{ApiState, build_router};
use teetalk_core::{clock::Clock, models::course::CourseDirectory};
use tower::ServiceExt;

mock! {
    pub Clock {}

    impl Clock for Clock {
        fn now(&self) -> DateTime<Tz>;
    }
}

/// A moment on 2026-10-19 in Chicago
pub fn chicago(hour: u32, minute: u32) -> DateTime<Tz> {
    Chicago
        .with_ymd_and_hms(2026, 10, 19, hour, minute, 0)
        .unwrap()
}

pub struct TestContext {
    pub clock: MockClock,
    pub courses: CourseDirectory,
    pub reject_past_dates: bool,
}

impl TestContext {
    /// Demo directory with the clock frozen at `now`
    pub fn at(now: DateTime<Tz>) -> Self {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);

        Self {
            clock,
            courses: CourseDirectory::demo(),
            reject_past_dates: false,
        }
    }

    pub fn rejecting_past_dates(mut self) -> Self {
        self.reject_past_dates = true;
        self
    }

    pub fn build_state(self) -> Arc<ApiState> {
        Arc::new(ApiState::new(
            self.courses,
            Arc::new(self.clock),
            self.reject_past_dates,
        ))
    }

    pub fn router(self) -> Router {
        build_router(self.build_state())
    }
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST with an arbitrary body and content type
pub fn post_raw(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends one request through the router and decodes the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
