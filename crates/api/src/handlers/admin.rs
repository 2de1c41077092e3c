use axum::{Json, extract::State};
use std::sync::Arc;
use teetalk_core::models::webhook::{CourseListResponse, CourseSummary};

use crate::ApiState;

/// Lists every configured course, in identifier order
pub async fn list_courses(State(state): State<Arc<ApiState>>) -> Json<CourseListResponse> {
    let courses = state
        .courses
        .iter()
        .map(|(course_id, course)| CourseSummary {
            id: course_id.clone(),
            name: course.name.clone(),
            phone: course.phone.clone(),
            booking_system: course.booking_system.clone(),
        })
        .collect();

    Json(CourseListResponse { courses })
}
