pub mod admin;
pub mod booking;
pub mod course;
pub mod datetime;
pub mod tee_times;
