pub mod booking;
pub mod course;
mod lenient;
pub mod tee_time;
pub mod weather;
pub mod webhook;
