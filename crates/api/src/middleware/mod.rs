pub mod error_handling;
pub mod json;
