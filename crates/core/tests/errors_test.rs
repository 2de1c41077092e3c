use std::error::Error;
use teetalk_core::{
    errors::{TeeTimeError, TeeTimeResult},
    models::booking::RejectionReason,
};

#[test]
fn test_tee_time_error_display() {
    let not_found = TeeTimeError::NotFound("course 'pebble'".to_string());
    let validation = TeeTimeError::Validation("Invalid date".to_string());
    let rejected = TeeTimeError::Rejected(RejectionReason::InvalidPartySize);
    let configuration = TeeTimeError::Configuration(eyre::eyre!("bad hours"));
    let internal = TeeTimeError::Internal(Box::new(std::io::Error::other("Internal error")));

    assert_eq!(not_found.to_string(), "Resource not found: course 'pebble'");
    assert_eq!(validation.to_string(), "Validation error: Invalid date");
    assert_eq!(
        rejected.to_string(),
        "Booking rejected: party size must be between 1 and 4 players"
    );
    assert!(configuration.to_string().contains("Configuration error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_rejection_converts_with_question_mark() {
    fn reject() -> TeeTimeResult<()> {
        Err(RejectionReason::TimeAlreadyPassed)?
    }

    match reject() {
        Err(TeeTimeError::Rejected(reason)) => {
            assert_eq!(reason, RejectionReason::TimeAlreadyPassed)
        }
        other => panic!("Expected Rejected error, got: {:?}", other),
    }
}

#[test]
fn test_rejection_codes_are_stable() {
    assert_eq!(RejectionReason::InvalidFormat.code(), "InvalidFormat");
    assert_eq!(RejectionReason::MissingContactInfo.code(), "MissingContactInfo");
    assert_eq!(RejectionReason::InvalidPartySize.code(), "InvalidPartySize");
    assert_eq!(
        RejectionReason::OutsideOperatingHours.code(),
        "OutsideOperatingHours"
    );
    assert_eq!(RejectionReason::TimeAlreadyPassed.code(), "TimeAlreadyPassed");
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::other("IO error");
    let tee_time_error = TeeTimeError::Internal(Box::new(io_error));

    assert!(tee_time_error.source().is_some());
    assert!(tee_time_error.to_string().contains("IO error"));
}
