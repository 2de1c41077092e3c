//! # TeeTalk Core
//!
//! Domain types and the two pure components behind the webhook:
//!
//! - [`slots::SlotGenerator`] enumerates bookable tee times for a date
//! - [`validation::BookingValidator`] accepts or rejects a booking request
//!
//! Neither component reads the clock or any shared state. Callers capture
//! `reference_now` once per request through a [`clock::Clock`] and pass it in.

pub mod clock;
pub mod errors;
pub mod models;
pub mod slots;
pub mod validation;
