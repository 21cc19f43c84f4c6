//! Data models for days and places.
//!
//! This module contains the core domain models that represent the multi-day
//! itinerary being edited. Display implementations for these models are
//! located in [`crate::display::models`] to maintain clean separation of
//! concerns between data structures and presentation logic.
//!
//! # Ownership
//!
//! The editor exclusively owns its [`Day`]s and each day exclusively owns
//! its [`Place`]s; nothing outside the editor holds a reference into this
//! tree. All mutation goes through the editor operations, which is what lets
//! the time-ordering invariant hold at every observable point.

pub mod day;
pub mod place;


// Re-export all public types at the models level
pub use day::Day;
pub use place::{Coordinates, Place};
