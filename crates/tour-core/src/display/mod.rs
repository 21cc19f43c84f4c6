//! Display formatting for the itinerary.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]),
//! while wrapper types handle the contexts a bare model cannot: collections
//! with empty-state messages, short date labels for day tabs, and one-line
//! operation feedback. All formatters produce markdown so the terminal
//! renderer can show the same text rich or plain.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for [`Day`](crate::models::Day) and
//!   [`Place`](crate::models::Place)
//! - [`collections`]: the [`Itinerary`] wrapper over a list of days
//! - [`datetime`]: the [`DayDate`] short-date label
//! - [`status`]: [`OperationStatus`] success/error one-liners

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::Itinerary;
pub use datetime::DayDate;
pub use status::OperationStatus;
