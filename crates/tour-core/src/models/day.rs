//! Day model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Place;

/// Represents one calendar day within the itinerary.
///
/// Days are created only by appending to the itinerary and are never removed
/// or reordered, so `number` stays contiguous and 1-based for the lifetime
/// of the editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    /// 1-based sequence number, assigned by append order
    pub number: u32,

    /// Calendar date, derived from the editor start date plus the day offset
    pub date: Date,

    /// Places planned for this day, kept sorted ascending by time
    pub places: Vec<Place>,
}

impl Day {
    /// Looks up a place in this day by identity.
    pub fn place(&self, id: u64) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Restores the time ordering after an insert or edit.
    ///
    /// The sort is stable, so places sharing the same time keep their
    /// relative insertion order.
    pub(crate) fn sort_places(&mut self) {
        self.places.sort_by(|a, b| a.time.cmp(&b.time));
    }
}
