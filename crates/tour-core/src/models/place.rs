//! Place model definition and related functionality.

use serde::{Deserialize, Serialize};

/// Geographic coordinates of a place.
///
/// Coordinates only ever come from a map selection; they are never typed in
/// by hand and never change once a place is created, except by picking a new
/// location on the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Represents a single stop within a day of the itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    /// Unique identifier for the place, stable across edits
    pub id: u64,

    /// Time of day in 24-hour HH:MM form
    pub time: String,

    /// Display name of the place
    pub name: String,

    /// Free-text address
    pub address: String,

    /// Map coordinates, carried over from the map selection
    pub coordinates: Coordinates,
}
