//! Parameter structures for editor operations.
//!
//! This module contains the structures that cross the editor boundary: the
//! map selection handed in by the selection provider and the draft form data
//! for an in-progress add or edit. They carry serde derives but no framework
//! dependencies, so any interface layer (CLI, a future GUI shell) can reuse
//! them without pulling in its own stack.

use serde::{Deserialize, Serialize};

use crate::{
    error::{EditorError, Result},
    models::Coordinates,
};

/// A place chosen on the map, as reported by the selection provider.
///
/// This is the sole source of coordinates in the system; the editor never
/// accepts hand-typed latitude or longitude.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapSelection {
    /// Display name of the selected place
    pub name: String,
    /// Address of the selected place
    pub address: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl MapSelection {
    /// Coordinates of the selection as a model value.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// In-progress form data for adding or editing a place.
///
/// A draft starts from a map selection (add) or an existing place (edit) and
/// is filled in by the user before being confirmed. Nothing in the itinerary
/// changes until the draft passes validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaceDraft {
    /// Time of day in 24-hour HH:MM form; entered by the user
    pub time: String,
    /// Display name, pre-filled from the selection
    pub name: String,
    /// Free-text address, pre-filled from the selection
    pub address: String,
    /// Coordinates carried over from a map selection, never typed manually
    pub coordinates: Option<Coordinates>,
}

impl PlaceDraft {
    /// Creates a draft pre-filled from a map selection, with an empty time
    /// field for the user to complete.
    pub fn from_selection(selection: &MapSelection) -> Self {
        Self {
            time: String::new(),
            name: selection.name.clone(),
            address: selection.address.clone(),
            coordinates: Some(selection.coordinates()),
        }
    }

    /// Overwrites the location fields from a newer map selection.
    ///
    /// Used while editing, when the user picks a different spot on the map
    /// for an existing entry. The time field is left as entered.
    pub fn apply_selection(&mut self, selection: &MapSelection) {
        self.name = selection.name.clone();
        self.address = selection.address.clone();
        self.coordinates = Some(selection.coordinates());
    }

    /// Validates the draft and returns its coordinates on success.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Validation`] listing every missing field when
    /// `time` or `name` is empty or the coordinates are absent.
    pub fn validate(&self) -> Result<Coordinates> {
        let mut missing = Vec::new();
        if self.time.trim().is_empty() {
            missing.push("time");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        match self.coordinates {
            Some(coords) if missing.is_empty() => Ok(coords),
            Some(_) => Err(EditorError::validation(missing)),
            None => {
                missing.push("coordinates");
                Err(EditorError::validation(missing))
            }
        }
    }
}
