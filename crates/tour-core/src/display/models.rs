//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the core
//! domain models, separated from the model definitions to maintain clean
//! separation of concerns. Output is markdown, sized for the terminal
//! renderer: a day formats as a header plus its place cards, a place as a
//! card with time, name, address, and coordinates.

use std::fmt;

use super::datetime::DayDate;
use crate::models::{Day, Place};

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {} (ID: {})", self.time, self.name, self.id)?;
        writeln!(f)?;

        if !self.address.is_empty() {
            writeln!(f, "- Address: {}", self.address)?;
        }
        writeln!(
            f,
            "- Location: {:.4}, {:.4}",
            self.coordinates.latitude, self.coordinates.longitude
        )?;
        writeln!(f)?;

        Ok(())
    }
}

impl Day {
    /// Format the day header and place cards, with an optional suffix on
    /// the header (used to mark the active day in itinerary listings).
    pub(crate) fn fmt_with_marker(&self, f: &mut fmt::Formatter<'_>, marker: &str) -> fmt::Result {
        writeln!(f, "## Day {} ({}){marker}", self.number, DayDate(&self.date))?;
        writeln!(f)?;

        if self.places.is_empty() {
            writeln!(f, "No places planned for this day.")?;
        } else {
            for place in &self.places {
                write!(f, "{place}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_marker(f, "")
    }
}
