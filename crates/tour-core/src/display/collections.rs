//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::Day;

/// Newtype wrapper for displaying the full list of days.
///
/// Borrows the editor's day slice and formats every day in order, marking
/// the active one on its header. Handles the empty itinerary gracefully.
///
/// # Examples
///
/// ```rust
/// use tour_core::{display::Itinerary, editor::EditorBuilder};
///
/// let mut editor = EditorBuilder::new().build();
/// editor.add_day();
///
/// let output = format!("{}", Itinerary::new(editor.days(), editor.active_index()));
/// assert!(output.contains("Day 1"));
/// ```
pub struct Itinerary<'a> {
    days: &'a [Day],
    active: Option<usize>,
}

impl<'a> Itinerary<'a> {
    /// Wraps a day slice with the active index for display.
    pub fn new(days: &'a [Day], active: Option<usize>) -> Self {
        Self { days, active }
    }

    /// Check if the itinerary is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Get the number of days in the itinerary.
    pub fn len(&self) -> usize {
        self.days.len()
    }
}

impl fmt::Display for Itinerary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days.is_empty() {
            return writeln!(f, "No days planned yet.");
        }

        for (index, day) in self.days.iter().enumerate() {
            let marker = if self.active == Some(index) {
                " **(active)**"
            } else {
                ""
            };
            day.fmt_with_marker(f, marker)?;
        }
        Ok(())
    }
}
