//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around [`Date`] that renders the short month/day label used on
/// day tabs.
///
/// The surrounding views label days as "Day 2 (3/4)" rather than with a full
/// ISO date, so this formats only the month and day without zero padding.
pub struct DayDate<'a>(pub &'a Date);

impl fmt::Display for DayDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.month(), self.0.day())
    }
}
