//! The itinerary editor state machine.
//!
//! This module provides the main [`Editor`] interface for building a
//! multi-day travel itinerary. The editor holds the ordered list of days,
//! the currently active day, and the transient draft for an in-progress add
//! or edit, and it is the only place where any of that state is mutated.
//!
//! All operations run to completion synchronously on the caller's thread;
//! nothing here suspends or performs I/O. Every state transition is atomic
//! with respect to the event that triggered it: an operation either applies
//! fully or fails with an [`EditorError`](crate::error::EditorError) and
//! leaves the editor exactly as it was.
//!
//! # Usage
//!
//! ```rust
//! use tour_core::{
//!     editor::EditorBuilder,
//!     params::MapSelection,
//!     selection::StaticSelection,
//! };
//!
//! # fn example() -> tour_core::Result<()> {
//! let mut editor = EditorBuilder::new().build();
//! editor.add_day();
//!
//! let map = StaticSelection::of(MapSelection {
//!     name: "N Seoul Tower".to_string(),
//!     address: "105 Namsangongwon-gil, Yongsan-gu, Seoul".to_string(),
//!     latitude: 37.5512,
//!     longitude: 126.9882,
//! });
//!
//! editor.begin_add_place(&map)?;
//! if let Some(draft) = editor.draft_mut() {
//!     draft.time = "10:30".to_string();
//! }
//! let id = editor.confirm_place()?;
//! assert!(editor.active_day().and_then(|d| d.place(id)).is_some());
//! # Ok(())
//! # }
//! ```

use jiff::{civil::Date, Span, Zoned};

use crate::{
    error::{EditorError, Result},
    models::{Day, Place},
    params::{MapSelection, PlaceDraft},
    selection::SelectionProvider,
};

// Module declarations
pub mod dialog;


use dialog::{DialogState, DraftMode};

/// Builder for creating and configuring Editor instances.
#[derive(Debug, Clone, Default)]
pub struct EditorBuilder {
    start_date: Option<Date>,
}

impl EditorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calendar date of the first day.
    ///
    /// If not specified, the first day falls on the date the editor is
    /// built, in the system time zone.
    pub fn with_start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Builds the configured editor instance with an empty itinerary.
    pub fn build(self) -> Editor {
        let start_date = self.start_date.unwrap_or_else(|| Zoned::now().date());
        Editor {
            days: Vec::new(),
            active: None,
            dialog: DialogState::Closed,
            start_date,
            next_place_id: 1,
        }
    }
}

/// Main editor interface for building the itinerary.
#[derive(Debug, Clone)]
pub struct Editor {
    /// Ordered days of the itinerary; append-only
    days: Vec<Day>,
    /// Index of the active day; `None` only while the itinerary is empty
    active: Option<usize>,
    /// State of the add/edit place form
    dialog: DialogState,
    /// Calendar date of day 1
    start_date: Date,
    /// Monotonic identity source for places
    next_place_id: u64,
}

impl Editor {
    /// Appends a new day to the itinerary and makes it the active day.
    ///
    /// Day numbers are 1-based and contiguous; the day's date is the start
    /// date plus the day's offset. Always succeeds.
    pub fn add_day(&mut self) -> &Day {
        let offset = self.days.len();
        let date = self.start_date.saturating_add(Span::new().days(offset as i64));
        self.days.push(Day {
            number: offset as u32 + 1,
            date,
            places: Vec::new(),
        });
        self.active = Some(self.days.len() - 1);
        &self.days[self.days.len() - 1]
    }

    /// Changes the active day.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::DayOutOfRange`] when `index` is not within
    /// the current bounds of the itinerary.
    pub fn select_day(&mut self, index: usize) -> Result<()> {
        if index >= self.days.len() {
            return Err(EditorError::DayOutOfRange {
                index,
                len: self.days.len(),
            });
        }
        self.active = Some(index);
        Ok(())
    }

    /// Opens the add-place form, pre-filled from the current map selection.
    ///
    /// This is a pure staging step; no place is created until
    /// [`confirm_place`](Self::confirm_place). The time field starts empty
    /// for the user to complete.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoSelection`] when the provider reports no
    /// current selection, and [`EditorError::NoItineraryYet`] when the
    /// itinerary has no days to add the place to. Neither auto-creates a
    /// day; the caller must add one first.
    pub fn begin_add_place(&mut self, provider: &dyn SelectionProvider) -> Result<()> {
        let selection = provider
            .current_selection()
            .ok_or(EditorError::NoSelection)?;
        if self.days.is_empty() {
            return Err(EditorError::NoItineraryYet);
        }

        self.dialog = DialogState::Open {
            mode: DraftMode::Add,
            draft: PlaceDraft::from_selection(&selection),
        };
        Ok(())
    }

    /// Opens the edit-place form for a place in the active day.
    ///
    /// Loads the place's current fields into the draft; the place itself is
    /// not touched until the edit is confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::PlaceNotFound`] when no place in the active
    /// day has the given identity.
    pub fn begin_edit_place(&mut self, id: u64) -> Result<()> {
        let place = self
            .active_day()
            .and_then(|day| day.place(id))
            .ok_or(EditorError::PlaceNotFound { id })?;

        self.dialog = DialogState::Open {
            mode: DraftMode::Edit { target: id },
            draft: PlaceDraft {
                time: place.time.clone(),
                name: place.name.clone(),
                address: place.address.clone(),
                coordinates: Some(place.coordinates),
            },
        };
        Ok(())
    }

    /// Replaces the open draft's location fields from a newer map selection.
    ///
    /// Only meaningful while editing, when the user re-picks the spot on
    /// the map; the time field is left as entered.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoOpenDraft`] when no form is open.
    pub fn retarget_draft(&mut self, selection: &MapSelection) -> Result<()> {
        let draft = self.dialog.draft_mut().ok_or(EditorError::NoOpenDraft)?;
        draft.apply_selection(selection);
        Ok(())
    }

    /// Confirms the open add or edit form.
    ///
    /// On success the place lands in the active day (with a fresh identity
    /// for an add, the original identity for an edit), the day's places are
    /// re-sorted by time, and the form closes. Places sharing a time keep
    /// their relative insertion order.
    ///
    /// Returns the identity of the affected place.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Validation`] listing the missing fields when
    /// the draft has an empty time or name or no coordinates; the form
    /// stays open with the draft intact and no place is touched. Returns
    /// [`EditorError::NoOpenDraft`] when no form is open, and
    /// [`EditorError::PlaceNotFound`] when the target of an edit has been
    /// deleted since the form opened.
    pub fn confirm_place(&mut self) -> Result<u64> {
        let (mode, draft) = match &self.dialog {
            DialogState::Open { mode, draft } => (*mode, draft.clone()),
            DialogState::Closed => return Err(EditorError::NoOpenDraft),
        };
        let coordinates = draft.validate()?;

        let day = match self.active.and_then(|i| self.days.get_mut(i)) {
            Some(day) => day,
            // Forms only open once a day exists, so this is unreachable in
            // practice.
            None => return Err(EditorError::NoItineraryYet),
        };

        let id = match mode {
            DraftMode::Add => {
                let id = self.next_place_id;
                self.next_place_id += 1;
                day.places.push(Place {
                    id,
                    time: draft.time,
                    name: draft.name,
                    address: draft.address,
                    coordinates,
                });
                id
            }
            DraftMode::Edit { target } => {
                let place = day
                    .places
                    .iter_mut()
                    .find(|p| p.id == target)
                    .ok_or(EditorError::PlaceNotFound { id: target })?;
                place.time = draft.time;
                place.name = draft.name;
                place.address = draft.address;
                place.coordinates = coordinates;
                target
            }
        };

        day.sort_places();
        self.dialog = DialogState::Closed;
        Ok(id)
    }

    /// Closes the open form without confirming, discarding the draft.
    ///
    /// No partial mutation was ever applied, so there is nothing to undo.
    /// Harmless when no form is open.
    pub fn cancel_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// Removes the place with the given identity from the active day.
    ///
    /// Idempotent: an unknown identity is a no-op, not an error, so a
    /// double invocation (rapid repeated clicks) cannot corrupt state.
    /// Returns whether a place was actually removed.
    pub fn delete_place(&mut self, id: u64) -> bool {
        let Some(day) = self.active.and_then(|i| self.days.get_mut(i)) else {
            return false;
        };
        let before = day.places.len();
        day.places.retain(|p| p.id != id);
        day.places.len() != before
    }

    /// All days of the itinerary, in order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Index of the active day; `None` only while the itinerary is empty.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The active day, if any day exists.
    pub fn active_day(&self) -> Option<&Day> {
        self.active.and_then(|i| self.days.get(i))
    }

    /// State of the add/edit form, for rendering.
    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// The open form's draft, if a form is open.
    pub fn draft(&self) -> Option<&PlaceDraft> {
        self.dialog.draft()
    }

    /// Mutable access to the open form's draft, for field entry.
    pub fn draft_mut(&mut self) -> Option<&mut PlaceDraft> {
        self.dialog.draft_mut()
    }

    /// Calendar date of day 1.
    pub fn start_date(&self) -> Date {
        self.start_date
    }
}
