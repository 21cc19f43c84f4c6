//! Dialog state for the add/edit place form.

use crate::params::PlaceDraft;

/// Whether the open form is adding a new place or editing an existing one.
///
/// Edit mode carries the identity of the place being edited, so an open
/// edit form with no target cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// Adding a new place staged from a map selection
    Add,
    /// Editing the place with the given identity
    Edit { target: u64 },
}

/// The add/edit form as a single tagged state.
///
/// The only transitions are `Closed -> Open` via the begin operations and
/// `Open -> Closed` via a successful confirm or an explicit cancel. A failed
/// validation leaves the form open with the draft intact so the user can
/// correct and resubmit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    /// No form is open
    #[default]
    Closed,
    /// A form is open with in-progress draft data
    Open { mode: DraftMode, draft: PlaceDraft },
}

impl DialogState {
    /// Whether a form is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The draft of the open form, if any.
    pub fn draft(&self) -> Option<&PlaceDraft> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    /// Mutable access to the draft of the open form, if any.
    pub fn draft_mut(&mut self) -> Option<&mut PlaceDraft> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    /// The mode of the open form, if any.
    pub fn mode(&self) -> Option<DraftMode> {
        match self {
            Self::Open { mode, .. } => Some(*mode),
            Self::Closed => None,
        }
    }
}
