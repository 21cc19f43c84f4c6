//! Map-selection capability used by the editor.
//!
//! The editor never talks to a map widget directly. It asks an injected
//! [`SelectionProvider`] for the currently chosen place, which keeps the
//! core testable without any map at all and lets interface layers supply
//! whatever selection source they have (a search panel, a gazetteer, a
//! fixture).

use crate::params::MapSelection;

/// Supplies the currently chosen map location, if any.
pub trait SelectionProvider {
    /// Returns the current selection, or `None` when nothing is picked.
    fn current_selection(&self) -> Option<MapSelection>;
}

/// A fixed selection source, mainly useful in tests and scripted sessions.
#[derive(Debug, Clone, Default)]
pub struct StaticSelection(pub Option<MapSelection>);

impl StaticSelection {
    /// A provider with nothing selected.
    pub fn none() -> Self {
        Self(None)
    }

    /// A provider that always reports the given selection.
    pub fn of(selection: MapSelection) -> Self {
        Self(Some(selection))
    }
}

impl SelectionProvider for StaticSelection {
    fn current_selection(&self) -> Option<MapSelection> {
        self.0.clone()
    }
}
