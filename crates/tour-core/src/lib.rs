//! Core library for the Tourplan travel itinerary editor.
//!
//! This crate provides the business logic for building a multi-day travel
//! itinerary: the day/place data models, the editor state machine with its
//! ordering and validation rules, error handling, and display formatting.
//!
//! The editor holds everything in memory and runs synchronously; map
//! locations reach it only through an injected
//! [`SelectionProvider`](selection::SelectionProvider), so the core has no
//! dependency on any map widget or network service.
//!
//! # Quick Start
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
//!
//! // Days are appended and become active as they are added
//! editor.add_day();
//!
//! // A place starts from a map selection, gets a time, then is confirmed
//! let map = StaticSelection::of(MapSelection {
//!     name: "Gyeongbokgung Palace".to_string(),
//!     address: "161 Sajik-ro, Jongno-gu, Seoul".to_string(),
//!     latitude: 37.5796,
//!     longitude: 126.9770,
//! });
//! editor.begin_add_place(&map)?;
//! if let Some(draft) = editor.draft_mut() {
//!     draft.time = "09:30".to_string();
//! }
//! editor.confirm_place()?;
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod params;
pub mod selection;

// Re-export commonly used types
pub use display::{DayDate, Itinerary, OperationStatus};
pub use editor::{
    dialog::{DialogState, DraftMode},
    Editor, EditorBuilder,
};
pub use error::{EditorError, Result};
pub use models::{Coordinates, Day, Place};
pub use params::{MapSelection, PlaceDraft};
pub use selection::{SelectionProvider, StaticSelection};
