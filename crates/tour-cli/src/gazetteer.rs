//! Named-place catalog backing the map-selection capability.
//!
//! The editor core only ever sees the currently picked place through the
//! [`SelectionProvider`] trait. In the terminal the map widget is replaced
//! by this gazetteer: a list of named places with addresses and
//! coordinates, searched with the `pick` command. A custom catalog can be
//! loaded from a JSON file; otherwise a built-in set of Seoul landmarks is
//! used.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tour_core::{MapSelection, SelectionProvider};

/// One gazetteer entry, shaped like the selection the editor consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Entry {
    fn to_selection(&self) -> MapSelection {
        MapSelection {
            name: self.name.clone(),
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// The catalog plus the currently picked place, if any.
pub struct Gazetteer {
    entries: Vec<Entry>,
    current: Option<MapSelection>,
}

impl Gazetteer {
    /// Loads a catalog from a JSON file: an array of objects with `name`,
    /// `address`, `latitude`, and `longitude` fields.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read gazetteer file {}", path.display()))?;
        let entries: Vec<Entry> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid gazetteer JSON in {}", path.display()))?;
        Ok(Self {
            entries,
            current: None,
        })
    }

    /// The built-in catalog of Seoul landmarks.
    pub fn builtin() -> Self {
        let entries = [
            (
                "Gyeongbokgung Palace",
                "161 Sajik-ro, Jongno-gu, Seoul",
                37.5796,
                126.9770,
            ),
            (
                "N Seoul Tower",
                "105 Namsangongwon-gil, Yongsan-gu, Seoul",
                37.5512,
                126.9882,
            ),
            (
                "Gwangjang Market",
                "88 Changgyeonggung-ro, Jongno-gu, Seoul",
                37.5700,
                126.9996,
            ),
            (
                "Bukchon Hanok Village",
                "37 Gyedong-gil, Jongno-gu, Seoul",
                37.5826,
                126.9831,
            ),
            (
                "Seoul Forest",
                "273 Ttukseom-ro, Seongdong-gu, Seoul",
                37.5444,
                127.0374,
            ),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(name, address, latitude, longitude)| Entry {
                    name: name.to_string(),
                    address: address.to_string(),
                    latitude,
                    longitude,
                })
                .collect(),
            current: None,
        }
    }

    /// Picks the first entry whose name contains the query,
    /// case-insensitively, and makes it the current selection.
    ///
    /// Returns the picked entry, or `None` when nothing matches (the
    /// previous selection is kept in that case).
    pub fn pick(&mut self, query: &str) -> Option<&Entry> {
        let query = query.to_lowercase();
        let index = self
            .entries
            .iter()
            .position(|e| e.name.to_lowercase().contains(&query))?;
        self.current = Some(self.entries[index].to_selection());
        Some(&self.entries[index])
    }

    /// All entries, for listing.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl SelectionProvider for Gazetteer {
    fn current_selection(&self) -> Option<MapSelection> {
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_builtin_has_no_initial_selection() {
        let gazetteer = Gazetteer::builtin();
        assert!(gazetteer.current_selection().is_none());
        assert!(!gazetteer.entries().is_empty());
    }

    #[test]
    fn test_pick_is_case_insensitive_substring() {
        let mut gazetteer = Gazetteer::builtin();
        let entry = gazetteer.pick("tower").expect("tower should match");
        assert_eq!(entry.name, "N Seoul Tower");
        assert_eq!(
            gazetteer.current_selection().map(|s| s.name),
            Some("N Seoul Tower".to_string())
        );
    }

    #[test]
    fn test_failed_pick_keeps_previous_selection() {
        let mut gazetteer = Gazetteer::builtin();
        gazetteer.pick("palace").expect("palace should match");

        assert!(gazetteer.pick("no such place").is_none());
        assert_eq!(
            gazetteer.current_selection().map(|s| s.name),
            Some("Gyeongbokgung Palace".to_string())
        );
    }

    #[test]
    fn test_from_file_parses_entries() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"name": "Test Spot", "address": "1 Test St", "latitude": 1.5, "longitude": 2.5}}]"#
        )
        .expect("write gazetteer");

        let mut gazetteer = Gazetteer::from_file(file.path()).expect("load gazetteer");
        let entry = gazetteer.pick("test").expect("entry should match");
        assert_eq!(entry.address, "1 Test St");
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write file");
        assert!(Gazetteer::from_file(file.path()).is_err());
    }
}
