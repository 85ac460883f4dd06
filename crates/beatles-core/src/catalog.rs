//! The immutable song catalog.
//!
//! Records are keyed by their title signature. The catalog is built once
//! and never written to afterwards, so a shared `&Catalog` can be read from
//! any number of threads without locking.

use std::collections::HashMap;

use crate::error::Result;
use crate::record::Record;

/// The song table bundled with the crate.
///
/// Produced by the upstream spreadsheet converter: a JSON array of objects
/// with `title`, `album`, `songwriters`, `vocals`, `year` and `notes`.
pub const EMBEDDED_SONGS: &str = include_str!("../data/songs.json");

/// An immutable mapping from signature to [`Record`].
///
/// Iteration order is the order in which signatures were first inserted.
/// When two records share a signature the later one replaces the earlier
/// one's value in place (last write wins). This hides data: the bundled
/// table loses "Revolution" and "Revolution 1" to "Revolution 9".
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<(String, Record)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records in source order.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load the bundled song table.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_SONGS)
    }

    fn insert(&mut self, record: Record) {
        let signature = record.signature();
        if let Some(&slot) = self.index.get(&signature) {
            let replaced = &mut self.entries[slot].1;
            log::info!(
                "Signature collision on {:?}: {:?} replaces {:?}",
                signature,
                record.title,
                replaced.title
            );
            *replaced = record;
        } else {
            self.index.insert(signature.clone(), self.entries.len());
            self.entries.push((signature, record));
        }
    }

    /// Exact lookup by signature.
    pub fn lookup_exact(&self, signature: &str) -> Option<&Record> {
        self.index.get(signature).map(|&slot| &self.entries[slot].1)
    }

    /// All `(signature, record)` pairs in stable catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries
            .iter()
            .map(|(signature, record)| (signature.as_str(), record))
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_records([
            Record::new("Yes It Is").with_vocals("Lennon, McCartney and Harrison"),
            Record::new("Yesterday").with_vocals("McCartney"),
            Record::new("Revolution 1").with_year("1968"),
            Record::new("Taxman"),
            Record::new("Revolution 9").with_vocals("Sound Collage"),
        ])
    }

    #[test]
    fn test_lookup_exact() {
        let catalog = sample();
        let record = catalog.lookup_exact("yesterday").unwrap();
        assert_eq!(record.title, "Yesterday");
        assert!(catalog.lookup_exact("yesterda").is_none());
        assert!(catalog.lookup_exact("").is_none());
    }

    #[test]
    fn test_collision_last_write_wins_keeps_position() {
        let catalog = sample();
        assert_eq!(catalog.len(), 4);

        let record = catalog.lookup_exact("revolution").unwrap();
        assert_eq!(record.title, "Revolution 9");

        let order: Vec<&str> = catalog.iter().map(|(sig, _)| sig).collect();
        assert_eq!(order, vec!["yesitis", "yesterday", "revolution", "taxman"]);
    }

    #[test]
    fn test_iter_matches_records() {
        let catalog = sample();
        for ((signature, a), b) in catalog.iter().zip(catalog.records()) {
            assert_eq!(a, b);
            assert_eq!(signature, b.signature());
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_records(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        // 305 rows in the source table, three of which share `revolution`.
        assert_eq!(catalog.len(), 303);

        let week = catalog.lookup_exact("eightdaysaweek").unwrap();
        assert_eq!(week.title, "Eight Days a Week");
        assert_eq!(week.vocals, "Lennon, with McCartney");
        assert_eq!(week.year, "1964");

        assert_eq!(catalog.lookup_exact("revolution").unwrap().title, "Revolution 9");
        assert_eq!(catalog.lookup_exact("bsamemucho").unwrap().title, "Bésame Mucho");
    }

    #[test]
    fn test_embedded_catalog_tolerates_empty_year() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.records().any(|r| r.year.is_empty()));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Catalog::from_json_str("{not json").is_err());
        assert!(Catalog::from_json_str(r#"[{"album": "no title"}]"#).is_err());
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
