use serde::{Deserialize, Serialize};

use crate::signature::normalize;

/// One song in the catalog.
///
/// Field values are carried through exactly as the data source provides
/// them. Empty or malformed values (a blank year, no notes) are never
/// rejected; consumers must tolerate empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display title (e.g., "Norwegian Wood (This Bird Has Flown)").
    pub title: String,

    /// Credited songwriters, one per line, in no particular order.
    #[serde(rename = "songwriters", default)]
    pub contributors: String,

    /// Album or release the song debuted on. May be empty.
    #[serde(rename = "album", default)]
    pub group: String,

    /// Lead vocal description (e.g., "Lennon, with McCartney").
    #[serde(default)]
    pub vocals: String,

    /// Year as written in the source. May be empty or malformed.
    #[serde(default)]
    pub year: String,

    #[serde(default)]
    pub notes: String,
}

impl Record {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contributors: String::new(),
            group: String::new(),
            vocals: String::new(),
            year: String::new(),
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn with_contributors(mut self, contributors: impl Into<String>) -> Self {
        self.contributors = contributors.into();
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    #[must_use]
    pub fn with_vocals(mut self, vocals: impl Into<String>) -> Self {
        self.vocals = vocals.into();
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// The catalog key for this record, derived from its title.
    pub fn signature(&self) -> String {
        normalize(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("Yesterday");
        assert_eq!(record.title, "Yesterday");
        assert!(record.vocals.is_empty());
        assert!(record.year.is_empty());
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new("Eight Days a Week")
            .with_contributors("McCartney\n(with Lennon)")
            .with_group("UK: Beatles for Sale US: Beatles VI")
            .with_vocals("Lennon, with McCartney")
            .with_year("1964")
            .with_notes("US single only");

        assert_eq!(record.signature(), "eightdaysaweek");
        assert_eq!(record.year, "1964");
        assert_eq!(record.contributors, "McCartney\n(with Lennon)");
    }

    #[test]
    fn test_record_deserializes_source_field_names() {
        let json = r#"{"title": "Blackbird", "album": "The Beatles", "songwriters": "McCartney", "vocals": "McCartney", "year": "1968"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.group, "The Beatles");
        assert_eq!(record.contributors, "McCartney");
        assert_eq!(record.notes, "");
    }
}
