use serde::{Deserialize, Serialize};

/// Separator between label and timezone in the stored string form.
pub const FIELD_SEPARATOR: char = '|';

/// One world-clock row: a display label and an IANA timezone identifier.
///
/// Neither field is validated here; timezone validity is enforced (when
/// enforced at all) by the autocomplete field at edit time. Duplicates are
/// permitted and order is user-controlled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEntry {
    pub label: String,
    pub timezone: String,
}

impl ClockEntry {
    pub fn new(label: impl Into<String>, timezone: impl Into<String>) -> Self {
        ClockEntry {
            label: label.into(),
            timezone: timezone.into(),
        }
    }

    /// Parse the stored `"label|timezone"` form.
    ///
    /// A string without the separator is kept as a row with an empty
    /// timezone rather than dropped, so a malformed stored entry survives
    /// the next whole-list save and stays visible in the editor.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(FIELD_SEPARATOR) {
            Some((label, timezone)) => ClockEntry::new(label, timezone),
            None => ClockEntry::new(raw, ""),
        }
    }

    /// The stored string form. Round-trips through `parse` as long as the
    /// label contains no separator character.
    pub fn serialize(&self) -> String {
        format!("{}{}{}", self.label, FIELD_SEPARATOR, self.timezone)
    }
}

/// Parse a stored list of `"label|timezone"` strings in order.
pub fn parse_entries(raw: &[String]) -> Vec<ClockEntry> {
    raw.iter().map(|s| ClockEntry::parse(s)).collect()
}

/// Serialize the entry list to its stored form, preserving order.
pub fn serialize_entries(entries: &[ClockEntry]) -> Vec<String> {
    entries.iter().map(ClockEntry::serialize).collect()
}
