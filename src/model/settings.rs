use crate::io::store::{SettingsStore, StoreError};
use crate::model::entry::{ClockEntry, parse_entries, serialize_entries};

/// Store key holding the ordered list of `"label|timezone"` strings.
pub const WORLDCLOCKS_KEY: &str = "worldclocks";
/// Store key holding the strftime format string for the applet's clocks.
pub const TIME_FORMAT_KEY: &str = "time-format";

/// Format used when the store has no `time-format` value yet.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Default row inserted by the add action.
pub fn default_entry() -> ClockEntry {
    ClockEntry::new("London", "Europe/London")
}

/// The editable settings: the clock list and the time format.
///
/// Loaded once when the window opens, mutated only by explicit user actions,
/// and written back in full when the window closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSettings {
    pub clocks: Vec<ClockEntry>,
    pub time_format: String,
}

impl ClockSettings {
    /// Read both keys from the store. Missing keys fall back to an empty
    /// list and the default format.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let clocks = store
            .get_list(WORLDCLOCKS_KEY)
            .map(|raw| parse_entries(&raw))
            .unwrap_or_default();
        let time_format = store
            .get_string(TIME_FORMAT_KEY)
            .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string());
        ClockSettings {
            clocks,
            time_format,
        }
    }

    /// Whole-list replace of both keys, then persist.
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), StoreError> {
        store.set_list(WORLDCLOCKS_KEY, &serialize_entries(&self.clocks));
        store.set_string(TIME_FORMAT_KEY, &self.time_format);
        store.save()
    }

    /// Close-time save: failures are swallowed so the window always closes.
    pub fn save_best_effort(&self, store: &mut dyn SettingsStore) {
        let _ = self.save(store);
    }
}
