use clap::ValueEnum;

use crate::model::entry::ClockEntry;

/// Where a move sends the selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoveDirection {
    /// Move to position 0
    Top,
    /// Swap with the previous row
    Up,
    /// Swap with the next row
    Down,
    /// Move to the last position
    Bottom,
}

/// Append an entry at the end of the list. Always succeeds.
pub fn append_entry(clocks: &mut Vec<ClockEntry>, entry: ClockEntry) {
    clocks.push(entry);
}

/// Remove the entry at `index`. A `None` index (nothing selected) and an
/// out-of-range index are both no-ops, not errors.
pub fn remove_entry(clocks: &mut Vec<ClockEntry>, index: Option<usize>) -> Option<ClockEntry> {
    match index {
        Some(i) if i < clocks.len() => Some(clocks.remove(i)),
        _ => None,
    }
}

/// Empty the list.
pub fn clear_entries(clocks: &mut Vec<ClockEntry>) {
    clocks.clear();
}

/// In-place label update. No validation.
pub fn set_label(clocks: &mut [ClockEntry], index: usize, value: &str) {
    if let Some(entry) = clocks.get_mut(index) {
        entry.label = value.to_string();
    }
}

/// In-place timezone update. No validation here; the autocomplete field is
/// responsible for rejecting unknown zones when force-match is on.
pub fn set_timezone(clocks: &mut [ClockEntry], index: usize, value: &str) {
    if let Some(entry) = clocks.get_mut(index) {
        entry.timezone = value.to_string();
    }
}

/// Move the entry at `index` in the given direction.
///
/// `Up` at the top and `Down` at the bottom are no-ops, as is a `None`
/// index (nothing selected). Returns the entry's new index when the list
/// changed, `None` otherwise.
pub fn move_entry(
    clocks: &mut [ClockEntry],
    index: Option<usize>,
    direction: MoveDirection,
) -> Option<usize> {
    let i = index?;
    if i >= clocks.len() {
        return None;
    }
    let last = clocks.len() - 1;
    match direction {
        MoveDirection::Top if i > 0 => {
            clocks[..=i].rotate_right(1);
            Some(0)
        }
        MoveDirection::Up if i > 0 => {
            clocks.swap(i, i - 1);
            Some(i - 1)
        }
        MoveDirection::Down if i < last => {
            clocks.swap(i, i + 1);
            Some(i + 1)
        }
        MoveDirection::Bottom if i < last => {
            clocks[i..].rotate_left(1);
            Some(last)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<ClockEntry> {
        vec![
            ClockEntry::new("London", "Europe/London"),
            ClockEntry::new("Paris", "Europe/Paris"),
            ClockEntry::new("Tokyo", "Asia/Tokyo"),
        ]
    }

    fn labels(clocks: &[ClockEntry]) -> Vec<&str> {
        clocks.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn append_always_goes_last() {
        let mut clocks = sample();
        append_entry(&mut clocks, ClockEntry::new("NYC", "America/New_York"));
        assert_eq!(labels(&clocks), ["London", "Paris", "Tokyo", "NYC"]);
    }

    #[test]
    fn remove_without_selection_is_noop() {
        let mut clocks = sample();
        assert!(remove_entry(&mut clocks, None).is_none());
        assert_eq!(labels(&clocks), ["London", "Paris", "Tokyo"]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut clocks = sample();
        assert!(remove_entry(&mut clocks, Some(3)).is_none());
        assert_eq!(clocks.len(), 3);
    }

    #[test]
    fn remove_returns_the_entry() {
        let mut clocks = sample();
        let removed = remove_entry(&mut clocks, Some(1)).unwrap();
        assert_eq!(removed.label, "Paris");
        assert_eq!(labels(&clocks), ["London", "Tokyo"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut clocks = sample();
        clear_entries(&mut clocks);
        assert!(clocks.is_empty());
    }

    #[test]
    fn set_fields_in_place() {
        let mut clocks = sample();
        set_label(&mut clocks, 0, "LDN");
        set_timezone(&mut clocks, 0, "Etc/UTC");
        assert_eq!(clocks[0], ClockEntry::new("LDN", "Etc/UTC"));
        // out-of-range updates are ignored
        set_label(&mut clocks, 9, "x");
    }

    #[test]
    fn move_up_at_top_is_noop() {
        let mut clocks = sample();
        assert_eq!(move_entry(&mut clocks, Some(0), MoveDirection::Up), None);
        assert_eq!(labels(&clocks), ["London", "Paris", "Tokyo"]);
    }

    #[test]
    fn move_down_at_bottom_is_noop() {
        let mut clocks = sample();
        assert_eq!(move_entry(&mut clocks, Some(2), MoveDirection::Down), None);
        assert_eq!(labels(&clocks), ["London", "Paris", "Tokyo"]);
    }

    #[test]
    fn move_without_selection_is_noop() {
        let mut clocks = sample();
        assert_eq!(move_entry(&mut clocks, None, MoveDirection::Top), None);
        assert_eq!(labels(&clocks), ["London", "Paris", "Tokyo"]);
    }

    #[test]
    fn move_up_swaps_with_previous() {
        let mut clocks = sample();
        assert_eq!(move_entry(&mut clocks, Some(2), MoveDirection::Up), Some(1));
        assert_eq!(labels(&clocks), ["London", "Tokyo", "Paris"]);
    }

    #[test]
    fn move_down_swaps_with_next() {
        let mut clocks = sample();
        assert_eq!(
            move_entry(&mut clocks, Some(0), MoveDirection::Down),
            Some(1)
        );
        assert_eq!(labels(&clocks), ["Paris", "London", "Tokyo"]);
    }

    #[test]
    fn move_top_preserves_order_of_others() {
        let mut clocks = sample();
        assert_eq!(move_entry(&mut clocks, Some(2), MoveDirection::Top), Some(0));
        assert_eq!(labels(&clocks), ["Tokyo", "London", "Paris"]);
    }

    #[test]
    fn move_bottom_preserves_order_of_others() {
        let mut clocks = sample();
        assert_eq!(
            move_entry(&mut clocks, Some(0), MoveDirection::Bottom),
            Some(2)
        );
        assert_eq!(labels(&clocks), ["Paris", "Tokyo", "London"]);
    }

    #[test]
    fn move_on_empty_list_is_noop() {
        let mut clocks: Vec<ClockEntry> = Vec::new();
        assert_eq!(move_entry(&mut clocks, Some(0), MoveDirection::Top), None);
    }
}
