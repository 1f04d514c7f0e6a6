use std::fs;
use std::path::Path;

/// Known locations of the IANA zone table, in preference order.
/// The second is the Solaris layout.
const ZONE_TAB_PATHS: [&str; 2] = [
    "/usr/share/zoneinfo/zone.tab",
    "/usr/share/lib/zoneinfo/tab/zone_sun.tab",
];

/// Load the sorted set of known timezone identifiers from the host's zone
/// table. Returns an empty list when no table exists or it cannot be read;
/// the editor then offers no suggestions but keeps working.
pub fn load_zones() -> Vec<String> {
    for path in ZONE_TAB_PATHS {
        if let Some(zones) = load_zone_tab(Path::new(path)) {
            return zones;
        }
    }
    Vec::new()
}

fn load_zone_tab(path: &Path) -> Option<Vec<String>> {
    let text = fs::read_to_string(path).ok()?;
    Some(parse_zone_tab(&text))
}

/// Parse zone.tab text: skip comment lines, take the third column
/// (country code, coordinates, TZ name), sort the result.
fn parse_zone_tab(text: &str) -> Vec<String> {
    let mut zones: Vec<String> = text
        .lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .filter_map(|line| line.split_whitespace().nth(2))
        .map(String::from)
        .collect();
    zones.sort();
    zones
}
