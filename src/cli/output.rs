use serde::Serialize;

use crate::model::entry::ClockEntry;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ClockJson {
    pub index: usize,
    pub label: String,
    pub timezone: String,
}

#[derive(Serialize)]
pub struct ClockListJson {
    pub clocks: Vec<ClockJson>,
    pub time_format: String,
}

#[derive(Serialize)]
pub struct ZonesJson {
    pub zones: Vec<String>,
}

pub fn clock_list_json(clocks: &[ClockEntry], time_format: &str) -> ClockListJson {
    ClockListJson {
        clocks: clocks
            .iter()
            .enumerate()
            .map(|(index, e)| ClockJson {
                index,
                label: e.label.clone(),
                timezone: e.timezone.clone(),
            })
            .collect(),
        time_format: time_format.to_string(),
    }
}

/// Print the clock list as an aligned two-column table.
pub fn print_clock_table(clocks: &[ClockEntry]) {
    if clocks.is_empty() {
        println!("no clocks configured");
        return;
    }
    let label_width = clocks
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    for (i, entry) in clocks.iter().enumerate() {
        println!(
            "{:>3}  {:<label_width$}  {}",
            i, entry.label, entry.timezone
        );
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("error: could not serialize output: {}", e),
    }
}
