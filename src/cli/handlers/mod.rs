use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::file_store::FileStore;
use crate::io::lock::StoreLock;
use crate::io::zoneinfo;
use crate::model::entry::ClockEntry;
use crate::model::settings::{ClockSettings, default_entry};
use crate::ops::complete::Completion;
use crate::ops::entry_ops;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store_dir = FileStore::resolve_dir(cli.store_dir.as_deref())?;

    match cli.command {
        None => {
            // main.rs routes the no-subcommand case to the TUI
            Ok(())
        }
        Some(cmd) => match cmd {
            // Read commands
            Commands::List => cmd_list(&store_dir, json),
            Commands::Zones(args) => cmd_zones(args, json),

            // Write commands
            Commands::Add(args) => cmd_add(&store_dir, args),
            Commands::Remove(args) => cmd_remove(&store_dir, args),
            Commands::Move(args) => cmd_move(&store_dir, args),
            Commands::Clear(args) => cmd_clear(&store_dir, args),
            Commands::Set(args) => cmd_set(&store_dir, args),
            Commands::Format(args) => cmd_format(&store_dir, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load, mutate, save — under the store lock so a concurrent TUI close
/// cannot interleave with this write.
fn with_settings_mut<F>(store_dir: &Path, mutate: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&mut ClockSettings) -> Result<(), Box<dyn std::error::Error>>,
{
    let _lock = StoreLock::acquire_default(store_dir)?;
    let mut store = FileStore::open(store_dir)?;
    let mut settings = ClockSettings::load(&store);
    mutate(&mut settings)?;
    settings.save(&mut store)?;
    Ok(())
}

/// Reject a timezone the host does not know, unless forced. An empty zone
/// table disables validation entirely (free text still works).
fn check_timezone(timezone: &str, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if force {
        return Ok(());
    }
    let zones = zoneinfo::load_zones();
    if zones.is_empty() {
        return Ok(());
    }
    let completion = Completion::new(zones, true, true);
    if !completion.accepts(timezone) {
        return Err(format!("unknown timezone '{}' (use --force to keep it)", timezone).into());
    }
    Ok(())
}

fn check_index(index: usize, len: usize) -> Result<(), Box<dyn std::error::Error>> {
    if index >= len {
        return Err(format!("no clock at index {} ({} configured)", index, len).into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(store_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(store_dir)?;
    let settings = ClockSettings::load(&store);
    if json {
        print_json(&clock_list_json(&settings.clocks, &settings.time_format));
    } else {
        print_clock_table(&settings.clocks);
    }
    Ok(())
}

fn cmd_add(store_dir: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let default = default_entry();
    let label = args.label.unwrap_or(default.label);
    let timezone = args.timezone.unwrap_or(default.timezone);
    check_timezone(&timezone, args.force)?;
    with_settings_mut(store_dir, |settings| {
        entry_ops::append_entry(&mut settings.clocks, ClockEntry::new(&label, &timezone));
        println!(
            "added {} | {} at index {}",
            label,
            timezone,
            settings.clocks.len() - 1
        );
        Ok(())
    })
}

fn cmd_remove(store_dir: &Path, args: RemoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    with_settings_mut(store_dir, |settings| {
        check_index(args.index, settings.clocks.len())?;
        if let Some(removed) = entry_ops::remove_entry(&mut settings.clocks, Some(args.index)) {
            println!("removed {} | {}", removed.label, removed.timezone);
        }
        Ok(())
    })
}

fn cmd_move(store_dir: &Path, args: MoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    with_settings_mut(store_dir, |settings| {
        check_index(args.index, settings.clocks.len())?;
        match entry_ops::move_entry(&mut settings.clocks, Some(args.index), args.direction) {
            Some(new_index) => println!("moved index {} to {}", args.index, new_index),
            None => println!("unchanged"),
        }
        Ok(())
    })
}

fn cmd_clear(store_dir: &Path, args: ClearArgs) -> Result<(), Box<dyn std::error::Error>> {
    with_settings_mut(store_dir, |settings| {
        if settings.clocks.is_empty() {
            println!("no clocks configured");
            return Ok(());
        }
        if !args.yes {
            return Err(format!(
                "refusing to clear {} clocks without --yes",
                settings.clocks.len()
            )
            .into());
        }
        entry_ops::clear_entries(&mut settings.clocks);
        println!("cleared");
        Ok(())
    })
}

fn cmd_set(store_dir: &Path, args: SetArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.label.is_none() && args.timezone.is_none() {
        return Err("nothing to set: pass --label and/or --timezone".into());
    }
    if let Some(ref tz) = args.timezone {
        check_timezone(tz, args.force)?;
    }
    with_settings_mut(store_dir, |settings| {
        check_index(args.index, settings.clocks.len())?;
        if let Some(ref label) = args.label {
            entry_ops::set_label(&mut settings.clocks, args.index, label);
        }
        if let Some(ref tz) = args.timezone {
            entry_ops::set_timezone(&mut settings.clocks, args.index, tz);
        }
        let entry = &settings.clocks[args.index];
        println!("{}  {} | {}", args.index, entry.label, entry.timezone);
        Ok(())
    })
}

fn cmd_format(
    store_dir: &Path,
    args: FormatArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.format {
        None => {
            let store = FileStore::open(store_dir)?;
            let settings = ClockSettings::load(&store);
            if json {
                print_json(&serde_json::json!({ "time_format": settings.time_format }));
            } else {
                println!("{}", settings.time_format);
            }
            Ok(())
        }
        Some(new_format) => with_settings_mut(store_dir, |settings| {
            settings.time_format = new_format.clone();
            println!("time format set to {}", new_format);
            Ok(())
        }),
    }
}

fn cmd_zones(args: ZonesArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let completion = Completion::new(zoneinfo::load_zones(), !args.prefix, false);
    let query = args.filter.as_deref().unwrap_or("");
    let zones: Vec<String> = completion.filter(query).map(String::from).collect();
    if json {
        print_json(&ZonesJson { zones });
    } else if zones.is_empty() {
        eprintln!("no matching timezones");
    } else {
        for zone in zones {
            println!("{}", zone);
        }
    }
    Ok(())
}
