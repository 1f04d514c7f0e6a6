use clap::{Args, Parser, Subcommand};

use crate::ops::entry_ops::MoveDirection;

#[derive(Parser)]
#[command(name = "cks", about = concat!("[o] clockset v", env!("CARGO_PKG_VERSION"), " - world clock settings, in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different settings directory
    #[arg(short = 'C', long = "store-dir", global = true)]
    pub store_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the configured clocks
    List,
    /// Append a clock (defaults to London / Europe/London)
    Add(AddArgs),
    /// Remove the clock at an index
    Remove(RemoveArgs),
    /// Move a clock to the top/up/down/bottom
    Move(MoveArgs),
    /// Remove all clocks
    Clear(ClearArgs),
    /// Update a clock's label and/or timezone in place
    Set(SetArgs),
    /// Show or change the time format
    Format(FormatArgs),
    /// List known timezones, optionally filtered
    Zones(ZonesArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Display name for the clock
    pub label: Option<String>,
    /// IANA timezone identifier
    pub timezone: Option<String>,
    /// Accept a timezone that is not in the host's zone table
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Zero-based row index
    pub index: usize,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Zero-based row index
    pub index: usize,
    /// Where to move it
    #[arg(value_enum)]
    pub direction: MoveDirection,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args)]
pub struct SetArgs {
    /// Zero-based row index
    pub index: usize,
    /// New display name
    #[arg(long)]
    pub label: Option<String>,
    /// New timezone identifier
    #[arg(long)]
    pub timezone: Option<String>,
    /// Accept a timezone that is not in the host's zone table
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct FormatArgs {
    /// New format string; omit to print the current one
    pub format: Option<String>,
}

#[derive(Args)]
pub struct ZonesArgs {
    /// Only show zones containing this text (case-insensitive)
    pub filter: Option<String>,
    /// Match at the start of the name only
    #[arg(long)]
    pub prefix: bool,
}
