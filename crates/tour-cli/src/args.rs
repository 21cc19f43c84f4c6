use std::path::PathBuf;

use clap::Parser;

/// Main command-line interface for the Tourplan itinerary planner
///
/// Tourplan builds a multi-day travel itinerary interactively: add days,
/// pick places from the gazetteer, and slot them into each day by time.
/// The itinerary lives in memory for the length of the session; commands
/// are read line by line from standard input, so sessions can also be
/// scripted by piping a command file in.
#[derive(Parser)]
#[command(version, about, name = "tour")]
pub struct Args {
    /// Calendar date of day 1 in YYYY-MM-DD form. Defaults to today.
    #[arg(long)]
    pub start_date: Option<String>,

    /// Path to a gazetteer JSON file with named places to pick from.
    /// Defaults to a built-in set of Seoul landmarks.
    #[arg(long)]
    pub gazetteer: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
