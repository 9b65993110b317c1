use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gildedrose")]
#[command(about = "Simulate a Gilded Rose inventory day by day", long_about = None)]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// TOML file describing the inventory (defaults to the built-in presets)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Simulate this many days and exit instead of prompting for commands
    #[arg(short, long)]
    pub days: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}
