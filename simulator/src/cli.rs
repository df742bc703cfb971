//! Command-line options.

use std::path::PathBuf;

use clap::Parser;
use watchface_common::config::DEFAULT_DISPLAY_SIZE;

/// Desktop simulator for the analog step and temperature watchface.
///
/// Keys: S adds 500 steps, U toggles step data availability, T pushes
/// weather now, N flips day/night.
#[derive(Parser, Debug)]
#[command(name = "simulator", version, about)]
pub struct Args {
    /// Edge length of the square display in pixels.
    #[arg(long, default_value_t = DEFAULT_DISPLAY_SIZE, value_parser = clap::value_parser!(u32).range(32..=1024))]
    pub size: u32,

    /// Window pixel scale.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// File holding the persisted step count and temperature.
    #[arg(long, default_value = "watchface-state.bin")]
    pub state_file: PathBuf,

    /// Start without reading the state file.
    #[arg(long)]
    pub fresh: bool,
}
