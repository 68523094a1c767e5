//! Command-line argument definitions for the Aureole CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the container being
//! filled, strategy selection, configuration file selection, and logging
//! verbosity.

use clap::Parser;

use aureole::strategy::LayoutStrategy;

/// Command-line arguments for the Aureole preview tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input roster file (TOML)
    #[arg(help = "Path to the roster file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Container width
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Container height
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Radius of the central portrait
    #[arg(long, default_value_t = 120.0)]
    pub center_radius: f32,

    /// Placement strategy (rings, spiral); overrides the configuration file
    #[arg(short, long)]
    pub strategy: Option<LayoutStrategy>,

    /// Seed for the spiral jitter, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
