//! CLI logic for the Aureole preview tool.
//!
//! Reads a roster, computes a placement for it and writes an animated SVG
//! preview.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;
use rand::{SeedableRng, rngs::StdRng};

use aureole::{
    AureoleError, PlacementBuilder,
    export::{Exporter, svg::SvgBuilder},
    geometry::Size,
    plan::PlacementRequest,
    roster::Roster,
};

/// Run the Aureole CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `AureoleError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Roster parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), AureoleError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing roster"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(strategy) = args.strategy {
        app_config = app_config.with_strategy(strategy);
    }

    let source = fs::read_to_string(&args.input)?;
    let roster = Roster::from_toml_str(&source)?.sanitized();

    let request = PlacementRequest::new(
        Size::new(args.width, args.height),
        roster.len(),
        args.center_radius,
    );

    let builder = PlacementBuilder::new(app_config);
    let placement = match args.seed {
        Some(seed) => builder.place_with_rng(&request, &mut StdRng::seed_from_u64(seed)),
        None => builder.place(&request),
    };

    let svg = SvgBuilder::new(&request)
        .with_style(builder.config().style())
        .with_people(roster.people())
        .build()?;
    svg.export_placement(&placement, Path::new(&args.output))?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
