//! CLI logic for the daygrid layout tool.
//!
//! This module reads a schedule, lays out each of its days and writes the
//! layout report.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use daygrid::{CalendarBuilder, DaygridError};

/// Run the daygrid CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DaygridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Schedule input errors
/// - Report rendering errors
pub fn run(args: &Args) -> Result<(), DaygridError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing schedule"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = CalendarBuilder::new(app_config);
    let schedule = builder.parse(&source)?;
    let layout = builder.layout(&schedule);
    let report = builder.render_report(&schedule, &layout)?;

    fs::write(&args.output, report)?;

    info!(output_file = args.output, days = layout.len(); "Layout report written");

    Ok(())
}
