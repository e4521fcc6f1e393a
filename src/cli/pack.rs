//! Pack command - load parcels into trucks and print the layout

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check, cross};
use anstream::{eprintln, print, println};
use std::fs;
use std::path::PathBuf;
use truckload::error::Result;
use truckload::pack::{PackReport, PackRequest, pack};
use truckload::types::{OutputFormat, PackMode};

/// Options for the pack command
#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    /// Truck capacity spec
    pub trucks: String,
    /// Packing mode (config default when unset)
    pub mode: Option<PackMode>,
    /// Output format (config default when unset)
    pub format: Option<OutputFormat>,
    /// Comma-separated catalog names
    pub names: String,
    /// Ad-hoc forms; take precedence over `names`
    pub parcels: Vec<String>,
    /// Destination for JSON output
    pub output: Option<PathBuf>,
}

/// Run the pack command
pub fn run_pack(ctx: &CommandContext, options: PackOptions) -> Result<()> {
    let mode = options.mode.unwrap_or(ctx.config.mode);
    let format = options.format.unwrap_or(ctx.config.format);

    let forms = if options.parcels.is_empty() {
        ctx.catalog.forms_for_names(&options.names)
    } else {
        options.parcels
    };

    if forms.is_empty() {
        println!("{}", "No parcels selected".muted());
        return Ok(());
    }

    let report = pack(&PackRequest {
        forms,
        fleet: options.trucks,
        mode,
        format,
    })?;

    let destination = options.output.or_else(|| ctx.config.output.clone());
    match (format, destination) {
        (OutputFormat::Json, Some(path)) => {
            fs::write(&path, &report.output)?;
            println!("{} Wrote {}", check(), path.display().accent());
        }
        (OutputFormat::Json, None) => println!("{}", report.output),
        (OutputFormat::Text, _) => print!("{}", report.output),
    }

    if !report.is_complete() {
        print_unplaced(&report);
    }

    report.into_result().map(|_| ())
}

/// List parcels that did not fit on stderr
fn print_unplaced(report: &PackReport) {
    eprintln!(
        "{} {}",
        cross(),
        format!("Not enough truck capacity ({})", report.stage).warn()
    );
    for form in report.unplaced_forms() {
        eprintln!("    - {}", form.muted());
    }
}
