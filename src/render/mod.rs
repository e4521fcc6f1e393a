//! Layout rendering for loaded trucks
//!
//! Both renderers skip trucks that hold no parcels.

mod manifest;

pub use manifest::{PackageEntry, TruckEntry, TruckManifest, build_manifest};

use crate::error::Result;
use crate::types::{OutputFormat, Truck};
use tracing::debug;

/// Border glyph for truck walls and floor
const BORDER: char = '+';

/// Render trucks in the requested format
pub fn render(trucks: &[Truck], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(trucks)),
        OutputFormat::Json => render_json(trucks),
    }
}

/// Draw each loaded truck as a bordered grid.
///
/// Free height is drawn as blank rows at the top, then every row of every
/// parcel in placement order, padded to the truck width, then the floor.
/// Blocks are separated by a blank line.
pub fn render_text(trucks: &[Truck]) -> String {
    let blocks: Vec<String> = trucks
        .iter()
        .filter(|t| !t.is_empty())
        .map(render_truck)
        .collect();
    debug!(blocks = blocks.len(), "rendered text layout");
    blocks.join("\n")
}

fn render_truck(truck: &Truck) -> String {
    let width = truck.width;
    let mut out = String::new();

    for _ in 0..truck.free_height() {
        out.push_str(&wall_line("", width));
    }
    for row in truck.parcels.iter().flat_map(|p| &p.rows) {
        out.push_str(&wall_line(row, width));
    }
    out.extend(std::iter::repeat_n(BORDER, width + 2));
    out.push('\n');
    out
}

fn wall_line(row: &str, width: usize) -> String {
    format!("{BORDER}{row:<width$}{BORDER}\n")
}

/// Serialize loaded trucks as a compact JSON document
pub fn render_json(trucks: &[Truck]) -> Result<String> {
    let manifest = build_manifest(trucks);
    Ok(serde_json::to_string(&manifest)?)
}
