//! Packing run
//!
//! One run is a fixed sequence of pure steps:
//! 1. Parse - fleet spec and parcel forms (abort on bad input)
//! 2. Load - simple pass, or width pass -> merge -> height pass
//! 3. Render - text grid or JSON manifest
//!
//! Every step takes its input by value and returns fresh trucks and
//! parcels; nothing is shared between runs.

use crate::error::{Error, Result};
use crate::fleet::parse_fleet;
use crate::loader::{LoadOutcome, load_by_height, load_by_width, load_simple};
use crate::parcel::{merge_truck_parcels, parse_parcels, sort_parcels};
use crate::render::render;
use crate::types::{OutputFormat, PackMode, PackStage, Parcel, Truck};
use tracing::{info, warn};

/// Inputs for a single packing run
#[derive(Debug, Clone)]
pub struct PackRequest {
    /// Raw parcel form strings, in request order
    pub forms: Vec<String>,
    /// Capacity spec, e.g. `"5x5,6x6"`
    pub fleet: String,
    /// Packing strategy
    pub mode: PackMode,
    /// Output format for the rendered layout
    pub format: OutputFormat,
}

/// Outcome of a packing run
///
/// A run that ran out of trucks still renders what was loaded; callers
/// decide whether partial success is acceptable via [`is_complete`].
///
/// [`is_complete`]: Self::is_complete
#[derive(Debug, Clone)]
pub struct PackReport {
    /// Trucks as loaded by the last pass that ran
    pub trucks: Vec<Truck>,
    /// Parcels that found no truck
    pub unplaced: Vec<Parcel>,
    /// Last pass that ran
    pub stage: PackStage,
    /// Rendered layout of `trucks`
    pub output: String,
}

impl PackReport {
    /// Check if every parcel was placed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Form strings of the unplaced parcels
    pub fn unplaced_forms(&self) -> Vec<String> {
        self.unplaced.iter().map(Parcel::form).collect()
    }

    /// Turn a partial load into [`Error::CapacityExceeded`]
    pub fn into_result(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(Error::CapacityExceeded {
                stage: self.stage,
                unplaced: self.unplaced_forms(),
            })
        }
    }
}

/// Run the full packing pipeline for `request`
pub fn pack(request: &PackRequest) -> Result<PackReport> {
    let fleet = parse_fleet(&request.fleet)?;
    let mut parcels = parse_parcels(&request.forms)?;
    sort_parcels(&mut parcels);

    info!(
        parcels = parcels.len(),
        trucks = fleet.len(),
        mode = %request.mode,
        "packing run started"
    );

    let (outcome, stage) = match request.mode {
        PackMode::Simple => (load_simple(parcels, fleet), PackStage::Simple),
        PackMode::Complex => load_complex(parcels, fleet, &request.fleet)?,
    };

    if !outcome.is_complete() {
        warn!(
            %stage,
            unplaced = outcome.unplaced.len(),
            "insufficient truck capacity"
        );
    }

    let output = render(&outcome.trucks, request.format)?;
    Ok(PackReport {
        trucks: outcome.trucks,
        unplaced: outcome.unplaced,
        stage,
        output,
    })
}

/// Width pass, merge, then height pass over a rebuilt fleet.
///
/// Stops after the width pass if it could not place everything.
fn load_complex(
    parcels: Vec<Parcel>,
    fleet: Vec<Truck>,
    spec: &str,
) -> Result<(LoadOutcome, PackStage)> {
    let by_width = load_by_width(parcels, fleet);
    if !by_width.is_complete() {
        return Ok((by_width, PackStage::Width));
    }

    let mut merged = merge_truck_parcels(&by_width.trucks);
    sort_parcels(&mut merged);

    let fresh = parse_fleet(spec)?;
    Ok((load_by_height(merged, fresh), PackStage::Height))
}
