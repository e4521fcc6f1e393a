//! Greedy truck loading
//!
//! Three passes share one cursor walk:
//! 1. Simple - one parcel per truck, checked by bottom width
//! 2. Width - parcels share a truck while bottom widths fit
//! 3. Height - merged parcels share a truck while heights fit
//!
//! Every pass is a first-fit walk over `(parcel, truck)` that only moves
//! forward. When the cursor falls off the end of the fleet the walk stops
//! and the remaining parcels are reported in [`LoadOutcome::unplaced`].

mod walk;

use crate::types::{Parcel, PackStage, Truck};
use tracing::info;
use walk::{Advance, walk};

/// Result of one loading pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Trucks after the pass (width pass drops the empty ones)
    pub trucks: Vec<Truck>,
    /// Parcels that found no truck, in the order they were attempted
    pub unplaced: Vec<Parcel>,
}

impl LoadOutcome {
    /// Check if every parcel was placed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Count placed parcels across all trucks
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.trucks.iter().map(|t| t.parcels.len()).sum()
    }
}

/// Simple pass: each parcel claims the next truck wide enough for it.
///
/// The cursor moves past a truck as soon as a parcel lands in it, and past
/// any truck too narrow for the current parcel. Trucks are never revisited.
pub fn load_simple(parcels: Vec<Parcel>, trucks: Vec<Truck>) -> LoadOutcome {
    let outcome = walk(
        parcels,
        trucks,
        |truck, parcel| truck.free_width() >= parcel.width_bottom,
        Advance::AfterPlacement,
        PackStage::Simple,
    );
    info!(
        placed = outcome.placed_count(),
        unplaced = outcome.unplaced.len(),
        "simple pass finished"
    );
    outcome
}

/// Complex mode, first pass: pack by bottom width, several parcels per truck.
///
/// The cursor stays on a truck until the next parcel no longer fits. Trucks
/// left empty are dropped from the outcome.
pub fn load_by_width(parcels: Vec<Parcel>, trucks: Vec<Truck>) -> LoadOutcome {
    let mut outcome = walk(
        parcels,
        trucks,
        |truck, parcel| truck.free_width() >= parcel.width_bottom,
        Advance::WhenFull,
        PackStage::Width,
    );
    outcome.trucks.retain(|t| !t.is_empty());
    info!(
        trucks = outcome.trucks.len(),
        unplaced = outcome.unplaced.len(),
        "width pass finished"
    );
    outcome
}

/// Complex mode, second pass: pack merged parcels by height.
///
/// Expects a freshly built fleet; empty trucks are kept so the caller sees
/// the whole fleet (the renderer skips them).
pub fn load_by_height(parcels: Vec<Parcel>, trucks: Vec<Truck>) -> LoadOutcome {
    let outcome = walk(
        parcels,
        trucks,
        |truck, parcel| truck.free_height() >= parcel.height,
        Advance::WhenFull,
        PackStage::Height,
    );
    info!(
        placed = outcome.placed_count(),
        unplaced = outcome.unplaced.len(),
        "height pass finished"
    );
    outcome
}
