//! Forward-only first-fit walk shared by every loading pass

use super::LoadOutcome;
use crate::types::{PackStage, Parcel, Truck};
use tracing::{debug, warn};

/// When the cursor leaves a truck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Advance {
    /// Move on after every placement (and on misfit)
    AfterPlacement,
    /// Move on only when the current parcel does not fit
    WhenFull,
}

/// Cursor over the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    At(usize),
    Exhausted,
}

impl Cursor {
    const fn next(self, fleet_len: usize) -> Self {
        match self {
            Self::At(i) if i + 1 < fleet_len => Self::At(i + 1),
            _ => Self::Exhausted,
        }
    }
}

/// Place parcels in order, first fit from the cursor onward.
///
/// Each step either places the current parcel or advances the cursor, so
/// the walk takes at most `parcels + trucks` steps. Once the cursor is
/// exhausted the current parcel and everything after it are unplaced.
pub(super) fn walk<F>(
    parcels: Vec<Parcel>,
    mut trucks: Vec<Truck>,
    fits: F,
    advance: Advance,
    stage: PackStage,
) -> LoadOutcome
where
    F: Fn(&Truck, &Parcel) -> bool,
{
    let mut cursor = if trucks.is_empty() {
        Cursor::Exhausted
    } else {
        Cursor::At(0)
    };
    let mut pending = parcels.into_iter();
    let mut unplaced = Vec::new();

    while let Some(parcel) = pending.next() {
        loop {
            let Cursor::At(index) = cursor else {
                warn!(%stage, parcel = %parcel, "no truck left for parcel");
                unplaced.push(parcel);
                unplaced.extend(pending.by_ref());
                break;
            };

            let truck = &mut trucks[index];
            if fits(truck, &parcel) {
                debug!(%stage, truck = index, parcel = %parcel, "placed parcel");
                truck.parcels.push(parcel);
                if advance == Advance::AfterPlacement {
                    cursor = cursor.next(trucks.len());
                }
                break;
            }
            cursor = cursor.next(trucks.len());
        }
    }

    LoadOutcome { trucks, unplaced }
}
