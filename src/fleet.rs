//! Truck factory: capacity spec parsing

use crate::error::{Error, Result};
use crate::types::Truck;

/// Separator between trucks in a capacity spec
const TRUCK_SEPARATOR: char = ',';

/// Separator between height and width in a single truck token
const DIMENSION_SEPARATOR: char = 'x';

/// Build an ordered list of empty trucks from a spec like `"5x5,6x3"`.
///
/// Each token is `<height>x<width>`. Any malformed token aborts the whole
/// parse; no partial fleet is returned.
pub fn parse_fleet(spec: &str) -> Result<Vec<Truck>> {
    if spec.trim().is_empty() {
        return Err(Error::InvalidFleet("empty truck spec".to_string()));
    }

    spec.split(TRUCK_SEPARATOR).map(parse_truck).collect()
}

fn parse_truck(token: &str) -> Result<Truck> {
    let token = token.trim();
    let (height, width) = token
        .split_once(DIMENSION_SEPARATOR)
        .ok_or_else(|| Error::InvalidFleet(format!("'{token}' is missing '{DIMENSION_SEPARATOR}'")))?;

    let height = parse_dimension(token, height)?;
    let width = parse_dimension(token, width)?;
    Ok(Truck::new(height, width))
}

fn parse_dimension(token: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|e| Error::InvalidFleet(format!("'{token}': '{value}' is not a size ({e})")))
}
