//! Parcel parsing, ordering, and merging
//!
//! Pure functions over [`Parcel`] values. Nothing here touches a fleet;
//! the loader decides where parcels go.

mod merge;

pub use merge::{merge_parcels, merge_truck_parcels};

use crate::error::{Error, Result};
use crate::types::{Parcel, ROW_DELIMITER};
use tracing::debug;

/// Parse a colon-delimited form string into a parcel.
///
/// Rows are taken top to bottom. Interior row widths are not validated.
/// Trailing empty rows (e.g. `"AA:"`) are dropped; a form with no rows
/// left is rejected with [`Error::EmptyParcel`].
pub fn parse_parcel(form: &str) -> Result<Parcel> {
    let mut rows: Vec<String> = form.split(ROW_DELIMITER).map(String::from).collect();
    while rows.last().is_some_and(String::is_empty) {
        rows.pop();
    }

    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Err(Error::EmptyParcel);
    };

    let parcel = Parcel {
        height: rows.len(),
        width_top: first.chars().count(),
        width_bottom: last.chars().count(),
        rows,
    };
    debug!(
        height = parcel.height,
        width_top = parcel.width_top,
        width_bottom = parcel.width_bottom,
        "parsed parcel"
    );
    Ok(parcel)
}

/// Parse every form in order, aborting on the first bad one
pub fn parse_parcels<S: AsRef<str>>(forms: &[S]) -> Result<Vec<Parcel>> {
    forms.iter().map(|f| parse_parcel(f.as_ref())).collect()
}

/// Order parcels by ascending bottom width.
///
/// The sort is stable: parcels with equal bottom widths keep their input order.
pub fn sort_parcels(parcels: &mut [Parcel]) {
    parcels.sort_by_key(|p| p.width_bottom);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_diamond_form() {
        let parcel = parse_parcel("AAA:AA:AA").unwrap();

        assert_eq!(parcel.height, 3);
        assert_eq!(parcel.width_top, 3);
        assert_eq!(parcel.width_bottom, 2);
        assert_eq!(parcel.rows, vec!["AAA", "AA", "AA"]);
    }

    #[test]
    fn test_parse_single_row() {
        let parcel = parse_parcel("4444").unwrap();

        assert_eq!(parcel.height, 1);
        assert_eq!(parcel.width_top, parcel.width_bottom);
        assert_eq!(parcel.width_top, 4);
    }

    #[test]
    fn test_parse_accepts_irregular_interior() {
        let parcel = parse_parcel("D:DDDDD:DDD").unwrap();

        assert_eq!(parcel.width_top, 1);
        assert_eq!(parcel.width_bottom, 3);
        assert_eq!(parcel.rows[1], "DDDDD");
    }

    #[test]
    fn test_parse_drops_trailing_delimiter() {
        let parcel = parse_parcel("777:7777:").unwrap();

        assert_eq!(parcel.height, 2);
        assert_eq!(parcel.width_bottom, 4);
    }

    #[test]
    fn test_parse_rejects_empty_form() {
        assert!(matches!(parse_parcel(""), Err(Error::EmptyParcel)));
        assert!(matches!(parse_parcel(":"), Err(Error::EmptyParcel)));
    }

    #[test]
    fn test_parse_counts_glyphs_not_bytes() {
        let parcel = parse_parcel("ЖЖ:Ж").unwrap();

        assert_eq!(parcel.width_top, 2);
        assert_eq!(parcel.width_bottom, 1);
    }

    #[test]
    fn test_parse_parcels_aborts_on_empty() {
        let result = parse_parcels(&["1", "", "22"]);
        assert!(matches!(result, Err(Error::EmptyParcel)));
    }

    #[test]
    fn test_sort_is_non_decreasing_and_stable() {
        let mut parcels = parse_parcels(&["333", "A", "22", "B", "4444", "C:55"]).unwrap();
        sort_parcels(&mut parcels);

        let widths: Vec<usize> = parcels.iter().map(|p| p.width_bottom).collect();
        assert!(widths.windows(2).all(|w| w[0] <= w[1]));

        let forms: Vec<String> = parcels.iter().map(Parcel::form).collect();
        assert_eq!(forms, vec!["A", "B", "22", "C:55", "333", "4444"]);
    }
}
