//! Parcel fusion for the complex packing path

use crate::types::{Parcel, Truck};
use tracing::debug;

/// Fuse two parcels that shared a truck slot into one composite parcel.
///
/// Dimensions: height and top width take the larger of the two, bottom
/// widths add up. Row `i` of the result is built as `b.rows[i]` followed
/// by `a.rows[i]` (either side may be missing once the shorter parcel runs
/// out), and the combined rows are then reversed to form the final stack.
///
/// Neither input is modified.
pub fn merge_parcels(a: &Parcel, b: &Parcel) -> Parcel {
    let depth = a.rows.len().max(b.rows.len());

    let mut rows: Vec<String> = (0..depth)
        .map(|i| {
            let mut row = String::new();
            if let Some(right) = b.rows.get(i) {
                row.push_str(right);
            }
            if let Some(left) = a.rows.get(i) {
                row.push_str(left);
            }
            row
        })
        .collect();
    rows.reverse();

    Parcel {
        height: a.height.max(b.height),
        width_top: a.width_top.max(b.width_top),
        width_bottom: a.width_bottom + b.width_bottom,
        rows,
    }
}

/// Collapse the parcels of each width-pass truck into one parcel per truck.
///
/// A truck holding a single parcel passes it through unchanged. Trucks with
/// more parcels are folded left to right, so every parcel ends up in the
/// composite. Empty trucks contribute nothing.
pub fn merge_truck_parcels(trucks: &[Truck]) -> Vec<Parcel> {
    trucks
        .iter()
        .enumerate()
        .filter_map(|(index, truck)| {
            let (first, rest) = truck.parcels.split_first()?;
            let merged = rest.iter().fold(first.clone(), |acc, next| {
                debug!(truck = index, left = %acc, right = %next, "merging parcels");
                merge_parcels(&acc, next)
            });
            Some(merged)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parcel::parse_parcel;

    fn truck_with(forms: &[&str]) -> Truck {
        let mut truck = Truck::new(10, 10);
        truck.parcels = forms.iter().map(|f| parse_parcel(f).unwrap()).collect();
        truck
    }

    #[test]
    fn test_merge_dimensions() {
        let a = parse_parcel("999:999:999").unwrap();
        let b = parse_parcel("666:666").unwrap();

        let merged = merge_parcels(&a, &b);
        assert_eq!(merged.height, 3);
        assert_eq!(merged.width_top, 3);
        assert_eq!(merged.width_bottom, 6);
    }

    #[test]
    fn test_merge_rows_are_fused_then_reversed() {
        let a = parse_parcel("A:B").unwrap();
        let b = parse_parcel("X:Y").unwrap();

        let merged = merge_parcels(&a, &b);
        assert_eq!(merged.rows, vec!["YB", "XA"]);
    }

    #[test]
    fn test_merge_uneven_heights() {
        let a = parse_parcel("999:999:999").unwrap();
        let b = parse_parcel("666:666").unwrap();

        let merged = merge_parcels(&a, &b);
        assert_eq!(merged.rows, vec!["999", "666999", "666999"]);
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let a = parse_parcel("1").unwrap();
        let b = parse_parcel("22").unwrap();
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = merge_parcels(&a, &b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_single_parcel_truck_passes_through() {
        let trucks = vec![truck_with(&["8888:8888"])];

        let merged = merge_truck_parcels(&trucks);
        assert_eq!(merged, vec![parse_parcel("8888:8888").unwrap()]);
    }

    #[test]
    fn test_three_parcel_truck_keeps_every_parcel() {
        let trucks = vec![truck_with(&["1", "22", "333"])];

        let merged = merge_truck_parcels(&trucks);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].width_bottom, 6);
        assert_eq!(merged[0].rows, vec!["333221"]);
    }

    #[test]
    fn test_empty_trucks_are_skipped() {
        let trucks = vec![Truck::new(3, 3), truck_with(&["1", "1"])];

        let merged = merge_truck_parcels(&trucks);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].form(), "11");
    }
}
