//! Serializable manifest of a loaded fleet

use crate::types::{Parcel, ROW_DELIMITER, Truck};
use serde::{Deserialize, Serialize};

/// Top-level JSON document: `{"trucks":[...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckManifest {
    /// Loaded trucks, empty ones omitted
    pub trucks: Vec<TruckEntry>,
}

/// One loaded truck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckEntry {
    /// Parcels in placement order
    pub packages: Vec<PackageEntry>,
}

/// One parcel as a form string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    /// Rows joined by `:`
    pub package: String,
}

/// Build the manifest for every truck that holds at least one parcel
pub fn build_manifest(trucks: &[Truck]) -> TruckManifest {
    let trucks = trucks
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| TruckEntry {
            packages: t
                .parcels
                .iter()
                .map(|p| PackageEntry {
                    package: manifest_form(p),
                })
                .collect(),
        })
        .collect();
    TruckManifest { trucks }
}

/// Rejoin rows with the delimiter, collapsing doubled delimiters left by
/// empty rows and dropping a trailing one.
fn manifest_form(parcel: &Parcel) -> String {
    let mut form = String::new();
    for row in &parcel.rows {
        form.push_str(row);
        form.push(ROW_DELIMITER);
    }

    let doubled = format!("{ROW_DELIMITER}{ROW_DELIMITER}");
    while form.contains(&doubled) {
        form = form.replace(&doubled, &ROW_DELIMITER.to_string());
    }
    form.strip_suffix(ROW_DELIMITER).unwrap_or(&form).to_string()
}
