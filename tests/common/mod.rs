//! Shared fixtures for truckload tests
//!
//! Not every helper is used by every test binary.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;
use truckload::catalog::{Catalog, Shape};
use truckload::parcel::parse_parcel;
use truckload::types::{OutputFormat, PackMode, Parcel, Truck};
use truckload::pack::PackRequest;

/// Parse a form, panicking on bad fixtures
pub fn parcel(form: &str) -> Parcel {
    parse_parcel(form).expect("fixture form should parse")
}

/// A truck already holding the given forms
pub fn loaded_truck(height: usize, width: usize, forms: &[&str]) -> Truck {
    let mut truck = Truck::new(height, width);
    truck.parcels = forms.iter().map(|f| parcel(f)).collect();
    truck
}

/// Forms of a truck's parcels, in placement order
pub fn truck_forms(truck: &Truck) -> Vec<String> {
    truck.parcels.iter().map(Parcel::form).collect()
}

/// Build a pack request from string slices
pub fn make_request(forms: &[&str], fleet: &str, mode: PackMode, format: OutputFormat) -> PackRequest {
    PackRequest {
        forms: forms.iter().map(|f| (*f).to_string()).collect(),
        fleet: fleet.to_string(),
        mode,
        format,
    }
}

/// Catalog with a handful of named shapes
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Shape::new("Five", "55555"),
        Shape::new("Six", "666:666"),
        Shape::new("Nine", "999:999:999"),
    ])
}

/// Write a JSON catalog file into `dir`
pub fn write_catalog(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("shapes.json");
    std::fs::write(&path, body).expect("write catalog fixture");
    path
}

/// Write a TOML config file into `dir`
pub fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).expect("write config fixture");
    path
}
