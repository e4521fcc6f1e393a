//! truckload - greedy parcel-to-truck loading
//!
//! Parcels are stacked rows of glyphs (`"999:999:999"`); trucks are
//! `height x width` bins (`"5x5,6x6"`). A run sorts parcels by bottom width
//! and places them first-fit, either one per truck (simple mode) or in a
//! width pass, pairwise merge and height pass (complex mode), then renders
//! the load as a text grid or JSON.
//!
//! ```
//! use truckload::pack::{PackRequest, pack};
//! use truckload::types::{OutputFormat, PackMode};
//!
//! let report = pack(&PackRequest {
//!     forms: vec!["1:2".to_string()],
//!     fleet: "3x3".to_string(),
//!     mode: PackMode::Simple,
//!     format: OutputFormat::Json,
//! })
//! .unwrap();
//! assert_eq!(report.output, r#"{"trucks":[{"packages":[{"package":"1:2"}]}]}"#);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fleet;
pub mod loader;
pub mod pack;
pub mod parcel;
pub mod render;
pub mod types;
