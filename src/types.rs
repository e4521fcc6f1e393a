//! Core types for truckload

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Row delimiter used by parcel form strings (`row1:row2:...`)
pub const ROW_DELIMITER: char = ':';

/// A parcel shape described by stacked rows of glyphs
///
/// Built by [`parse_parcel`](crate::parcel::parse_parcel) from a form string,
/// or by [`merge_parcels`](crate::parcel::merge_parcels) from two parcels
/// that shared a truck slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parcel {
    /// Number of rows
    pub height: usize,
    /// Glyph count of the first row
    pub width_top: usize,
    /// Glyph count of the last row
    pub width_bottom: usize,
    /// Rows, top to bottom
    pub rows: Vec<String>,
}

impl Parcel {
    /// Encode the rows back into a form string
    pub fn form(&self) -> String {
        self.rows.join(&ROW_DELIMITER.to_string())
    }
}

impl std::fmt::Display for Parcel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.form())
    }
}

/// A capacity bin with a fixed height and width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truck {
    /// Height capacity
    pub height: usize,
    /// Width capacity
    pub width: usize,
    /// Loaded parcels in placement order
    pub parcels: Vec<Parcel>,
}

impl Truck {
    /// Create an empty truck
    pub const fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            parcels: Vec::new(),
        }
    }

    /// Width left after the bottom widths of loaded parcels.
    ///
    /// Saturates at zero; an overfull truck has no free width.
    pub fn free_width(&self) -> usize {
        let used: usize = self.parcels.iter().map(|p| p.width_bottom).sum();
        self.width.saturating_sub(used)
    }

    /// Height left after the heights of loaded parcels (saturating)
    pub fn free_height(&self) -> usize {
        let used: usize = self.parcels.iter().map(|p| p.height).sum();
        self.height.saturating_sub(used)
    }

    /// Whether no parcel has been placed yet
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }
}

impl std::fmt::Display for Truck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Packing strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackMode {
    /// One parcel per truck, width only
    Simple,
    /// Width pass, pairwise merge, then height pass
    #[default]
    Complex,
}

impl std::fmt::Display for PackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

impl FromStr for PackMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "s" => Ok(Self::Simple),
            "complex" | "c" => Ok(Self::Complex),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// Rendering format for a loaded fleet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered text grid
    #[default]
    Text,
    /// `{"trucks":[{"packages":[...]}]}` document
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Placement pass that produced a result (or ran out of trucks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackStage {
    /// Simple one-parcel-per-truck pass
    Simple,
    /// Complex mode, first pass by bottom width
    Width,
    /// Complex mode, second pass by height over merged parcels
    Height,
}

impl std::fmt::Display for PackStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple pass"),
            Self::Width => write!(f, "width pass"),
            Self::Height => write!(f, "height pass"),
        }
    }
}
