//! Named parcel shapes
//!
//! A read-only lookup from shape names to form strings, used to pick the
//! parcels for a run by name.

mod storage;

pub use storage::load_catalog;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Separator for name lists such as `"Five,Six"`
const NAME_SEPARATOR: char = ',';

/// A stored parcel shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique display name
    pub name: String,
    /// Colon-delimited form string
    pub form: String,
    /// Glyph the shape is drawn with (first glyph of the form when omitted)
    #[serde(default)]
    pub symbol: String,
}

impl Shape {
    /// Create a shape, deriving the symbol from the form
    pub fn new(name: impl Into<String>, form: impl Into<String>) -> Self {
        let form = form.into();
        let symbol = first_glyph(&form);
        Self {
            name: name.into(),
            form,
            symbol,
        }
    }
}

fn first_glyph(form: &str) -> String {
    form.chars().next().map(String::from).unwrap_or_default()
}

/// An ordered collection of shapes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    shapes: Vec<Shape>,
}

impl Catalog {
    /// Build a catalog from shapes, filling in any missing symbols
    pub fn new(shapes: Vec<Shape>) -> Self {
        let shapes = shapes
            .into_iter()
            .map(|mut s| {
                if s.symbol.is_empty() {
                    s.symbol = first_glyph(&s.form);
                }
                s
            })
            .collect();
        Self { shapes }
    }

    /// The default shape set: `One` through `Nine`
    pub fn builtin() -> Self {
        Self::new(vec![
            Shape::new("One", "1"),
            Shape::new("Two", "22"),
            Shape::new("Three", "333"),
            Shape::new("Four", "4444"),
            Shape::new("Five", "55555"),
            Shape::new("Six", "666:666"),
            Shape::new("Seven", "777:7777"),
            Shape::new("Eight", "8888:8888"),
            Shape::new("Nine", "999:999:999"),
        ])
    }

    /// All shapes in catalog order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Look up a shape by exact name
    pub fn find(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name == name)
    }

    /// Every stored form, in catalog order
    pub fn all_forms(&self) -> Vec<String> {
        self.shapes.iter().map(|s| s.form.clone()).collect()
    }

    /// Resolve a comma-separated name list to forms.
    ///
    /// Names are trimmed and resolved in order; unknown names are skipped.
    /// A blank list selects every stored form.
    pub fn forms_for_names(&self, names: &str) -> Vec<String> {
        if names.trim().is_empty() {
            return self.all_forms();
        }

        names
            .split(NAME_SEPARATOR)
            .map(str::trim)
            .filter_map(|name| {
                let shape = self.find(name);
                if shape.is_none() {
                    debug!(name, "skipping unknown shape");
                }
                shape
            })
            .map(|s| s.form.clone())
            .collect()
    }
}
