//! Loading shape catalogs from JSON files.

use super::{Catalog, Shape};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a catalog from a JSON array of `{ "name", "form", "symbol" }`.
///
/// `symbol` may be omitted. Read and parse failures name the file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Catalog(format!("failed to read {}: {e}", path.display())))?;

    let shapes: Vec<Shape> = serde_json::from_str(&content)
        .map_err(|e| Error::Catalog(format!("failed to parse {}: {e}", path.display())))?;

    info!(path = %path.display(), shapes = shapes.len(), "loaded shape catalog");
    Ok(Catalog::new(shapes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("shapes.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_catalog_reads_shapes() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(
            &temp,
            r#"[{"name":"Five","form":"55555:55555","symbol":"5"},{"name":"Dot","form":"*"}]"#,
        );

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.shapes().len(), 2);
        assert_eq!(catalog.find("Five").unwrap().form, "55555:55555");
        assert_eq!(catalog.find("Dot").unwrap().symbol, "*");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");

        match load_catalog(&path) {
            Err(Error::Catalog(msg)) => assert!(msg.contains("nope.json")),
            other => panic!("Expected Catalog error, got: {other:?}"),
        }
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp, r#"{"name":"Five"}"#);

        assert!(matches!(load_catalog(&path), Err(Error::Catalog(_))));
    }
}
