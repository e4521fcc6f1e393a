//! User configuration in `<config_dir>/truckload/config.toml`.

use crate::error::{Error, Result};
use crate::types::{OutputFormat, PackMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name for truckload config within the platform config dir.
const CONFIG_DIR: &str = "truckload";

/// Filename for the config file.
const CONFIG_FILE: &str = "config.toml";

/// Defaults applied when the command line leaves a setting out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Packing mode
    pub mode: PackMode,
    /// Output format
    pub format: OutputFormat,
    /// JSON shape catalog (built-in shapes when unset)
    pub catalog: Option<PathBuf>,
    /// File that receives JSON results (stdout when unset)
    pub output: Option<PathBuf>,
}

/// Default config file location, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one the default location is
/// tried, and a missing default file yields `Config::default()`.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            _ => {
                debug!("no config file, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path_location() {
        if let Some(path) = config_path() {
            assert!(path.ends_with("truckload/config.toml"));
        }
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "mode = \"simple\"\nformat = \"json\"\noutput = \"result.json\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.mode, PackMode::Simple);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output, Some(PathBuf::from("result.json")));
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "format = \"json\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.mode, PackMode::Complex);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_mode_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "mode = \"diagonal\"\n").unwrap();

        match load_config(Some(&path)) {
            Err(Error::Config(msg)) => assert!(msg.contains("failed to parse")),
            other => panic!("Expected Config error, got: {other:?}"),
        }
    }
}
