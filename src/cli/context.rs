//! Shared command context for CLI commands
//!
//! Loads the config file and the shape catalog once for every command.

use truckload::catalog::{Catalog, load_catalog};
use truckload::config::{Config, load_config};
use truckload::error::Result;
use std::path::Path;

/// Settings and shapes shared by `pack` and `shapes`
pub struct CommandContext {
    /// Loaded (or default) configuration
    pub config: Config,
    /// Shapes available for name lookup
    pub catalog: Catalog,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// Catalog precedence: `--catalog`, then config `catalog`, then the
    /// built-in shapes.
    pub fn new(config_path: Option<&Path>, catalog_path: Option<&Path>) -> Result<Self> {
        let config = load_config(config_path)?;

        let catalog = match catalog_path.or(config.catalog.as_deref()) {
            Some(path) => load_catalog(path)?,
            None => Catalog::builtin(),
        };

        Ok(Self { config, catalog })
    }
}
