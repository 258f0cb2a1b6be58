//! Table view configuration loading.

use std::fs;
use std::path::Path;

use log::{debug, info};
use tabview::config::TableConfig;

use crate::error::FleetError;
use crate::paths;

/// Parse and validate a view config document.
pub fn parse_view_config(json: &str, origin: &Path) -> Result<TableConfig, FleetError> {
    let config: TableConfig = serde_json::from_str(json).map_err(FleetError::json(origin))?;
    config.validate()?;
    Ok(config)
}

/// Load the view config.
///
/// An explicit path must exist. Without one, `view.json` in the config
/// directory is used when present, defaults otherwise.
pub fn load_view_config(explicit: Option<&Path>) -> Result<TableConfig, FleetError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match paths::view_config() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No view config found, using defaults");
                return Ok(TableConfig::default());
            }
        },
    };

    let json = fs::read_to_string(&path).map_err(FleetError::io(&path))?;
    let config = parse_view_config(&json, &path)?;
    info!("Loaded view config from {}", path.display());
    Ok(config)
}
