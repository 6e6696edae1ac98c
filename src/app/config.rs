//! Extraction configuration loading.

use std::path::Path;

use crate::domain::{AppError, ExtractConfig};
use crate::ports::Filesystem;

/// Load the configuration at `path`, or the defaults when no path is given.
pub fn load_config<F: Filesystem>(
    path: Option<&Path>,
    filesystem: &F,
) -> Result<ExtractConfig, AppError> {
    let Some(path) = path else {
        return Ok(ExtractConfig::default());
    };

    if !filesystem.exists(path) {
        return Err(AppError::config_error(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let bytes = filesystem.read(path)?;
    let content = String::from_utf8(bytes).map_err(|e| {
        AppError::parse_error(path.display().to_string(), e)
    })?;
    ExtractConfig::parse(&content)
}
