//! Loader for the RON config file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

pub const CONFIG_PATH: &str = "assets/data/locomotion.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse config text. `file` is only used in error messages.
pub fn parse_config(contents: &str, file: &str) -> Result<LocomotionConfig, ContentLoadError> {
    let config: LocomotionConfig = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if config.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "schema_version {} is newer than supported version {}",
                config.schema_version, CURRENT_SCHEMA_VERSION
            ),
        });
    }

    Ok(config)
}

/// Read and parse a config file.
pub fn load_config(path: &Path) -> Result<LocomotionConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let config = parse_config(&contents, &file_name)?;
    debug!("Parsed {} (schema {})", file_name, config.schema_version);
    Ok(config)
}
