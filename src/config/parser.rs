//! TOML file parsing with error context.

use anyhow::{Context, Result};
use std::path::Path;

/// Read and deserialize a TOML file.
///
/// Both the read and the parse step attach the file path to the error, so a
/// broken configuration is reported as `Failed to parse config file: <path>`
/// followed by the TOML diagnostic.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}
