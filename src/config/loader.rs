//! Loading settings and ingress entries from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::CheckerConfig;
use crate::config::validation::validate_config;
use crate::entry::ConfigEntry;
use crate::error::{LoadError, LoadResult};

/// Serialization format of an entry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFormat {
    Toml,
    Json,
}

impl EntryFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

fn read(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate checker settings from a TOML file.
pub fn load_config(path: &Path) -> LoadResult<CheckerConfig> {
    let content = read(path)?;
    let config: CheckerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(LoadError::Settings)?;

    Ok(config)
}

/// Deserialize an entry without normalizing or validating it.
pub fn parse_entry(content: &str, format: EntryFormat) -> LoadResult<ConfigEntry> {
    let entry = match format {
        EntryFormat::Toml => toml::from_str(content)?,
        EntryFormat::Json => serde_json::from_str(content)?,
    };
    Ok(entry)
}

/// Load an entry and normalize it, without validating.
pub fn load_entry_unchecked(path: &Path) -> LoadResult<ConfigEntry> {
    let format = EntryFormat::from_path(path)?;
    let mut entry = parse_entry(&read(path)?, format)?;
    entry.normalize()?;
    Ok(entry)
}

/// Load an entry, normalize it and validate it.
pub fn load_entry(path: &Path) -> LoadResult<ConfigEntry> {
    let entry = load_entry_unchecked(path)?;
    entry.validate()?;

    tracing::debug!(path = ?path, entry = %entry.name(), "Loaded ingress gateway entry");
    Ok(entry)
}
