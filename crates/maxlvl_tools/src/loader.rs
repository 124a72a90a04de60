//! Dataset and configuration loading.
//!
//! The entity asset is a JSON object keyed by entity name. Records are
//! classified one at a time so that a malformed record is reported with its
//! name. Configuration lives in RON files.

use std::path::Path;

use maxlvl_core::prelude::*;
use serde::Deserialize;
use serde_json::value::RawValue;
use thiserror::Error;

/// Errors that can occur while loading data or configuration.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The asset is not a JSON object of records.
    #[error("Failed to parse JSON data '{path}': {source}")]
    Parse {
        /// Path to the file, or `<string>` for in-memory input.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A single record is malformed.
    #[error("Invalid record for entity '{name}': {source}")]
    Entity {
        /// Entity whose record failed.
        name: String,
        /// Underlying parse or classification error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse a RON configuration file.
    #[error("Failed to parse RON config '{path}': {source}")]
    Config {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Records parsed but do not form a valid dataset or configuration.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Dataset consistency checks failed.
    #[error("Validation failed with {} finding(s): {:?}", .errors.len(), .errors)]
    Validation {
        /// List of validation findings.
        errors: Vec<String>,
    },
}

/// Result type for loading operations.
pub type DataLoadResult<T> = std::result::Result<T, DataLoadError>;

/// Label used as the path of in-memory input.
const STRING_SOURCE: &str = "<string>";

/// Top-level asset shape: unparsed record text keyed by name, in file order.
///
/// Records stay as raw JSON so their nested objects keep source order.
#[derive(Deserialize)]
struct RawAsset(
    #[serde(with = "maxlvl_core::data::ordered_map")] Vec<(String, Box<RawValue>)>,
);

fn read_file(path: &Path) -> DataLoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_dataset(json: &str, origin: &str) -> DataLoadResult<Dataset> {
    let RawAsset(raw) = serde_json::from_str(json).map_err(|source| DataLoadError::Parse {
        path: origin.to_string(),
        source,
    })?;

    let mut entries = Vec::with_capacity(raw.len());
    for (name, text) in raw {
        let record: EntityRecord = match serde_json::from_str(text.get()) {
            Ok(record) => record,
            Err(source) => return Err(DataLoadError::Entity { name, source }),
        };
        entries.push((name, record));
    }

    let dataset = Dataset::from_entries(entries)?;
    log_summary(&dataset, origin);
    Ok(dataset)
}

fn log_summary(dataset: &Dataset, origin: &str) {
    let mut huts = 0usize;
    let mut stations = 0usize;
    for (_, record) in dataset.iter() {
        match record {
            EntityRecord::Standard(_) => {}
            EntityRecord::BuildersHut(_) => huts += 1,
            EntityRecord::CraftingStation(_) => stations += 1,
        }
    }
    tracing::info!(
        "Loaded {} entities from {} ({} builder's huts, {} crafting stations)",
        dataset.len(),
        origin,
        huts,
        stations
    );
}

/// Load the entity dataset from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON object, holds
/// a malformed record, or repeats a name or crafting station.
pub fn load_dataset_from_file(path: &Path) -> DataLoadResult<Dataset> {
    let contents = read_file(path)?;
    parse_dataset(&contents, &path.display().to_string())
}

/// Load the entity dataset from JSON text.
///
/// # Errors
///
/// Same as [`load_dataset_from_file`], minus IO.
pub fn load_dataset_from_str(json: &str) -> DataLoadResult<Dataset> {
    parse_dataset(json, STRING_SOURCE)
}

/// Load a catalog configuration from a RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the
/// configuration fails [`CatalogConfig::validate`].
pub fn load_config_from_file(path: &Path) -> DataLoadResult<CatalogConfig> {
    let contents = read_file(path)?;
    let config: CatalogConfig =
        ron::from_str(&contents).map_err(|source| DataLoadError::Config {
            path: path.display().to_string(),
            source,
        })?;
    config.validate()?;
    tracing::debug!(max_townhall = config.max_townhall, "Loaded catalog config");
    Ok(config)
}

/// Load a dataset and an optional configuration file into a catalog.
///
/// Without a configuration path the default configuration is used.
///
/// # Errors
///
/// Returns any error from the dataset or configuration loaders.
pub fn load_catalog(data: &Path, config: Option<&Path>) -> DataLoadResult<Catalog> {
    let dataset = load_dataset_from_file(data)?;
    let config = match config {
        Some(path) => load_config_from_file(path)?,
        None => CatalogConfig::default(),
    };
    Ok(Catalog::new(dataset, config)?)
}
