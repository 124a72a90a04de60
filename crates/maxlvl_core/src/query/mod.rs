//! Derived queries over an immutable [`Dataset`].
//!
//! Every query is total: an unknown name, an out-of-range level or
//! townhall, a missing optional field and a query aimed at the wrong
//! variant all answer `None` (or `false` / an empty list).
//!
//! The query surface is split by concern:
//!
//! - [`accessors`] - classification, per-townhall caps, gear-up data
//! - [`costs`] - level-indexed cost and time
//! - [`aggregate`] - totals to max, availability, enumeration
//! - [`crafting`] - Crafting Station modes and modules

pub mod accessors;
pub mod aggregate;
pub mod costs;
pub mod crafting;

use crate::config::CatalogConfig;
use crate::data::EntityRecord;
use crate::dataset::Dataset;
use crate::error::Result;

/// Query engine owning the dataset and its configuration.
///
/// Holds no mutable state, so a shared reference can be used from any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dataset: Dataset,
    config: CatalogConfig,
}

impl Catalog {
    /// Create a catalog over `dataset`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(dataset: Dataset, config: CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(dataset, config))
    }

    /// Create a catalog with the default configuration.
    #[must_use]
    pub fn with_default_config(dataset: Dataset) -> Self {
        Self::from_parts(dataset, CatalogConfig::default())
    }

    fn from_parts(dataset: Dataset, config: CatalogConfig) -> Self {
        tracing::debug!(
            entities = dataset.len(),
            max_townhall = config.max_townhall,
            crafting_station = ?dataset.crafting_station().map(|(name, _)| name),
            "Catalog created"
        );
        Self { dataset, config }
    }

    /// The underlying dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Look up a record by name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&EntityRecord> {
        self.dataset.get(name)
    }

    /// Check whether `name` is a known entity.
    ///
    /// Separates "unknown" from "known but without data", which both answer
    /// `None` from the value queries.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.dataset.contains(name)
    }

    /// All entity names in dataset order.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.dataset.names()
    }
}
